//! Integration tests against a live PostgreSQL instance.
//!
//! These run only when `BUDGETFLOW_TEST_DATABASE_URL` points at a disposable
//! database (e.g. `postgres://postgres@localhost:5432/budgetflow_test`);
//! otherwise each test skips itself. The schema is created once per test
//! process through the same migration path production uses.

use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal_macros::dec;

use budgetflow_core::budgets::{BudgetRepositoryTrait, NewBudget};
use budgetflow_core::errors::{DatabaseError, Error};
use budgetflow_core::expenses::{ExpenseRepositoryTrait, NewExpense, TransactionKind};
use budgetflow_core::recurring::{Frequency, NewRecurringPayment, RecurringRepositoryTrait};
use budgetflow_core::users::{NewUser, UserRepositoryTrait};
use budgetflow_storage_postgres::budgets::BudgetRepository;
use budgetflow_storage_postgres::expenses::ExpenseRepository;
use budgetflow_storage_postgres::recurring::RecurringRepository;
use budgetflow_storage_postgres::schema::users;
use budgetflow_storage_postgres::users::UserRepository;
use budgetflow_storage_postgres::{
    create_pool, get_connection, run_migrations, shutdown_pool, DbConfig, DbPool,
};

const ENV_URL: &str = "BUDGETFLOW_TEST_DATABASE_URL";

fn test_url() -> Option<String> {
    std::env::var(ENV_URL).ok()
}

/// One pool per test process, with the schema migrated exactly once.
fn shared_pool() -> Option<Arc<DbPool>> {
    static POOL: OnceLock<Option<Arc<DbPool>>> = OnceLock::new();
    POOL.get_or_init(|| {
        let config = DbConfig::from_url(test_url()?);
        let pool = create_pool(&config).expect("test database should be reachable");
        run_migrations(&pool).expect("schema creation should succeed");
        Some(pool)
    })
    .clone()
}

/// Removes the user and (via ON DELETE CASCADE) all their rows, so each test
/// starts from a clean slate for its own user id.
fn reset_user(pool: &DbPool, user_id: i64) {
    let mut conn = get_connection(pool).unwrap();
    diesel::delete(users::table.find(user_id))
        .execute(&mut conn)
        .unwrap();
}

fn register_user(pool: &Arc<DbPool>, user_id: i64) {
    reset_user(pool, user_id);
    UserRepository::new(pool.clone())
        .ensure_user(NewUser::new(user_id, Some("Test".to_string())))
        .unwrap();
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn expense(user_id: i64, category: &str, amount: rust_decimal::Decimal) -> NewExpense {
    NewExpense {
        user_id,
        kind: TransactionKind::Expense,
        amount,
        currency: None,
        category: category.to_string(),
        description: None,
        occurred_on: Some(d(2025, 6, 10)),
        raw_text: None,
    }
}

macro_rules! require_db {
    () => {
        match shared_pool() {
            Some(pool) => pool,
            None => {
                eprintln!("skipping: {ENV_URL} not set");
                return;
            }
        }
    };
}

#[test]
fn acquired_connection_is_usable() {
    let pool = require_db!();
    let mut conn = get_connection(&pool).unwrap();
    diesel::sql_query("SELECT 1").execute(&mut conn).unwrap();
}

#[test]
fn released_connections_are_reused() {
    let Some(url) = test_url() else {
        eprintln!("skipping: {ENV_URL} not set");
        return;
    };
    let mut config = DbConfig::from_url(url);
    config.max_connections = 1;
    config.connection_timeout = Duration::from_millis(500);
    let pool = create_pool(&config).unwrap();

    // With a single slot, the second borrow only succeeds because the first
    // guard went back to the pool on drop.
    for _ in 0..3 {
        let conn = get_connection(&pool).unwrap();
        drop(conn);
    }

    shutdown_pool(pool);
}

#[test]
fn exhausted_pool_times_out_with_pool_exhausted() {
    let Some(url) = test_url() else {
        eprintln!("skipping: {ENV_URL} not set");
        return;
    };
    let mut config = DbConfig::from_url(url);
    config.max_connections = 1;
    config.connection_timeout = Duration::from_millis(300);
    let pool = create_pool(&config).unwrap();

    let _held = get_connection(&pool).unwrap();
    let started = Instant::now();
    let err = get_connection(&pool).err().unwrap();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::PoolExhausted(_))
    ));
    assert!(started.elapsed() >= Duration::from_millis(250));
}

#[test]
fn unreachable_database_fails_pool_creation() {
    if test_url().is_none() {
        eprintln!("skipping: {ENV_URL} not set");
        return;
    }
    let mut config = DbConfig::from_url("postgres://nobody@127.0.0.1:9/unreachable");
    config.connection_timeout = Duration::from_millis(300);
    let err = create_pool(&config).unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::PoolCreationFailed(_))
    ));
}

#[test]
fn running_migrations_again_is_a_no_op() {
    let pool = require_db!();
    // shared_pool() already migrated once.
    run_migrations(&pool).unwrap();
    run_migrations(&pool).unwrap();
}

#[test]
fn orphan_expense_is_rejected_by_foreign_key() {
    let pool = require_db!();
    let repo = ExpenseRepository::new(pool.clone());
    let err = repo.add(expense(-4242, "groceries", dec!(5))).unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::ForeignKeyViolation(_))
    ));
}

#[test]
fn ensure_user_upserts_and_reads_back() {
    let pool = require_db!();
    let user_id = 910_001;
    reset_user(&pool, user_id);
    let repo = UserRepository::new(pool.clone());

    let created = repo
        .ensure_user(NewUser::new(user_id, Some("Mona".to_string())))
        .unwrap();
    assert_eq!(created.currency, "EUR");

    let renamed = repo
        .ensure_user(NewUser::new(user_id, Some("Mona L.".to_string())))
        .unwrap();
    assert_eq!(renamed.first_name.as_deref(), Some("Mona L."));

    let fetched = repo.get_user(user_id).unwrap().unwrap();
    assert_eq!(fetched, renamed);
    assert!(repo.get_user(user_id + 1).unwrap().is_none());
}

#[test]
fn expense_crud_and_summaries_round_trip() {
    let pool = require_db!();
    let user_id = 910_002;
    register_user(&pool, user_id);
    let repo = ExpenseRepository::new(pool.clone());

    repo.add(expense(user_id, "groceries", dec!(40))).unwrap();
    repo.add(expense(user_id, "rent", dec!(700))).unwrap();
    let mut salary = expense(user_id, "salary", dec!(2000));
    salary.kind = TransactionKind::Income;
    repo.add(salary).unwrap();

    let (start, end) = (d(2025, 6, 1), d(2025, 6, 30));

    let all = repo.list_range(user_id, start, end, None).unwrap();
    assert_eq!(all.len(), 3);
    let spent_only = repo
        .list_range(user_id, start, end, Some(TransactionKind::Expense))
        .unwrap();
    assert_eq!(spent_only.len(), 2);

    let summary = repo.category_summary(user_id, start, end).unwrap();
    assert_eq!(summary[0].category, "rent");
    assert_eq!(summary[0].total, dec!(700));
    assert_eq!(summary[1].category, "groceries");

    let totals = repo.totals_in_range(user_id, start, end).unwrap();
    assert_eq!(totals.total_expenses, dec!(740));
    assert_eq!(totals.total_income, dec!(2000));

    assert_eq!(
        repo.total_spent(user_id, Some("rent"), start, end).unwrap(),
        dec!(700)
    );
    assert_eq!(repo.total_spent(user_id, None, start, end).unwrap(), dec!(740));

    let mut first = repo
        .get_by_id(spent_only[0].id, user_id)
        .unwrap()
        .unwrap();
    first.amount = dec!(45);
    assert!(repo.update(first.clone()).unwrap());
    assert_eq!(
        repo.get_by_id(first.id, user_id).unwrap().unwrap().amount,
        dec!(45)
    );

    // Scoped to the owner: a different user can neither see nor delete it.
    assert!(repo.get_by_id(first.id, user_id + 1).unwrap().is_none());
    assert!(!repo.delete(first.id, user_id + 1).unwrap());
    assert!(repo.delete(first.id, user_id).unwrap());
}

#[test]
fn budget_upsert_replaces_existing_limit() {
    let pool = require_db!();
    let user_id = 910_003;
    register_user(&pool, user_id);
    let repo = BudgetRepository::new(pool.clone());

    let new_budget = |limit| NewBudget {
        user_id,
        category: "food".to_string(),
        limit_amount: limit,
        period: None,
    };
    repo.set_budget(new_budget(dec!(200))).unwrap();
    let replaced = repo.set_budget(new_budget(dec!(250))).unwrap();
    assert_eq!(replaced.limit_amount, dec!(250));

    let all = repo.list(user_id).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(repo.total_limit(user_id).unwrap(), dec!(250));

    assert!(repo.delete(user_id, "food").unwrap());
    assert!(!repo.delete(user_id, "food").unwrap());
    assert_eq!(repo.total_limit(user_id).unwrap(), dec!(0));
}

#[test]
fn recurring_payment_scheduling_round_trip() {
    let pool = require_db!();
    let user_id = 910_004;
    register_user(&pool, user_id);
    let repo = RecurringRepository::new(pool.clone());

    let added = repo
        .add(NewRecurringPayment {
            user_id,
            name: "Netflix".to_string(),
            category: Some("entertainment".to_string()),
            amount: dec!(13.99),
            currency: None,
            frequency: Frequency::Monthly,
            next_due_date: d(2025, 7, 1),
            remind_days_before: None,
        })
        .unwrap();
    assert!(added.active);
    assert_eq!(added.remind_days_before, 1);

    let due = repo.due_on_or_before(d(2025, 7, 1)).unwrap();
    assert!(due.iter().any(|p| p.id == added.id));
    assert!(repo
        .due_on_or_before(d(2025, 6, 30))
        .unwrap()
        .iter()
        .all(|p| p.id != added.id));

    assert!(repo.set_next_due_date(added.id, d(2025, 7, 31)).unwrap());
    let moved = repo.get_by_id(added.id, user_id).unwrap().unwrap();
    assert_eq!(moved.next_due_date, d(2025, 7, 31));

    assert!(repo.set_active(added.id, user_id, false).unwrap());
    assert!(repo.list(user_id, true).unwrap().is_empty());
    assert_eq!(repo.list(user_id, false).unwrap().len(), 1);

    assert!(repo.delete(added.id, user_id).unwrap());
}
