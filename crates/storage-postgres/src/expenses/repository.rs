use chrono::NaiveDate;
use diesel::dsl::sum;
use diesel::prelude::*;
use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use budgetflow_core::expenses::{
    CategoryTotal, Expense, ExpenseRepositoryTrait, NewExpense, SpendingTotals, TransactionKind,
};
use budgetflow_core::Result;

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::expenses;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ExpenseRepository { pool }
    }
}

impl ExpenseRepositoryTrait for ExpenseRepository {
    fn add(&self, new_expense: NewExpense) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;
        let new_expense_db = NewExpenseDB::from(new_expense);
        let row: ExpenseDB = diesel::insert_into(expenses::table)
            .values(&new_expense_db)
            .returning(ExpenseDB::as_returning())
            .get_result(&mut conn)
            .into_core()?;
        info!("added {} #{} for user {}", row.kind, row.id, row.user_id);
        Ok(Expense::from(row))
    }

    fn get_by_id(&self, expense_id: i64, user_id: i64) -> Result<Option<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let row = expenses::table
            .filter(expenses::id.eq(expense_id))
            .filter(expenses::user_id.eq(user_id))
            .first::<ExpenseDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Expense::from))
    }

    fn list_range(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::occurred_on.between(start, end))
            .into_boxed();
        if let Some(kind) = kind {
            query = query.filter(expenses::kind.eq(kind.as_str()));
        }
        let rows = query
            .order((expenses::occurred_on.desc(), expenses::id.desc()))
            .load::<ExpenseDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn list_by_category(
        &self,
        user_id: i64,
        category: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::category.eq(category))
            .filter(expenses::occurred_on.between(start, end))
            .order((expenses::occurred_on.desc(), expenses::id.desc()))
            .load::<ExpenseDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn category_summary(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CategoryTotal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(String, Option<Decimal>)> = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::kind.eq(TransactionKind::Expense.as_str()))
            .filter(expenses::occurred_on.between(start, end))
            .group_by(expenses::category)
            .select((expenses::category, sum(expenses::amount)))
            .order(sum(expenses::amount).desc())
            .load(&mut conn)
            .into_core()?;
        Ok(rows
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category,
                total: total.unwrap_or(Decimal::ZERO),
            })
            .collect())
    }

    fn total_spent(
        &self,
        user_id: i64,
        category: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::kind.eq(TransactionKind::Expense.as_str()))
            .filter(expenses::occurred_on.between(start, end))
            .select(sum(expenses::amount))
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(expenses::category.eq(category.to_string()));
        }
        let total: Option<Decimal> = query.first(&mut conn).into_core()?;
        Ok(total.unwrap_or(Decimal::ZERO))
    }

    fn totals_in_range(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<SpendingTotals> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(String, Option<Decimal>)> = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::occurred_on.between(start, end))
            .group_by(expenses::kind)
            .select((expenses::kind, sum(expenses::amount)))
            .load(&mut conn)
            .into_core()?;

        let mut totals = SpendingTotals::default();
        for (kind, total) in rows {
            let total = total.unwrap_or(Decimal::ZERO);
            match kind.parse() {
                Ok(TransactionKind::Expense) => totals.total_expenses = total,
                Ok(TransactionKind::Income) => totals.total_income = total,
                Err(_) => {}
            }
        }
        Ok(totals)
    }

    fn update(&self, expense: Expense) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let updated = diesel::update(
            expenses::table
                .filter(expenses::id.eq(expense.id))
                .filter(expenses::user_id.eq(expense.user_id)),
        )
        .set((
            expenses::kind.eq(expense.kind.as_str()),
            expenses::amount.eq(expense.amount),
            expenses::category.eq(expense.category),
            expenses::description.eq(expense.description),
            expenses::occurred_on.eq(expense.occurred_on),
        ))
        .execute(&mut conn)
        .into_core()?;
        Ok(updated > 0)
    }

    fn delete(&self, expense_id: i64, user_id: i64) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(
            expenses::table
                .filter(expenses::id.eq(expense_id))
                .filter(expenses::user_id.eq(user_id)),
        )
        .execute(&mut conn)
        .into_core()?;
        if deleted > 0 {
            info!("deleted expense #{expense_id} for user {user_id}");
        }
        Ok(deleted > 0)
    }
}
