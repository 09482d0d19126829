//! Database models for expenses.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use budgetflow_core::expenses::{Expense, NewExpense, TransactionKind};

use crate::users::UserDB;

/// Database model for a transaction row.
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDB {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub amount: Decimal,
    pub currency: String,
    pub category: String,
    pub description: Option<String>,
    pub occurred_on: NaiveDate,
    pub raw_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Database model for inserting a transaction.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseDB {
    pub user_id: i64,
    pub kind: String,
    pub amount: Decimal,
    pub currency: String,
    pub category: String,
    pub description: Option<String>,
    /// `None` lets the column default (today) apply.
    pub occurred_on: Option<NaiveDate>,
    pub raw_text: Option<String>,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            // The CHECK constraint keeps the column within the enum.
            kind: db.kind.parse().unwrap_or(TransactionKind::Expense),
            amount: db.amount,
            currency: db.currency,
            category: db.category,
            description: db.description,
            occurred_on: db.occurred_on,
            raw_text: db.raw_text,
            created_at: db.created_at,
        }
    }
}

impl From<NewExpense> for NewExpenseDB {
    fn from(domain: NewExpense) -> Self {
        Self {
            user_id: domain.user_id,
            kind: domain.kind.as_str().to_string(),
            amount: domain.amount,
            currency: domain.currency_or_default().to_string(),
            category: domain.category,
            description: domain.description,
            occurred_on: domain.occurred_on,
            raw_text: domain.raw_text,
        }
    }
}
