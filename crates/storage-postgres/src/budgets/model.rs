//! Database models for budgets.

use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use budgetflow_core::budgets::{Budget, BudgetPeriod, NewBudget};

use crate::users::UserDB;

/// Database model for a budget row.
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
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub limit_amount: Decimal,
    pub period: String,
}

/// Database model for inserting a budget.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetDB {
    pub user_id: i64,
    pub category: String,
    pub limit_amount: Decimal,
    pub period: String,
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            limit_amount: db.limit_amount,
            // The CHECK constraint keeps the column within the enum.
            period: db.period.parse().unwrap_or(BudgetPeriod::Monthly),
        }
    }
}

impl From<NewBudget> for NewBudgetDB {
    fn from(domain: NewBudget) -> Self {
        Self {
            user_id: domain.user_id,
            period: domain.period_or_default().as_str().to_string(),
            category: domain.category,
            limit_amount: domain.limit_amount,
        }
    }
}
