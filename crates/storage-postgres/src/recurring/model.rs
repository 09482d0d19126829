//! Database models for recurring payments.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use budgetflow_core::recurring::{Frequency, NewRecurringPayment, RecurringPayment};

use crate::users::UserDB;

/// Database model for a recurring payment row.
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
#[diesel(table_name = crate::schema::recurring_payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct RecurringPaymentDB {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub frequency: String,
    pub next_due_date: NaiveDate,
    pub remind_days_before: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Database model for inserting a recurring payment.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::recurring_payments)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringPaymentDB {
    pub user_id: i64,
    pub name: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub frequency: String,
    pub next_due_date: NaiveDate,
    pub remind_days_before: i32,
}

impl From<RecurringPaymentDB> for RecurringPayment {
    fn from(db: RecurringPaymentDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            category: db.category,
            amount: db.amount,
            currency: db.currency,
            // The CHECK constraint keeps the column within the enum.
            frequency: db.frequency.parse().unwrap_or(Frequency::Monthly),
            next_due_date: db.next_due_date,
            remind_days_before: db.remind_days_before,
            active: db.active,
            created_at: db.created_at,
        }
    }
}

impl From<NewRecurringPayment> for NewRecurringPaymentDB {
    fn from(domain: NewRecurringPayment) -> Self {
        Self {
            user_id: domain.user_id,
            currency: domain.currency_or_default().to_string(),
            remind_days_before: domain.remind_days_or_default(),
            name: domain.name,
            category: domain.category,
            amount: domain.amount,
            frequency: domain.frequency.as_str().to_string(),
            next_due_date: domain.next_due_date,
        }
    }
}
