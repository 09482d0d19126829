//! Recurring payment domain models.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_CURRENCY, DEFAULT_REMIND_DAYS_BEFORE};
use crate::errors::ValidationError;

/// How often a recurring payment comes due.
///
/// Intervals are calendar-naive: a month advances by 30 days and a year by
/// 365, which is what the reminder cadence expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }

    /// The next due date after `from` for this frequency.
    pub fn advance(&self, from: NaiveDate) -> NaiveDate {
        let days = match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Monthly => 30,
            Frequency::Yearly => 365,
        };
        from + Duration::days(days)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown frequency '{other}'"
            ))),
        }
    }
}

/// Domain model for a recurring payment (subscription, rent, bill).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPayment {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub frequency: Frequency,
    pub next_due_date: NaiveDate,
    pub remind_days_before: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl RecurringPayment {
    /// The date on which the reminder for the next due date should fire.
    pub fn reminder_date(&self) -> NaiveDate {
        self.next_due_date - Duration::days(i64::from(self.remind_days_before))
    }
}

/// Input model for scheduling a recurring payment.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringPayment {
    pub user_id: i64,
    pub name: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub frequency: Frequency,
    pub next_due_date: NaiveDate,
    pub remind_days_before: Option<i32>,
}

impl NewRecurringPayment {
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn remind_days_or_default(&self) -> i32 {
        self.remind_days_before.unwrap_or(DEFAULT_REMIND_DAYS_BEFORE)
    }
}
