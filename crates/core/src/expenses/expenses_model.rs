//! Expense domain models.
//!
//! An "expense" row records a single financial transaction, which may be an
//! expense or an income depending on its [`TransactionKind`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_CURRENCY;
use crate::errors::ValidationError;

/// Whether a transaction takes money out or brings money in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(TransactionKind::Expense),
            "income" => Ok(TransactionKind::Income),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown transaction kind '{other}'"
            ))),
        }
    }
}

/// Domain model representing a single transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub currency: String,
    pub category: String,
    pub description: Option<String>,
    pub occurred_on: NaiveDate,
    /// Original free-form message the transaction was parsed from, if any.
    pub raw_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Input model for recording a new transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub user_id: i64,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub category: String,
    pub description: Option<String>,
    /// Defaults to today when omitted.
    pub occurred_on: Option<NaiveDate>,
    pub raw_text: Option<String>,
}

impl NewExpense {
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}

/// Total spent in one category over some date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Aggregate income and spending over some date range.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingTotals {
    pub total_expenses: Decimal,
    pub total_income: Decimal,
}

impl SpendingTotals {
    /// Income minus expenses; negative when the user spent more than earned.
    pub fn net(&self) -> Decimal {
        self.total_income - self.total_expenses
    }
}
