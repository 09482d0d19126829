//! Budget domain models.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{BUDGET_EXCEEDED_THRESHOLD, BUDGET_WARNING_THRESHOLD};
use crate::errors::ValidationError;
use crate::utils::{month_bounds, week_bounds, year_bounds};

/// The window a budget limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        }
    }

    /// The inclusive date window containing `today` for this period.
    pub fn window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        use chrono::Datelike;
        match self {
            BudgetPeriod::Weekly => week_bounds(today),
            BudgetPeriod::Monthly => {
                month_bounds(today.year(), today.month()).expect("current month is valid")
            }
            BudgetPeriod::Yearly => year_bounds(today),
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            "yearly" => Ok(BudgetPeriod::Yearly),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown budget period '{other}'"
            ))),
        }
    }
}

/// Spending limit for one category over a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub limit_amount: Decimal,
    pub period: BudgetPeriod,
}

/// Input model for creating or replacing a budget limit.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub user_id: i64,
    pub category: String,
    pub limit_amount: Decimal,
    /// Defaults to monthly when omitted.
    pub period: Option<BudgetPeriod>,
}

impl NewBudget {
    pub fn period_or_default(&self) -> BudgetPeriod {
        self.period.unwrap_or(BudgetPeriod::Monthly)
    }
}

/// How close spending is to a budget limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Safe,
    Warning,
    Exceeded,
}

impl BudgetLevel {
    pub fn from_percent(percent_used: f64) -> Self {
        if percent_used >= BUDGET_EXCEEDED_THRESHOLD {
            BudgetLevel::Exceeded
        } else if percent_used >= BUDGET_WARNING_THRESHOLD {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Safe
        }
    }
}

/// Budget vs. actual spending for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category: String,
    pub period: BudgetPeriod,
    pub limit_amount: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percent_used: f64,
    pub level: BudgetLevel,
}

impl BudgetStatus {
    pub fn compute(budget: &Budget, spent: Decimal) -> Self {
        let percent_used = if budget.limit_amount > Decimal::ZERO {
            (spent / budget.limit_amount * Decimal::ONE_HUNDRED)
                .to_f64()
                .unwrap_or(0.0)
        } else {
            0.0
        };
        BudgetStatus {
            category: budget.category.clone(),
            period: budget.period,
            limit_amount: budget.limit_amount,
            spent,
            remaining: (budget.limit_amount - spent).max(Decimal::ZERO),
            percent_used,
            level: BudgetLevel::from_percent(percent_used),
        }
    }
}

/// Raised after recording an expense that pushes a budget past a threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    pub category: String,
    pub percent_used: f64,
    pub level: BudgetLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn budget(limit: Decimal) -> Budget {
        Budget {
            id: 1,
            user_id: 1,
            category: "groceries".to_string(),
            limit_amount: limit,
            period: BudgetPeriod::Monthly,
        }
    }

    #[test]
    fn status_levels_follow_thresholds() {
        assert_eq!(
            BudgetStatus::compute(&budget(dec!(100)), dec!(50)).level,
            BudgetLevel::Safe
        );
        assert_eq!(
            BudgetStatus::compute(&budget(dec!(100)), dec!(80)).level,
            BudgetLevel::Warning
        );
        assert_eq!(
            BudgetStatus::compute(&budget(dec!(100)), dec!(120)).level,
            BudgetLevel::Exceeded
        );
    }

    #[test]
    fn remaining_never_goes_negative() {
        let status = BudgetStatus::compute(&budget(dec!(100)), dec!(150));
        assert_eq!(status.remaining, Decimal::ZERO);
    }

    #[test]
    fn zero_limit_reports_zero_percent() {
        let status = BudgetStatus::compute(&budget(dec!(0)), dec!(50));
        assert_eq!(status.percent_used, 0.0);
        assert_eq!(status.level, BudgetLevel::Safe);
    }

    #[test]
    fn period_windows_contain_today() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        for period in [
            BudgetPeriod::Weekly,
            BudgetPeriod::Monthly,
            BudgetPeriod::Yearly,
        ] {
            let (start, end) = period.window(today);
            assert!(start <= today && today <= end, "{period} window");
        }
    }

    #[test]
    fn period_round_trips_through_str() {
        for period in [
            BudgetPeriod::Weekly,
            BudgetPeriod::Monthly,
            BudgetPeriod::Yearly,
        ] {
            assert_eq!(period.as_str().parse::<BudgetPeriod>().unwrap(), period);
        }
    }
}
