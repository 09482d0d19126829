//! Property-based tests for budget status math and schedule arithmetic.
//!
//! These verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use budgetflow_core::budgets::{Budget, BudgetLevel, BudgetPeriod, BudgetStatus};
use budgetflow_core::recurring::Frequency;

// =============================================================================
// Generators
// =============================================================================

/// Amounts as cents to keep arithmetic exact.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_period() -> impl Strategy<Value = BudgetPeriod> {
    prop_oneof![
        Just(BudgetPeriod::Weekly),
        Just(BudgetPeriod::Monthly),
        Just(BudgetPeriod::Yearly),
    ]
}

fn arb_frequency() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Daily),
        Just(Frequency::Weekly),
        Just(Frequency::Monthly),
        Just(Frequency::Yearly),
    ]
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn budget(limit: Decimal, period: BudgetPeriod) -> Budget {
    Budget {
        id: 1,
        user_id: 1,
        category: "anything".to_string(),
        limit_amount: limit,
        period,
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The level always agrees with the 80/100 thresholds on percent_used.
    #[test]
    fn prop_level_matches_percent_thresholds(
        limit in arb_positive_amount(),
        spent in arb_amount(),
    ) {
        let status = BudgetStatus::compute(&budget(limit, BudgetPeriod::Monthly), spent);
        let expected = if status.percent_used >= 100.0 {
            BudgetLevel::Exceeded
        } else if status.percent_used >= 80.0 {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Safe
        };
        prop_assert_eq!(status.level, expected);
    }

    /// Spending strictly at or past the limit is always Exceeded, and
    /// remaining is clamped at zero.
    #[test]
    fn prop_spending_past_limit_is_exceeded(
        limit in arb_positive_amount(),
        extra in arb_amount(),
    ) {
        let status = BudgetStatus::compute(&budget(limit, BudgetPeriod::Monthly), limit + extra);
        prop_assert_eq!(status.level, BudgetLevel::Exceeded);
        prop_assert!(status.remaining >= Decimal::ZERO);
    }

    /// remaining + spent covers the limit exactly while under budget.
    #[test]
    fn prop_remaining_complements_spent_under_limit(
        limit in arb_positive_amount(),
        spent in arb_amount(),
    ) {
        prop_assume!(spent <= limit);
        let status = BudgetStatus::compute(&budget(limit, BudgetPeriod::Monthly), spent);
        prop_assert_eq!(status.remaining + status.spent, status.limit_amount);
    }

    /// percent_used grows with spending for a fixed limit.
    #[test]
    fn prop_percent_used_is_monotone(
        limit in arb_positive_amount(),
        a in arb_amount(),
        b in arb_amount(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let status_lo = BudgetStatus::compute(&budget(limit, BudgetPeriod::Monthly), lo);
        let status_hi = BudgetStatus::compute(&budget(limit, BudgetPeriod::Monthly), hi);
        prop_assert!(status_lo.percent_used <= status_hi.percent_used);
    }

    /// Every period window contains the day it was derived from.
    #[test]
    fn prop_period_window_contains_today(
        period in arb_period(),
        today in arb_date(),
    ) {
        let (start, end) = period.window(today);
        prop_assert!(start <= today);
        prop_assert!(today <= end);
    }

    /// Advancing a due date always moves it strictly forward.
    #[test]
    fn prop_advance_moves_forward(
        frequency in arb_frequency(),
        from in arb_date(),
    ) {
        prop_assert!(frequency.advance(from) > from);
    }
}
