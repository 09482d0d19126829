//! Application-wide constants.

/// Fallback currency for new users and transactions.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Fallback interface language for new users.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Budget usage percentage at which a warning alert fires.
pub const BUDGET_WARNING_THRESHOLD: f64 = 80.0;

/// Budget usage percentage at which the budget counts as exceeded.
pub const BUDGET_EXCEEDED_THRESHOLD: f64 = 100.0;

/// Default number of days before a due date that a reminder is sent.
pub const DEFAULT_REMIND_DAYS_BEFORE: i32 = 1;

/// Reserved budget category that caps ALL spending rather than one category.
pub const OVERALL_BUDGET_CATEGORY: &str = "overall";
