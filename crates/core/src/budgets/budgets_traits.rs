use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::budgets::budgets_model::{Budget, BudgetAlert, BudgetStatus, NewBudget};
use crate::errors::Result;

/// Trait for budget repository operations.
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Insert the budget, or replace the limit and period if one already
    /// exists for the user and category.
    fn set_budget(&self, new_budget: NewBudget) -> Result<Budget>;

    fn get_budget(&self, user_id: i64, category: &str) -> Result<Option<Budget>>;

    /// All budgets for a user, ordered by category.
    fn list(&self, user_id: i64) -> Result<Vec<Budget>>;

    fn delete(&self, user_id: i64, category: &str) -> Result<bool>;

    /// Sum of all limits for a user, zero when none are set.
    fn total_limit(&self, user_id: i64) -> Result<Decimal>;
}

/// Trait for budget service operations.
pub trait BudgetServiceTrait: Send + Sync {
    fn set_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    fn get_budget(&self, user_id: i64, category: &str) -> Result<Option<Budget>>;
    fn list_budgets(&self, user_id: i64) -> Result<Vec<Budget>>;
    fn delete_budget(&self, user_id: i64, category: &str) -> Result<bool>;
    /// Budget vs. actual for every configured budget, as of `today`.
    fn budget_statuses(&self, user_id: i64, today: NaiveDate) -> Result<Vec<BudgetStatus>>;
    /// Alerts triggered after recording an expense in `category`.
    fn check_alerts(&self, user_id: i64, category: &str, today: NaiveDate)
        -> Result<Vec<BudgetAlert>>;
}
