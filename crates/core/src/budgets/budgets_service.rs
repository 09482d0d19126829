use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::budgets::budgets_model::{Budget, BudgetAlert, BudgetLevel, BudgetStatus, NewBudget};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::constants::OVERALL_BUDGET_CATEGORY;
use crate::errors::{Result, ValidationError};
use crate::expenses::ExpenseRepositoryTrait;

pub struct BudgetService {
    budgets: Arc<dyn BudgetRepositoryTrait>,
    expenses: Arc<dyn ExpenseRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        budgets: Arc<dyn BudgetRepositoryTrait>,
        expenses: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        BudgetService { budgets, expenses }
    }

    /// Spent amount for one budget over its current window. The reserved
    /// overall category counts every expense, not just one category's.
    fn spent_for(&self, budget: &Budget, today: NaiveDate) -> Result<Decimal> {
        let (start, end) = budget.period.window(today);
        let category = if budget.category == OVERALL_BUDGET_CATEGORY {
            None
        } else {
            Some(budget.category.as_str())
        };
        self.expenses
            .total_spent(budget.user_id, category, start, end)
    }

    fn status_for(&self, budget: &Budget, today: NaiveDate) -> Result<BudgetStatus> {
        let spent = self.spent_for(budget, today)?;
        Ok(BudgetStatus::compute(budget, spent))
    }
}

impl BudgetServiceTrait for BudgetService {
    fn set_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        if new_budget.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        if new_budget.limit_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "limit must be positive, got {}",
                new_budget.limit_amount
            ))
            .into());
        }
        let budget = self.budgets.set_budget(new_budget)?;
        info!(
            "budget for user {} category '{}' set to {} ({})",
            budget.user_id, budget.category, budget.limit_amount, budget.period
        );
        Ok(budget)
    }

    fn get_budget(&self, user_id: i64, category: &str) -> Result<Option<Budget>> {
        self.budgets.get_budget(user_id, category)
    }

    fn list_budgets(&self, user_id: i64) -> Result<Vec<Budget>> {
        self.budgets.list(user_id)
    }

    fn delete_budget(&self, user_id: i64, category: &str) -> Result<bool> {
        self.budgets.delete(user_id, category)
    }

    fn budget_statuses(&self, user_id: i64, today: NaiveDate) -> Result<Vec<BudgetStatus>> {
        self.budgets
            .list(user_id)?
            .iter()
            .map(|budget| self.status_for(budget, today))
            .collect()
    }

    fn check_alerts(
        &self,
        user_id: i64,
        category: &str,
        today: NaiveDate,
    ) -> Result<Vec<BudgetAlert>> {
        let mut alerts = Vec::new();
        let mut watched_categories = vec![category];
        if category != OVERALL_BUDGET_CATEGORY {
            watched_categories.push(OVERALL_BUDGET_CATEGORY);
        }
        for watched in watched_categories {
            if let Some(budget) = self.budgets.get_budget(user_id, watched)? {
                let status = self.status_for(&budget, today)?;
                if status.level != BudgetLevel::Safe {
                    alerts.push(BudgetAlert {
                        category: budget.category,
                        percent_used: status.percent_used,
                        level: status.level,
                    });
                }
            }
        }
        Ok(alerts)
    }
}
