use chrono::{Local, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::expenses::expenses_model::{
    CategoryTotal, Expense, NewExpense, SpendingTotals, TransactionKind,
};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::utils::month_bounds;

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { repository }
    }

    fn validate(new_expense: &NewExpense) -> Result<()> {
        if new_expense.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be positive, got {}",
                new_expense.amount
            ))
            .into());
        }
        if new_expense.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        Ok(())
    }
}

impl ExpenseServiceTrait for ExpenseService {
    fn add_expense(&self, mut new_expense: NewExpense) -> Result<Expense> {
        Self::validate(&new_expense)?;
        if new_expense.occurred_on.is_none() {
            new_expense.occurred_on = Some(Local::now().date_naive());
        }
        debug!(
            "recording {} of {} for user {}",
            new_expense.kind, new_expense.amount, new_expense.user_id
        );
        self.repository.add(new_expense)
    }

    fn get_expense(&self, expense_id: i64, user_id: i64) -> Result<Option<Expense>> {
        self.repository.get_by_id(expense_id, user_id)
    }

    fn list_expenses(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Expense>> {
        self.repository.list_range(user_id, start, end, kind)
    }

    fn monthly_summary(&self, user_id: i64, year: i32, month: u32) -> Result<SpendingTotals> {
        let (start, end) = month_bounds(year, month)?;
        self.repository.totals_in_range(user_id, start, end)
    }

    fn category_breakdown(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<CategoryTotal>> {
        let (start, end) = month_bounds(year, month)?;
        self.repository.category_summary(user_id, start, end)
    }

    fn category_expenses(
        &self,
        user_id: i64,
        category: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Expense>> {
        let (start, end) = month_bounds(year, month)?;
        self.repository
            .list_by_category(user_id, category, start, end)
    }

    fn update_expense(&self, expense: Expense) -> Result<bool> {
        if expense.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be positive, got {}",
                expense.amount
            ))
            .into());
        }
        self.repository.update(expense)
    }

    fn delete_expense(&self, expense_id: i64, user_id: i64) -> Result<bool> {
        self.repository.delete(expense_id, user_id)
    }
}
