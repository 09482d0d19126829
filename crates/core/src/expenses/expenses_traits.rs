use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::expenses::expenses_model::{
    CategoryTotal, Expense, NewExpense, SpendingTotals, TransactionKind,
};

/// Trait for expense repository operations.
///
/// All date ranges are inclusive on both ends.
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn add(&self, new_expense: NewExpense) -> Result<Expense>;

    /// Fetch a single transaction, scoped to its owner.
    fn get_by_id(&self, expense_id: i64, user_id: i64) -> Result<Option<Expense>>;

    /// All transactions in the range, newest first, optionally filtered by kind.
    fn list_range(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Expense>>;

    fn list_by_category(
        &self,
        user_id: i64,
        category: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;

    /// Spending totals per category over the range, largest first.
    /// Only `expense` rows count; income is excluded.
    fn category_summary(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CategoryTotal>>;

    /// Total spent over the range, optionally restricted to one category.
    fn total_spent(
        &self,
        user_id: i64,
        category: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal>;

    /// Income and spending totals over the range.
    fn totals_in_range(&self, user_id: i64, start: NaiveDate, end: NaiveDate)
        -> Result<SpendingTotals>;

    /// Returns true if a row was updated.
    fn update(&self, expense: Expense) -> Result<bool>;

    /// Returns true if a row was deleted.
    fn delete(&self, expense_id: i64, user_id: i64) -> Result<bool>;
}

/// Trait for expense service operations.
pub trait ExpenseServiceTrait: Send + Sync {
    fn add_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    fn get_expense(&self, expense_id: i64, user_id: i64) -> Result<Option<Expense>>;
    fn list_expenses(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Expense>>;
    fn monthly_summary(&self, user_id: i64, year: i32, month: u32) -> Result<SpendingTotals>;
    fn category_breakdown(&self, user_id: i64, year: i32, month: u32)
        -> Result<Vec<CategoryTotal>>;
    /// All transactions recorded under one category in a month.
    fn category_expenses(
        &self,
        user_id: i64,
        category: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Expense>>;
    fn update_expense(&self, expense: Expense) -> Result<bool>;
    fn delete_expense(&self, expense_id: i64, user_id: i64) -> Result<bool>;
}
