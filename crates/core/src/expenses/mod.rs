//! Expenses module - domain models, services, and traits.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{CategoryTotal, Expense, NewExpense, SpendingTotals, TransactionKind};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
