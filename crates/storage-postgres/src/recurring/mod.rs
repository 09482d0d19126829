//! PostgreSQL storage implementation for recurring payments.

mod model;
mod repository;

pub use model::{NewRecurringPaymentDB, RecurringPaymentDB};
pub use repository::RecurringRepository;
