//! Recurring payments module - domain models, services, and traits.

mod recurring_model;
mod recurring_service;
mod recurring_traits;

pub use recurring_model::{Frequency, NewRecurringPayment, RecurringPayment};
pub use recurring_service::RecurringService;
pub use recurring_traits::{RecurringRepositoryTrait, RecurringServiceTrait};
