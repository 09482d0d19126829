use chrono::NaiveDate;

use crate::errors::Result;
use crate::recurring::recurring_model::{NewRecurringPayment, RecurringPayment};

/// Trait for recurring payment repository operations.
pub trait RecurringRepositoryTrait: Send + Sync {
    fn add(&self, new_payment: NewRecurringPayment) -> Result<RecurringPayment>;

    fn get_by_id(&self, payment_id: i64, user_id: i64) -> Result<Option<RecurringPayment>>;

    /// All payments for a user ordered by next due date; inactive ones are
    /// included only when `active_only` is false.
    fn list(&self, user_id: i64, active_only: bool) -> Result<Vec<RecurringPayment>>;

    /// Active payments across ALL users due on or before the cutoff date.
    /// Used by the reminder scheduler.
    fn due_on_or_before(&self, cutoff: NaiveDate) -> Result<Vec<RecurringPayment>>;

    fn set_next_due_date(&self, payment_id: i64, next_due: NaiveDate) -> Result<bool>;

    fn set_active(&self, payment_id: i64, user_id: i64, active: bool) -> Result<bool>;

    fn delete(&self, payment_id: i64, user_id: i64) -> Result<bool>;
}

/// Trait for recurring payment service operations.
pub trait RecurringServiceTrait: Send + Sync {
    fn add_payment(&self, new_payment: NewRecurringPayment) -> Result<RecurringPayment>;
    fn get_payment(&self, payment_id: i64, user_id: i64) -> Result<Option<RecurringPayment>>;
    fn list_payments(&self, user_id: i64, active_only: bool) -> Result<Vec<RecurringPayment>>;
    /// Active payments due within the next `days_ahead` days.
    fn due_soon(&self, days_ahead: i64) -> Result<Vec<RecurringPayment>>;
    /// Push the payment's due date forward one interval, returning the new date.
    fn advance_due_date(&self, payment: &RecurringPayment) -> Result<NaiveDate>;
    fn toggle_active(&self, payment_id: i64, user_id: i64, active: bool) -> Result<bool>;
    fn delete_payment(&self, payment_id: i64, user_id: i64) -> Result<bool>;
}
