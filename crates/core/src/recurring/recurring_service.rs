use chrono::{Duration, Local, NaiveDate};
use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::recurring::recurring_model::{NewRecurringPayment, RecurringPayment};
use crate::recurring::recurring_traits::{RecurringRepositoryTrait, RecurringServiceTrait};

pub struct RecurringService {
    repository: Arc<dyn RecurringRepositoryTrait>,
}

impl RecurringService {
    pub fn new(repository: Arc<dyn RecurringRepositoryTrait>) -> Self {
        RecurringService { repository }
    }

    fn validate(new_payment: &NewRecurringPayment) -> Result<()> {
        if new_payment.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if new_payment.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be positive, got {}",
                new_payment.amount
            ))
            .into());
        }
        if new_payment.remind_days_or_default() < 0 {
            return Err(
                ValidationError::InvalidInput("remind_days_before must be >= 0".to_string()).into(),
            );
        }
        Ok(())
    }
}

impl RecurringServiceTrait for RecurringService {
    fn add_payment(&self, new_payment: NewRecurringPayment) -> Result<RecurringPayment> {
        Self::validate(&new_payment)?;
        self.repository.add(new_payment)
    }

    fn get_payment(&self, payment_id: i64, user_id: i64) -> Result<Option<RecurringPayment>> {
        self.repository.get_by_id(payment_id, user_id)
    }

    fn list_payments(&self, user_id: i64, active_only: bool) -> Result<Vec<RecurringPayment>> {
        self.repository.list(user_id, active_only)
    }

    fn due_soon(&self, days_ahead: i64) -> Result<Vec<RecurringPayment>> {
        let cutoff = Local::now().date_naive() + Duration::days(days_ahead);
        self.repository.due_on_or_before(cutoff)
    }

    fn advance_due_date(&self, payment: &RecurringPayment) -> Result<NaiveDate> {
        let next = payment.frequency.advance(payment.next_due_date);
        self.repository.set_next_due_date(payment.id, next)?;
        info!(
            "advanced '{}' #{} next due date to {}",
            payment.name, payment.id, next
        );
        Ok(next)
    }

    fn toggle_active(&self, payment_id: i64, user_id: i64, active: bool) -> Result<bool> {
        self.repository.set_active(payment_id, user_id, active)
    }

    fn delete_payment(&self, payment_id: i64, user_id: i64) -> Result<bool> {
        self.repository.delete(payment_id, user_id)
    }
}
