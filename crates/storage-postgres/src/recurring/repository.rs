use chrono::NaiveDate;
use diesel::prelude::*;
use log::info;
use std::sync::Arc;

use budgetflow_core::recurring::{NewRecurringPayment, RecurringPayment, RecurringRepositoryTrait};
use budgetflow_core::Result;

use super::model::{NewRecurringPaymentDB, RecurringPaymentDB};
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::recurring_payments;

pub struct RecurringRepository {
    pool: Arc<DbPool>,
}

impl RecurringRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        RecurringRepository { pool }
    }
}

impl RecurringRepositoryTrait for RecurringRepository {
    fn add(&self, new_payment: NewRecurringPayment) -> Result<RecurringPayment> {
        let mut conn = get_connection(&self.pool)?;
        let new_payment_db = NewRecurringPaymentDB::from(new_payment);
        let row: RecurringPaymentDB = diesel::insert_into(recurring_payments::table)
            .values(&new_payment_db)
            .returning(RecurringPaymentDB::as_returning())
            .get_result(&mut conn)
            .into_core()?;
        info!("added recurring payment '{}' #{}", row.name, row.id);
        Ok(RecurringPayment::from(row))
    }

    fn get_by_id(&self, payment_id: i64, user_id: i64) -> Result<Option<RecurringPayment>> {
        let mut conn = get_connection(&self.pool)?;
        let row = recurring_payments::table
            .filter(recurring_payments::id.eq(payment_id))
            .filter(recurring_payments::user_id.eq(user_id))
            .first::<RecurringPaymentDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(RecurringPayment::from))
    }

    fn list(&self, user_id: i64, active_only: bool) -> Result<Vec<RecurringPayment>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = recurring_payments::table
            .filter(recurring_payments::user_id.eq(user_id))
            .into_boxed();
        if active_only {
            query = query.filter(recurring_payments::active.eq(true));
        }
        let rows = query
            .order(recurring_payments::next_due_date.asc())
            .load::<RecurringPaymentDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(RecurringPayment::from).collect())
    }

    fn due_on_or_before(&self, cutoff: NaiveDate) -> Result<Vec<RecurringPayment>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = recurring_payments::table
            .filter(recurring_payments::active.eq(true))
            .filter(recurring_payments::next_due_date.le(cutoff))
            .order(recurring_payments::next_due_date.asc())
            .load::<RecurringPaymentDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(RecurringPayment::from).collect())
    }

    fn set_next_due_date(&self, payment_id: i64, next_due: NaiveDate) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let updated =
            diesel::update(recurring_payments::table.filter(recurring_payments::id.eq(payment_id)))
                .set(recurring_payments::next_due_date.eq(next_due))
                .execute(&mut conn)
                .into_core()?;
        Ok(updated > 0)
    }

    fn set_active(&self, payment_id: i64, user_id: i64, active: bool) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let updated = diesel::update(
            recurring_payments::table
                .filter(recurring_payments::id.eq(payment_id))
                .filter(recurring_payments::user_id.eq(user_id)),
        )
        .set(recurring_payments::active.eq(active))
        .execute(&mut conn)
        .into_core()?;
        Ok(updated > 0)
    }

    fn delete(&self, payment_id: i64, user_id: i64) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(
            recurring_payments::table
                .filter(recurring_payments::id.eq(payment_id))
                .filter(recurring_payments::user_id.eq(user_id)),
        )
        .execute(&mut conn)
        .into_core()?;
        if deleted > 0 {
            info!("deleted recurring payment #{payment_id}");
        }
        Ok(deleted > 0)
    }
}
