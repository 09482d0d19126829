use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::upsert::excluded;
use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use budgetflow_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use budgetflow_core::Result;

use super::model::{BudgetDB, NewBudgetDB};
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        BudgetRepository { pool }
    }
}

impl BudgetRepositoryTrait for BudgetRepository {
    fn set_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        let mut conn = get_connection(&self.pool)?;
        let new_budget_db = NewBudgetDB::from(new_budget);
        let row: BudgetDB = diesel::insert_into(budgets::table)
            .values(&new_budget_db)
            .on_conflict((budgets::user_id, budgets::category))
            .do_update()
            .set((
                budgets::limit_amount.eq(excluded(budgets::limit_amount)),
                budgets::period.eq(excluded(budgets::period)),
            ))
            .returning(BudgetDB::as_returning())
            .get_result(&mut conn)
            .into_core()?;
        info!(
            "set budget '{}' = {} for user {}",
            row.category, row.limit_amount, row.user_id
        );
        Ok(Budget::from(row))
    }

    fn get_budget(&self, user_id: i64, category: &str) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .filter(budgets::category.eq(category))
            .first::<BudgetDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Budget::from))
    }

    fn list(&self, user_id: i64) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .order(budgets::category.asc())
            .load::<BudgetDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Budget::from).collect())
    }

    fn delete(&self, user_id: i64, category: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(
            budgets::table
                .filter(budgets::user_id.eq(user_id))
                .filter(budgets::category.eq(category)),
        )
        .execute(&mut conn)
        .into_core()?;
        Ok(deleted > 0)
    }

    fn total_limit(&self, user_id: i64) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<Decimal> = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .select(sum(budgets::limit_amount))
            .first(&mut conn)
            .into_core()?;
        Ok(total.unwrap_or(Decimal::ZERO))
    }
}
