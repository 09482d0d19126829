use diesel::prelude::*;
use diesel::upsert::excluded;
use log::info;
use std::sync::Arc;

use budgetflow_core::users::{NewUser, User, UserRepositoryTrait};
use budgetflow_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::users;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        UserRepository { pool }
    }
}

impl UserRepositoryTrait for UserRepository {
    fn ensure_user(&self, new_user: NewUser) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let new_user_db = NewUserDB::from(new_user);
        let row: UserDB = diesel::insert_into(users::table)
            .values(&new_user_db)
            .on_conflict(users::id)
            .do_update()
            .set(users::first_name.eq(excluded(users::first_name)))
            .returning(UserDB::as_returning())
            .get_result(&mut conn)
            .into_core()?;
        info!("ensured user {}", row.id);
        Ok(User::from(row))
    }

    fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(User::from))
    }
}
