//! Database models for users.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use budgetflow_core::users::{NewUser, User};

/// Database model for a user row.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: i64,
    pub first_name: Option<String>,
    pub language: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for inserting a user.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDB {
    pub id: i64,
    pub first_name: Option<String>,
    pub language: String,
    pub currency: String,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            first_name: db.first_name,
            language: db.language,
            currency: db.currency,
            created_at: db.created_at,
        }
    }
}

impl From<NewUser> for NewUserDB {
    fn from(domain: NewUser) -> Self {
        Self {
            id: domain.id,
            language: domain.language_or_default().to_string(),
            currency: domain.currency_or_default().to_string(),
            first_name: domain.first_name,
        }
    }
}
