//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENCY, DEFAULT_LANGUAGE};

/// Domain model representing a registered user.
///
/// `id` is the external messenger identifier the user signs in with; it is
/// also the primary key, so every child row references it directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: Option<String>,
    pub language: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for registering a user.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: i64,
    pub first_name: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
}

impl NewUser {
    pub fn new(id: i64, first_name: Option<String>) -> Self {
        NewUser {
            id,
            first_name,
            language: None,
            currency: None,
        }
    }

    /// Language to store, falling back to the application default.
    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Currency to store, falling back to the application default.
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}
