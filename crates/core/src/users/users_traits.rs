use crate::errors::Result;
use crate::users::users_model::{NewUser, User};

/// Trait for user repository operations.
pub trait UserRepositoryTrait: Send + Sync {
    /// Insert the user if they don't exist, or refresh their first name.
    /// Returns the stored record either way.
    fn ensure_user(&self, new_user: NewUser) -> Result<User>;

    fn get_user(&self, user_id: i64) -> Result<Option<User>>;
}
