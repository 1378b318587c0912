//! Port abstraction for user lookups.
use async_trait::async_trait;

use crate::domain::{User, Username};

use super::NewsPersistenceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, NewsPersistenceError>;
}
