//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{NewsPersistenceError, UserRepository};
use crate::domain::{User, Username};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::UserRow;
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a row into a domain user, rejecting usernames the domain refuses.
fn row_to_user(row: UserRow) -> Result<User, NewsPersistenceError> {
    let username = Username::new(row.username.as_str()).map_err(|err| {
        warn!(username = %row.username, error = %err, "stored username failed validation");
        NewsPersistenceError::query(format!("invalid stored username: {err}"))
    })?;
    Ok(User {
        username,
        name: row.name,
        avatar_url: row.avatar_url,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .find(username.as_str())
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}
