//! PostgreSQL-backed `TopicRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Topic;
use crate::domain::ports::{NewsPersistenceError, TopicRepository};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::TopicRow;
use super::pool::DbPool;
use super::schema::topics;

/// Diesel-backed implementation of the topic repository port.
#[derive(Clone)]
pub struct DieselTopicRepository {
    pool: DbPool,
}

impl DieselTopicRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for DieselTopicRepository {
    async fn list_topics(&self) -> Result<Vec<Topic>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = topics::table
            .select(TopicRow::as_select())
            .order_by(topics::slug.asc())
            .load::<TopicRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Topic::from).collect())
    }
}
