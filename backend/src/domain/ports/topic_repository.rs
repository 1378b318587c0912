//! Port abstraction for topic listings.
use async_trait::async_trait;

use crate::domain::Topic;

use super::NewsPersistenceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Every topic, ordered by slug.
    async fn list_topics(&self) -> Result<Vec<Topic>, NewsPersistenceError>;
}
