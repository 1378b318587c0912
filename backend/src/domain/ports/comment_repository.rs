//! Port abstraction for comment persistence.

use async_trait::async_trait;

use crate::domain::{ArticleId, Comment, CommentId, CommentListQuery, NewComment};

use super::NewsPersistenceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// One page of an article's comments.
    ///
    /// An empty page does not imply the article is missing.
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        query: &CommentListQuery,
    ) -> Result<Vec<Comment>, NewsPersistenceError>;

    /// Insert a comment, letting the store assign id, votes and timestamp.
    ///
    /// Unknown articles or authors surface as
    /// [`NewsPersistenceError::ForeignKeyViolation`].
    async fn insert(&self, comment: &NewComment) -> Result<Comment, NewsPersistenceError>;

    /// Atomically add `delta` to the vote tally; `None` when absent.
    async fn increment_votes(
        &self,
        id: CommentId,
        delta: i32,
    ) -> Result<Option<Comment>, NewsPersistenceError>;

    /// Delete a comment, returning whether a row was removed.
    async fn delete(&self, id: CommentId) -> Result<bool, NewsPersistenceError>;
}
