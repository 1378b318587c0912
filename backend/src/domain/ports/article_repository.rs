//! Port abstraction for reading and voting on articles.

use async_trait::async_trait;

use crate::domain::{Article, ArticleDetail, ArticleId, ArticleListQuery};

use super::NewsPersistenceError;

/// Read and vote access to stored articles.
///
/// Every returned [`ArticleDetail`] carries a `comment_count` computed from
/// the comments table at query time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetch one article with its comment count.
    async fn find_article(
        &self,
        id: ArticleId,
    ) -> Result<Option<ArticleDetail>, NewsPersistenceError>;

    /// List articles matching the filters, in the requested order.
    ///
    /// Ties on the sort column are broken by ascending `article_id`.
    async fn list_articles(
        &self,
        query: &ArticleListQuery,
    ) -> Result<Vec<ArticleDetail>, NewsPersistenceError>;

    /// Atomically add `delta` to the vote tally.
    ///
    /// Returns `None` when no article has the identifier.
    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: i32,
    ) -> Result<Option<Article>, NewsPersistenceError>;

    /// Report whether an article with the identifier exists.
    async fn article_exists(&self, id: ArticleId) -> Result<bool, NewsPersistenceError>;
}
