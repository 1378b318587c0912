//! News use cases: reading articles, topics and users, voting and commenting.
//!
//! `NewsService` sits between the HTTP handlers and the repository ports. It
//! turns "no row" answers into not-found errors with the messages clients
//! rely on, and maps persistence failures onto [`Error`] codes.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{
    ArticleRepository, CommentRepository, NewsPersistenceError, TopicRepository, UserRepository,
};
use crate::domain::{
    Article, ArticleDetail, ArticleId, ArticleListQuery, Comment, CommentId, CommentListQuery,
    Error, NewComment, Topic, User, Username,
};

/// Message returned when an article identifier matches no row.
pub const ARTICLE_NOT_FOUND: &str = "Article not found!";
/// Message returned when an article listing is empty.
pub const ARTICLES_NOT_FOUND: &str = "Articles not found!";
/// Message returned when a comment identifier matches no row.
pub const COMMENT_NOT_FOUND: &str = "Comment not found!";
/// Message returned when a username matches no row.
pub const USERNAME_NOT_FOUND: &str = "Username not found!";

/// Application service implementing every news endpoint.
#[derive(Clone)]
pub struct NewsService {
    articles: Arc<dyn ArticleRepository>,
    comments: Arc<dyn CommentRepository>,
    users: Arc<dyn UserRepository>,
    topics: Arc<dyn TopicRepository>,
}

impl NewsService {
    /// Create a service over the given repositories.
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserRepository>,
        topics: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            articles,
            comments,
            users,
            topics,
        }
    }

    fn map_persistence_error(error: NewsPersistenceError) -> Error {
        match error {
            NewsPersistenceError::Connection { message } => {
                Error::internal(format!("news repository unavailable: {message}"))
            }
            NewsPersistenceError::ForeignKeyViolation { message } => {
                debug!(%message, "write referenced a missing row");
                Error::unprocessable_entity()
            }
            NewsPersistenceError::InvalidInput { message } => {
                debug!(%message, "database rejected input");
                Error::bad_request()
            }
            NewsPersistenceError::Query { message } => {
                Error::internal(format!("news repository error: {message}"))
            }
        }
    }

    /// All topics.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the repository fails.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, Error> {
        self.topics
            .list_topics()
            .await
            .map_err(Self::map_persistence_error)
    }

    /// Look up a user by username.
    ///
    /// # Errors
    ///
    /// Not found with `"Username not found!"` when no user matches.
    pub async fn fetch_user_by_username(&self, username: &Username) -> Result<User, Error> {
        self.users
            .find_by_username(username)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(USERNAME_NOT_FOUND))
    }

    /// Article with its comment count.
    ///
    /// # Errors
    ///
    /// Not found with `"Article not found!"` when no article matches.
    pub async fn fetch_article_by_id(&self, id: ArticleId) -> Result<ArticleDetail, Error> {
        self.articles
            .find_article(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(ARTICLE_NOT_FOUND))
    }

    /// Filtered and sorted article listing.
    ///
    /// # Errors
    ///
    /// Not found with `"Articles not found!"` when nothing matches the
    /// filters, including an unknown author or topic.
    pub async fn list_articles(&self, query: &ArticleListQuery) -> Result<Vec<ArticleDetail>, Error> {
        let articles = self
            .articles
            .list_articles(query)
            .await
            .map_err(Self::map_persistence_error)?;
        if articles.is_empty() {
            return Err(Error::not_found(ARTICLES_NOT_FOUND));
        }
        Ok(articles)
    }

    /// Add `delta` to an article's votes. Tallies may go negative.
    ///
    /// # Errors
    ///
    /// Not found with `"Article not found!"` when no article matches.
    pub async fn update_article_votes(&self, id: ArticleId, delta: i32) -> Result<Article, Error> {
        self.articles
            .increment_votes(id, delta)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(ARTICLE_NOT_FOUND))
    }

    /// One page of an article's comments.
    ///
    /// An empty page is only an error when the article itself is missing.
    ///
    /// # Errors
    ///
    /// Not found with `"Article not found!"` when the article is missing.
    pub async fn fetch_comments_for_article(
        &self,
        article_id: ArticleId,
        query: &CommentListQuery,
    ) -> Result<Vec<Comment>, Error> {
        let comments = self
            .comments
            .list_for_article(article_id, query)
            .await
            .map_err(Self::map_persistence_error)?;
        if !comments.is_empty() {
            return Ok(comments);
        }

        let exists = self
            .articles
            .article_exists(article_id)
            .await
            .map_err(Self::map_persistence_error)?;
        if exists {
            Ok(comments)
        } else {
            Err(Error::not_found(ARTICLE_NOT_FOUND))
        }
    }

    /// Post a comment on an article.
    ///
    /// # Errors
    ///
    /// Bad request when the username or body is unusable; unprocessable
    /// entity when the article or user does not exist.
    pub async fn create_comment(
        &self,
        article_id: ArticleId,
        username: &str,
        body: &str,
    ) -> Result<Comment, Error> {
        let comment = NewComment::try_new(article_id, username, body).map_err(|err| {
            debug!(error = %err, "rejected new comment");
            Error::bad_request()
        })?;
        self.comments
            .insert(&comment)
            .await
            .map_err(Self::map_persistence_error)
    }

    /// Add `delta` to a comment's votes.
    ///
    /// # Errors
    ///
    /// Not found with `"Comment not found!"` when no comment matches.
    pub async fn update_comment_votes(&self, id: CommentId, delta: i32) -> Result<Comment, Error> {
        self.comments
            .increment_votes(id, delta)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(COMMENT_NOT_FOUND))
    }

    /// Delete a comment.
    ///
    /// # Errors
    ///
    /// Not found with `"Comment not found!"` when nothing was deleted.
    pub async fn delete_comment(&self, id: CommentId) -> Result<(), Error> {
        let deleted = self
            .comments
            .delete(id)
            .await
            .map_err(Self::map_persistence_error)?;
        if deleted {
            Ok(())
        } else {
            Err(Error::not_found(COMMENT_NOT_FOUND))
        }
    }
}

#[cfg(test)]
#[path = "news_service_tests.rs"]
mod tests;
