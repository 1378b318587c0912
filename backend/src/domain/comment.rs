//! Comment data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ArticleId, Username};

/// Serial primary key of a comment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(example = 1)]
pub struct CommentId(i32);

impl CommentId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for CommentId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored comment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    /// Primary key.
    pub comment_id: CommentId,
    /// Username of the commenter.
    #[schema(example = "butter_bridge")]
    pub author: String,
    /// Article the comment belongs to.
    pub article_id: ArticleId,
    /// Net vote tally; may be negative.
    #[schema(example = 14)]
    pub votes: i32,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Comment text.
    pub body: String,
}

/// Validation errors returned by [`NewComment::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentValidationError {
    /// The username is empty or malformed.
    InvalidUsername,
    /// The body is empty once trimmed.
    EmptyBody,
}

impl fmt::Display for CommentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUsername => write!(f, "comment author must be a valid username"),
            Self::EmptyBody => write!(f, "comment body must not be empty"),
        }
    }
}

impl std::error::Error for CommentValidationError {}

/// Comment about to be inserted. Votes and `created_at` use column defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    article_id: ArticleId,
    author: Username,
    body: String,
}

impl NewComment {
    /// Validate the author and body of a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentValidationError`] when either value is unusable.
    ///
    /// # Examples
    /// ```
    /// use news_backend::domain::{ArticleId, NewComment};
    ///
    /// let comment = NewComment::try_new(ArticleId::new(1), "lurker", "First!")
    ///     .expect("valid comment");
    /// assert_eq!(comment.author().as_str(), "lurker");
    /// assert!(NewComment::try_new(ArticleId::new(1), "lurker", "  ").is_err());
    /// ```
    pub fn try_new(
        article_id: ArticleId,
        author: &str,
        body: &str,
    ) -> Result<Self, CommentValidationError> {
        let author =
            Username::new(author).map_err(|_| CommentValidationError::InvalidUsername)?;
        if body.trim().is_empty() {
            return Err(CommentValidationError::EmptyBody);
        }
        Ok(Self {
            article_id,
            author,
            body: body.to_owned(),
        })
    }

    /// Target article.
    #[must_use]
    pub const fn article_id(&self) -> ArticleId {
        self.article_id
    }

    /// Commenter.
    #[must_use]
    pub const fn author(&self) -> &Username {
        &self.author
    }

    /// Comment text.
    #[must_use]
    pub fn body(&self) -> &str {
        self.body.as_str()
    }
}
