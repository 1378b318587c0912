//! Article data model.
//!
//! Articles are created by seeding only. Through the API they can be read,
//! listed and voted on; `comment_count` is derived at query time and never
//! stored.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Serial primary key of an article.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(example = 1)]
pub struct ArticleId(i32);

impl ArticleId {
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

impl From<i32> for ArticleId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored article row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    /// Primary key.
    pub article_id: ArticleId,
    /// Headline.
    #[schema(example = "Living in the shadow of a great man")]
    pub title: String,
    /// Article text.
    pub body: String,
    /// Net vote tally; may be negative.
    #[schema(example = 100)]
    pub votes: i32,
    /// Slug of the owning topic.
    #[schema(example = "mitch")]
    pub topic: String,
    /// Username of the author.
    #[schema(example = "butter_bridge")]
    pub author: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Article together with the number of comments attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetail {
    /// Article columns, flattened into the same JSON object.
    #[serde(flatten)]
    pub article: Article,
    /// Number of comments; zero when the article has none.
    #[schema(example = 13)]
    pub comment_count: i64,
}
