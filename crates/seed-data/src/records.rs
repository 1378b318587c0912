//! Record shapes found in fixture files and produced by the normaliser.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Topic row exactly as it is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSeed {
    /// Primary key, e.g. `mitch`.
    pub slug: String,
    /// Free text description.
    pub description: String,
}

/// User row exactly as it is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSeed {
    /// Primary key.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

/// Record carrying an epoch-milliseconds `created_at` next to arbitrary
/// other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDated<T> {
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Remaining fields, carried through untouched.
    #[serde(flatten)]
    pub fields: T,
}

/// Counterpart of [`RawDated`] whose `created_at` is a UTC timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dated<T> {
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Remaining fields, carried through untouched.
    #[serde(flatten)]
    pub fields: T,
}

/// Article columns other than the identifier and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFields {
    /// Headline, also used by comments to refer to the article.
    pub title: String,
    /// Slug of the owning topic.
    pub topic: String,
    /// Username of the author.
    pub author: String,
    /// Article text.
    pub body: String,
    /// Initial vote tally; fixtures omit it for fresh articles.
    #[serde(default)]
    pub votes: i32,
}

/// Article as stored in fixture files.
pub type RawArticle = RawDated<ArticleFields>;

/// Article ready for insertion.
pub type ArticleSeed = Dated<ArticleFields>;

/// Comment as stored in fixture files.
///
/// `belongs_to` holds the article title and `created_by` the author's
/// username. Unrecognised keys are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawComment {
    /// Comment text.
    pub body: String,
    /// Title of the article the comment belongs to.
    pub belongs_to: String,
    /// Username of the commenter.
    pub created_by: String,
    /// Initial vote tally.
    #[serde(default)]
    pub votes: i32,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Any other fields present in the fixture.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Comment ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSeed {
    /// Username of the commenter.
    pub author: String,
    /// Identifier of the article resolved from its title.
    pub article_id: i32,
    /// Initial vote tally.
    pub votes: i32,
    /// Comment text.
    pub body: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Fields carried through from the fixture.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
