//! Pure transformations from fixture records to insertable rows.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::NormaliseError;
use crate::records::{CommentSeed, Dated, RawComment, RawDated};

/// Identifier and title of an inserted article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRef {
    /// Database identifier.
    pub article_id: i32,
    /// Article headline.
    pub title: String,
}

impl ArticleRef {
    /// Pair an identifier with a title.
    pub fn new(article_id: i32, title: impl Into<String>) -> Self {
        Self {
            article_id,
            title: title.into(),
        }
    }
}

/// Lookup from article title to article identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleIndex(HashMap<String, i32>);

impl TitleIndex {
    /// Identifier stored for `title`, if any.
    #[must_use]
    pub fn resolve(&self, title: &str) -> Option<i32> {
        self.0.get(title).copied()
    }

    /// Number of distinct titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the index holds no titles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn timestamp_from_millis(millis: i64) -> Result<DateTime<Utc>, NormaliseError> {
    DateTime::from_timestamp_millis(millis).ok_or(NormaliseError::TimestampOutOfRange { millis })
}

/// Convert every record's epoch-milliseconds `created_at` into a timestamp.
///
/// `None` stands for a missing record list and yields an empty vector, as
/// does an empty slice. Input records are left untouched.
///
/// # Errors
///
/// Returns [`NormaliseError::TimestampOutOfRange`] when a value cannot be
/// represented as a date.
///
/// # Examples
/// ```
/// use seed_data::{format_dates, RawDated};
///
/// let raw = vec![RawDated { created_at: 0, fields: "epoch" }];
/// let dated = format_dates(Some(raw.as_slice())).expect("in range");
/// assert_eq!(dated[0].created_at.timestamp_millis(), 0);
/// assert!(format_dates::<&str>(None).expect("empty").is_empty());
/// ```
pub fn format_dates<T: Clone>(
    records: Option<&[RawDated<T>]>,
) -> Result<Vec<Dated<T>>, NormaliseError> {
    records
        .unwrap_or_default()
        .iter()
        .map(|record| {
            Ok(Dated {
                created_at: timestamp_from_millis(record.created_at)?,
                fields: record.fields.clone(),
            })
        })
        .collect()
}

/// Build a title to identifier index from inserted articles.
///
/// Later entries win when a title repeats.
#[must_use]
pub fn make_ref_obj(records: &[ArticleRef]) -> TitleIndex {
    TitleIndex(
        records
            .iter()
            .map(|record| (record.title.clone(), record.article_id))
            .collect(),
    )
}

/// Turn fixture comments into insertable rows.
///
/// `created_by` becomes `author`, `belongs_to` is resolved through `index`
/// into `article_id` (replacing any `article_id` already present in the
/// fixture), `created_at` is converted and every other field is carried
/// through.
///
/// # Errors
///
/// Returns [`NormaliseError::UnknownArticleTitle`] when `belongs_to` is not
/// in the index and [`NormaliseError::TimestampOutOfRange`] for unusable
/// timestamps.
pub fn format_comments(
    records: &[RawComment],
    index: &TitleIndex,
) -> Result<Vec<CommentSeed>, NormaliseError> {
    records
        .iter()
        .map(|record| {
            let article_id = index.resolve(&record.belongs_to).ok_or_else(|| {
                NormaliseError::UnknownArticleTitle {
                    title: record.belongs_to.clone(),
                }
            })?;
            let mut extra = record.extra.clone();
            extra.remove("article_id");
            Ok(CommentSeed {
                author: record.created_by.clone(),
                article_id,
                votes: record.votes,
                body: record.body.clone(),
                created_at: timestamp_from_millis(record.created_at)?,
                extra,
            })
        })
        .collect()
}
