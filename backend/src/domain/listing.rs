//! Sorting, filtering and pagination parameters for list queries.
//!
//! Sort columns are closed enums, so an unknown `sort_by` value is rejected
//! while parsing the request rather than reaching the database.

use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Comments returned per page when `limit` is omitted.
pub const DEFAULT_COMMENT_LIMIT: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);

/// A listing parameter held a value outside its allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported {parameter} value '{value}'")]
pub struct ListingParseError {
    parameter: &'static str,
    value: String,
}

impl ListingParseError {
    fn new(parameter: &'static str, value: &str) -> Self {
        Self {
            parameter,
            value: value.to_owned(),
        }
    }
}

macro_rules! parse_keywords {
    ($name:ident, $parameter:literal, { $($keyword:literal => $variant:ident),+ $(,)? }) => {
        impl $name {
            /// Query-string keyword for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ListingParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.to_ascii_lowercase().as_str() {
                    $($keyword => Ok(Self::$variant),)+
                    _ => Err(ListingParseError::new($parameter, value)),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = ListingParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }
    };
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String", rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

parse_keywords!(SortOrder, "order", { "asc" => Asc, "desc" => Desc });

/// Columns articles can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String", rename_all = "snake_case")]
pub enum ArticleSortColumn {
    /// Author username.
    Author,
    /// Headline.
    Title,
    /// Primary key.
    ArticleId,
    /// Topic slug.
    Topic,
    /// Creation time.
    #[default]
    CreatedAt,
    /// Vote tally.
    Votes,
    /// Derived number of comments.
    CommentCount,
}

parse_keywords!(ArticleSortColumn, "sort_by", {
    "author" => Author,
    "title" => Title,
    "article_id" => ArticleId,
    "topic" => Topic,
    "created_at" => CreatedAt,
    "votes" => Votes,
    "comment_count" => CommentCount,
});

/// Columns comments can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String", rename_all = "snake_case")]
pub enum CommentSortColumn {
    /// Primary key.
    CommentId,
    /// Commenter username.
    Author,
    /// Owning article.
    ArticleId,
    /// Vote tally.
    Votes,
    /// Creation time.
    #[default]
    CreatedAt,
    /// Comment text.
    Body,
}

parse_keywords!(CommentSortColumn, "sort_by", {
    "comment_id" => CommentId,
    "author" => Author,
    "article_id" => ArticleId,
    "votes" => Votes,
    "created_at" => CreatedAt,
    "body" => Body,
});

/// Parameters for listing articles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    /// Sort column, `created_at` by default.
    pub sort_by: ArticleSortColumn,
    /// Sort direction, ascending by default.
    pub order: SortOrder,
    /// Only articles written by this username.
    pub author: Option<String>,
    /// Only articles filed under this topic slug.
    pub topic: Option<String>,
}

/// One page of a paginated listing; both values start at one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: NonZeroU32,
    number: NonZeroU32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_COMMENT_LIMIT,
            number: NonZeroU32::MIN,
        }
    }
}

impl Page {
    /// Build a page from optional request values, applying defaults.
    #[must_use]
    pub fn new(limit: Option<NonZeroU32>, number: Option<NonZeroU32>) -> Self {
        let defaults = Self::default();
        Self {
            limit: limit.unwrap_or(defaults.limit),
            number: number.unwrap_or(defaults.number),
        }
    }

    /// Maximum number of rows on the page.
    #[must_use]
    pub fn limit(self) -> i64 {
        i64::from(self.limit.get())
    }

    /// Number of rows skipped before the page starts.
    #[must_use]
    pub fn offset(self) -> i64 {
        let skipped_pages = u64::from(self.number.get() - 1);
        let rows = skipped_pages.saturating_mul(u64::from(self.limit.get()));
        i64::try_from(rows).unwrap_or(i64::MAX)
    }
}

/// Parameters for listing the comments of one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentListQuery {
    /// Sort column, `created_at` by default.
    pub sort_by: CommentSortColumn,
    /// Sort direction, newest first by default.
    pub order: SortOrder,
    /// Page window.
    pub page: Page,
}

impl Default for CommentListQuery {
    fn default() -> Self {
        Self {
            sort_by: CommentSortColumn::default(),
            order: SortOrder::Desc,
            page: Page::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn non_zero(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).expect("non-zero test value")
    }

    #[rstest]
    #[case("author", ArticleSortColumn::Author)]
    #[case("comment_count", ArticleSortColumn::CommentCount)]
    #[case("VOTES", ArticleSortColumn::Votes)]
    fn article_sort_columns_parse(#[case] raw: &str, #[case] expected: ArticleSortColumn) {
        assert_eq!(raw.parse::<ArticleSortColumn>(), Ok(expected));
    }

    #[rstest]
    #[case("body")]
    #[case("not_a_column")]
    #[case("")]
    fn unknown_article_sort_columns_are_rejected(#[case] raw: &str) {
        assert!(raw.parse::<ArticleSortColumn>().is_err());
    }

    #[rstest]
    fn comment_sort_accepts_body() {
        assert_eq!("body".parse::<CommentSortColumn>(), Ok(CommentSortColumn::Body));
    }

    #[rstest]
    #[case("asc", SortOrder::Asc)]
    #[case("DESC", SortOrder::Desc)]
    fn sort_order_parses_case_insensitively(#[case] raw: &str, #[case] expected: SortOrder) {
        assert_eq!(raw.parse::<SortOrder>(), Ok(expected));
    }

    #[rstest]
    fn sort_order_rejects_other_words() {
        let err = "sideways".parse::<SortOrder>().expect_err("invalid order");
        assert_eq!(err.to_string(), "unsupported order value 'sideways'");
    }

    #[rstest]
    fn defaults_follow_listing_contract() {
        let articles = ArticleListQuery::default();
        assert_eq!(articles.sort_by, ArticleSortColumn::CreatedAt);
        assert_eq!(articles.order, SortOrder::Asc);

        let comments = CommentListQuery::default();
        assert_eq!(comments.sort_by, CommentSortColumn::CreatedAt);
        assert_eq!(comments.order, SortOrder::Desc);
        assert_eq!(comments.page.limit(), 10);
        assert_eq!(comments.page.offset(), 0);
    }

    #[rstest]
    #[case(None, None, 10, 0)]
    #[case(Some(5), Some(3), 5, 10)]
    #[case(Some(2), None, 2, 0)]
    fn page_window(
        #[case] limit: Option<u32>,
        #[case] number: Option<u32>,
        #[case] expected_limit: i64,
        #[case] expected_offset: i64,
    ) {
        let page = Page::new(limit.map(non_zero), number.map(non_zero));
        assert_eq!(page.limit(), expected_limit);
        assert_eq!(page.offset(), expected_offset);
    }

    #[rstest]
    fn page_offset_does_not_overflow() {
        let page = Page::new(Some(non_zero(u32::MAX)), Some(non_zero(u32::MAX)));
        assert!(page.offset() > 0);
    }
}
