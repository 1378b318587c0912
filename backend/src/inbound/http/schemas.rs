//! Request and response bodies for the news endpoints.
//!
//! Responses wrap their payload in a single named key, e.g.
//! `{"article": {...}}`, except comment vote updates which return the bare
//! comment.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Article, ArticleDetail, ArticleListQuery, ArticleSortColumn, Comment, CommentListQuery,
    CommentSortColumn, Page, SortOrder, Topic, User,
};

/// Body of vote update requests.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct IncVotesBody {
    /// Amount to add to the tally; negative values subtract.
    #[schema(example = 1)]
    pub inc_votes: i32,
}

/// Body of `POST /api/articles/{article_id}/comments`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewCommentBody {
    /// Existing username posting the comment.
    #[schema(example = "lurker")]
    pub username: String,
    /// Comment text.
    #[schema(example = "First!")]
    pub body: String,
}

/// Query string accepted by `GET /api/articles`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Sort column, `created_at` when omitted.
    pub sort_by: Option<ArticleSortColumn>,
    /// `asc` (default) or `desc`.
    pub order: Option<SortOrder>,
    /// Only articles by this username.
    pub author: Option<String>,
    /// Only articles in this topic.
    pub topic: Option<String>,
}

impl From<ArticleListParams> for ArticleListQuery {
    fn from(params: ArticleListParams) -> Self {
        Self {
            sort_by: params.sort_by.unwrap_or_default(),
            order: params.order.unwrap_or_default(),
            author: params.author,
            topic: params.topic,
        }
    }
}

/// Query string accepted by `GET /api/articles/{article_id}/comments`.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    /// Sort column, `created_at` when omitted.
    pub sort_by: Option<CommentSortColumn>,
    /// `desc` (default) or `asc`.
    pub order: Option<SortOrder>,
    /// Page size, 10 when omitted.
    #[param(value_type = Option<u32>, minimum = 1)]
    pub limit: Option<NonZeroU32>,
    /// One-based page number.
    #[param(value_type = Option<u32>, minimum = 1)]
    pub p: Option<NonZeroU32>,
}

impl From<CommentListParams> for CommentListQuery {
    fn from(params: CommentListParams) -> Self {
        let defaults = Self::default();
        Self {
            sort_by: params.sort_by.unwrap_or(defaults.sort_by),
            order: params.order.unwrap_or(defaults.order),
            page: Page::new(params.limit, params.p),
        }
    }
}

/// `{"topics": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

/// `{"user": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

/// `{"article": {...}}` including `comment_count`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailResponse {
    pub article: ArticleDetail,
}

/// `{"article": {...}}` after a vote update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: Article,
}

/// `{"articles": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleDetail>,
}

/// `{"comments": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// `{"comment": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: Comment,
}
