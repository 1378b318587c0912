//! Domain primitives, ports and use cases.
//!
//! Purpose: define the news entities shared by the HTTP and persistence
//! layers, the ports adapters implement, and the services that drive them.
//! Types document their serialisation contracts in their own Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable category.
//! - Article, Comment, Topic, User: stored entities.
//! - ArticleListQuery / CommentListQuery: listing parameters.
//! - NewsService: the request-time use cases.
//! - DatasetSeeder: destructive reload from fixture data.

pub mod article;
pub mod comment;
pub mod error;
pub mod listing;
pub mod news_service;
pub mod ports;
pub mod seeding;
pub mod topic;
pub mod trace_id;
pub mod user;

pub use self::article::{Article, ArticleDetail, ArticleId};
pub use self::comment::{Comment, CommentId, CommentValidationError, NewComment};
pub use self::error::{
    BAD_REQUEST, Error, ErrorCode, INTERNAL_SERVER_ERROR, METHOD_NOT_FOUND, ROUTE_NOT_FOUND,
    UNPROCESSABLE_ENTITY,
};
pub use self::listing::{
    ArticleListQuery, ArticleSortColumn, CommentListQuery, CommentSortColumn,
    DEFAULT_COMMENT_LIMIT, ListingParseError, Page, SortOrder,
};
pub use self::news_service::{
    ARTICLE_NOT_FOUND, ARTICLES_NOT_FOUND, COMMENT_NOT_FOUND, NewsService, USERNAME_NOT_FOUND,
};
pub use self::seeding::{DatasetSeeder, SeedingError};
pub use self::topic::Topic;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, Username, UsernameValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use news_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Article not found!"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
