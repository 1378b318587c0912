//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every news endpoint, the health probes and the
//! schemas they exchange. The document is served by Swagger UI in debug
//! builds and printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{
    Article, ArticleDetail, ArticleSortColumn, Comment, CommentSortColumn, Error, ErrorCode,
    SortOrder, Topic, User,
};
use crate::inbound::http::schemas::{
    ArticleDetailResponse, ArticleResponse, ArticlesResponse, CommentResponse, CommentsResponse,
    IncVotesBody, NewCommentBody, TopicsResponse, UserResponse,
};

/// OpenAPI document for the news API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "News API",
        description = "Articles, comments, topics and users backed by PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::endpoints::get_api,
        crate::inbound::http::topics::get_topics,
        crate::inbound::http::users::get_user_by_username,
        crate::inbound::http::articles::get_articles,
        crate::inbound::http::articles::get_article_by_id,
        crate::inbound::http::articles::patch_article_votes,
        crate::inbound::http::comments::get_comments_for_article,
        crate::inbound::http::comments::post_comment,
        crate::inbound::http::comments::patch_comment_votes,
        crate::inbound::http::comments::delete_comment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Article,
        ArticleDetail,
        Comment,
        Topic,
        User,
        Error,
        ErrorCode,
        SortOrder,
        ArticleSortColumn,
        CommentSortColumn,
        IncVotesBody,
        NewCommentBody,
        TopicsResponse,
        UserResponse,
        ArticleDetailResponse,
        ArticleResponse,
        ArticlesResponse,
        CommentsResponse,
        CommentResponse,
    )),
    tags(
        (name = "api", description = "Endpoint catalogue"),
        (name = "topics", description = "Article topics"),
        (name = "users", description = "Read-only user profiles"),
        (name = "articles", description = "Articles and their votes"),
        (name = "comments", description = "Comments on articles"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
