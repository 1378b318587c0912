//! Articles API handlers.
//!
//! ```text
//! GET   /api/articles?sort_by=votes&order=desc&author=..&topic=..
//! GET   /api/articles/{article_id}
//! PATCH /api/articles/{article_id} {"inc_votes": 1}
//! ```

use actix_web::web;

use crate::domain::{ArticleId, ArticleListQuery, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ArticleDetailResponse, ArticleListParams, ArticleResponse, ArticlesResponse, IncVotesBody,
};
use crate::inbound::http::state::HttpState;

/// List articles with comment counts.
///
/// Sorting defaults to `created_at` ascending. Filters that match nothing,
/// including unknown authors or topics, answer 404.
#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles", body = ArticlesResponse),
        (status = 400, description = "Unknown sort column or order", body = Error),
        (status = 404, description = "Articles not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["articles"],
    operation_id = "getArticles"
)]
pub async fn get_articles(
    state: web::Data<HttpState>,
    params: web::Query<ArticleListParams>,
) -> ApiResult<web::Json<ArticlesResponse>> {
    let query = ArticleListQuery::from(params.into_inner());
    let articles = state.news.list_articles(&query).await?;
    Ok(web::Json(ArticlesResponse { articles }))
}

/// Fetch one article with its comment count.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article", body = ArticleDetailResponse),
        (status = 400, description = "Bad request", body = Error),
        (status = 404, description = "Article not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["articles"],
    operation_id = "getArticleById"
)]
pub async fn get_article_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<ArticleDetailResponse>> {
    let article = state
        .news
        .fetch_article_by_id(ArticleId::new(path.into_inner()))
        .await?;
    Ok(web::Json(ArticleDetailResponse { article }))
}

/// Add `inc_votes` to an article's tally.
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article identifier")),
    request_body = IncVotesBody,
    responses(
        (status = 200, description = "Updated article", body = ArticleResponse),
        (status = 400, description = "Bad request", body = Error),
        (status = 404, description = "Article not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["articles"],
    operation_id = "patchArticleVotes"
)]
pub async fn patch_article_votes(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<IncVotesBody>,
) -> ApiResult<web::Json<ArticleResponse>> {
    let article = state
        .news
        .update_article_votes(ArticleId::new(path.into_inner()), payload.inc_votes)
        .await?;
    Ok(web::Json(ArticleResponse { article }))
}
