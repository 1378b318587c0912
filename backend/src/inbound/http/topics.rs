//! Topics API handler.
//!
//! ```text
//! GET /api/topics
//! ```

use actix_web::web;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::TopicsResponse;
use crate::inbound::http::state::HttpState;

/// List every topic ordered by slug.
#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "Topics", body = TopicsResponse),
        (status = 405, description = "Method not allowed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["topics"],
    operation_id = "getTopics"
)]
pub async fn get_topics(state: web::Data<HttpState>) -> ApiResult<web::Json<TopicsResponse>> {
    let topics = state.news.list_topics().await?;
    Ok(web::Json(TopicsResponse { topics }))
}
