//! Comments API handlers.
//!
//! ```text
//! GET    /api/articles/{article_id}/comments?sort_by=votes&order=asc&limit=5&p=2
//! POST   /api/articles/{article_id}/comments {"username": "..", "body": ".."}
//! PATCH  /api/comments/{comment_id} {"inc_votes": -1}
//! DELETE /api/comments/{comment_id}
//! ```

use actix_web::{HttpResponse, web};

use crate::domain::{ArticleId, Comment, CommentId, CommentListQuery, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CommentListParams, CommentResponse, CommentsResponse, IncVotesBody, NewCommentBody,
};
use crate::inbound::http::state::HttpState;

/// One page of an article's comments, newest first by default.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(
        ("article_id" = i32, Path, description = "Article identifier"),
        CommentListParams
    ),
    responses(
        (status = 200, description = "Comments; empty when the article has none", body = CommentsResponse),
        (status = 400, description = "Bad request", body = Error),
        (status = 404, description = "Article not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["comments"],
    operation_id = "getCommentsForArticle"
)]
pub async fn get_comments_for_article(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    params: web::Query<CommentListParams>,
) -> ApiResult<web::Json<CommentsResponse>> {
    let query = CommentListQuery::from(params.into_inner());
    let comments = state
        .news
        .fetch_comments_for_article(ArticleId::new(path.into_inner()), &query)
        .await?;
    Ok(web::Json(CommentsResponse { comments }))
}

/// Post a comment as an existing user.
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = i32, Path, description = "Article identifier")),
    request_body = NewCommentBody,
    responses(
        (status = 201, description = "Created comment", body = CommentResponse),
        (status = 400, description = "Bad request", body = Error),
        (status = 422, description = "Article or user does not exist", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["comments"],
    operation_id = "postComment"
)]
pub async fn post_comment(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<NewCommentBody>,
) -> ApiResult<HttpResponse> {
    let NewCommentBody { username, body } = payload.into_inner();
    let comment = state
        .news
        .create_comment(ArticleId::new(path.into_inner()), &username, &body)
        .await?;
    Ok(HttpResponse::Created().json(CommentResponse { comment }))
}

/// Add `inc_votes` to a comment's tally and return the bare comment.
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = i32, Path, description = "Comment identifier")),
    request_body = IncVotesBody,
    responses(
        (status = 200, description = "Updated comment", body = Comment),
        (status = 400, description = "Bad request", body = Error),
        (status = 404, description = "Comment not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["comments"],
    operation_id = "patchCommentVotes"
)]
pub async fn patch_comment_votes(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<IncVotesBody>,
) -> ApiResult<web::Json<Comment>> {
    let comment = state
        .news
        .update_comment_votes(CommentId::new(path.into_inner()), payload.inc_votes)
        .await?;
    Ok(web::Json(comment))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = i32, Path, description = "Comment identifier")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "Bad request", body = Error),
        (status = 404, description = "Comment not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["comments"],
    operation_id = "deleteComment"
)]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .news
        .delete_comment(CommentId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
