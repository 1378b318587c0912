//! Users API handler.
//!
//! ```text
//! GET /api/users/{username}
//! ```

use actix_web::web;
use tracing::debug;

use crate::domain::{Error, USERNAME_NOT_FOUND, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::UserResponse;
use crate::inbound::http::state::HttpState;

/// Fetch a single user.
///
/// A username that could never be stored (blank or padded with whitespace)
/// is reported the same way as an unknown one.
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username to look up")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "Username not found", body = Error),
        (status = 405, description = "Method not allowed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserByUsername"
)]
pub async fn get_user_by_username(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let username = Username::new(path.into_inner()).map_err(|err| {
        debug!(error = %err, "unusable username in path");
        Error::not_found(USERNAME_NOT_FOUND)
    })?;
    let user = state.news.fetch_user_by_username(&username).await?;
    Ok(web::Json(UserResponse { user }))
}
