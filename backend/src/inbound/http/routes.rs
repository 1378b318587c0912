//! Route table for the news API.
//!
//! Every path is registered as a resource listing its allowed methods. Other
//! methods on a known path fall through to [`method_not_allowed`]; unknown
//! paths are left to the application's default service, normally
//! [`route_not_found`].

use actix_web::{HttpResponse, Resource, web};

use crate::domain::{Error, ROUTE_NOT_FOUND};
use crate::inbound::http::ApiResult;
use crate::inbound::http::articles::{get_article_by_id, get_articles, patch_article_votes};
use crate::inbound::http::comments::{
    delete_comment, get_comments_for_article, patch_comment_votes, post_comment,
};
use crate::inbound::http::endpoints::get_api;
use crate::inbound::http::extractors;
use crate::inbound::http::health::{live, ready};
use crate::inbound::http::topics::get_topics;
use crate::inbound::http::users::get_user_by_username;

/// 405 `Method is not found` for known paths.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed())
}

/// 404 `Route not found!` for anything the table does not know.
pub async fn route_not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found(ROUTE_NOT_FOUND))
}

fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(method_not_allowed))
}

/// Register the API resources and extractor configs.
///
/// Handlers expect `web::Data<HttpState>`; the probes expect
/// `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use news_backend::inbound::http::routes::{configure, route_not_found};
///
/// let app = App::new()
///     .configure(configure)
///     .default_service(web::to(route_not_found));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractors::configure(cfg);
    cfg.service(resource("/api").route(web::get().to(get_api)))
        .service(resource("/api/topics").route(web::get().to(get_topics)))
        .service(resource("/api/users/{username}").route(web::get().to(get_user_by_username)))
        .service(resource("/api/articles").route(web::get().to(get_articles)))
        .service(
            resource("/api/articles/{article_id}")
                .route(web::get().to(get_article_by_id))
                .route(web::patch().to(patch_article_votes)),
        )
        .service(
            resource("/api/articles/{article_id}/comments")
                .route(web::get().to(get_comments_for_article))
                .route(web::post().to(post_comment)),
        )
        .service(
            resource("/api/comments/{comment_id}")
                .route(web::patch().to(patch_comment_votes))
                .route(web::delete().to(delete_comment)),
        )
        .service(resource("/health/ready").route(web::get().to(ready)))
        .service(resource("/health/live").route(web::get().to(live)));
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
