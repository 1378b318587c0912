//! Builds handler state from the database pool.

use std::sync::Arc;

use actix_web::web;

use news_backend::inbound::http::state::{HttpState, HttpStatePorts};
use news_backend::outbound::persistence::{
    DbPool, DieselArticleRepository, DieselCommentRepository, DieselTopicRepository,
    DieselUserRepository,
};

/// Wire every news port to its Diesel adapter.
pub(crate) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(HttpStatePorts {
        articles: Arc::new(DieselArticleRepository::new(pool.clone())),
        comments: Arc::new(DieselCommentRepository::new(pool.clone())),
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        topics: Arc::new(DieselTopicRepository::new(pool.clone())),
    }))
}
