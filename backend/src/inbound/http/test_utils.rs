//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::inbound::http::routes::{configure, route_not_found};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::test_support::InMemoryNewsStore;

/// Handler state over a freshly seeded in-memory store.
pub fn seeded_state() -> (HttpState, Arc<InMemoryNewsStore>) {
    let store = Arc::new(InMemoryNewsStore::seeded());
    let state = HttpState::new(HttpStatePorts {
        articles: store.clone(),
        comments: store.clone(),
        users: store.clone(),
        topics: store.clone(),
    });
    (state, store)
}

/// The full route table wrapped in tracing, as the server builds it.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(route_not_found))
}
