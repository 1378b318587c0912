//! Extractor configuration shared by every route.
//!
//! Path, query and JSON extraction failures all become `400 Bad request!`
//! before a handler runs, so malformed input never reaches the database.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::Error;

fn bad_request(kind: &'static str, reason: &dyn std::fmt::Display, req: &HttpRequest) -> actix_web::Error {
    debug!(kind, path = req.path(), reason = %reason, "rejected request input");
    Error::bad_request().into()
}

/// Path parameters that fail to parse, e.g. `/api/articles/dog`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err: PathError, req| bad_request("path", &err, req))
}

/// Query strings with unknown sort keywords or non-positive page values.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: QueryPayloadError, req| bad_request("query", &err, req))
}

/// Bodies that are not JSON or do not match the expected shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, req| bad_request("json", &err, req))
}

/// Register all extractor configs on a scope or app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(path_config())
        .app_data(query_config())
        .app_data(json_config());
}
