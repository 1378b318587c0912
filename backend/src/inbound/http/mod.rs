//! HTTP inbound adapter exposing the news REST endpoints.

pub mod articles;
pub mod comments;
pub mod endpoints;
pub mod error;
pub mod extractors;
pub mod health;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod topics;
pub mod users;

pub use error::ApiResult;
