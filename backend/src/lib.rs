//! News API backend library.
//!
//! Hexagonal layout: [`domain`] holds entities, ports and use cases;
//! [`inbound`] adapts HTTP requests onto them; [`outbound`] implements the
//! ports over PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
