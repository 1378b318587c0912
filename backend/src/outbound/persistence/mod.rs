//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the news repository ports, backed by
//! PostgreSQL via `diesel-async` and a `bb8` connection pool.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: Diesel and pool failures are mapped onto
//!   `NewsPersistenceError` in `diesel_error_mapping.rs`.
//!
//! # Example
//!
//! ```rust,no_run
//! use news_backend::outbound::persistence::{DbPool, DieselTopicRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/nc_news")).await?;
//! let topics = DieselTopicRepository::new(pool);
//! # let _ = topics;
//! # Ok(())
//! # }
//! ```

mod diesel_article_repository;
mod diesel_comment_repository;
mod diesel_error_mapping;
mod diesel_seed_repository;
mod diesel_topic_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_article_repository::DieselArticleRepository;
pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_seed_repository::DieselSeedRepository;
pub use diesel_topic_repository::DieselTopicRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{
    MIGRATIONS, MigrationError, run_pending_migrations, run_pending_migrations_blocking,
};
pub use pool::{DbPool, PoolConfig, PoolError};
