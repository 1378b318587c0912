//! Port abstraction for replacing the stored dataset with seed data.
//!
//! Seeding is destructive: adapters clear every news table and reset the
//! serial counters before inserting, so article identifiers follow the order
//! of the seed file. The whole replacement runs in one transaction.

use async_trait::async_trait;
use seed_data::{ArticleSeed, RawComment, TopicSeed, UserSeed};

use super::define_port_error;

define_port_error! {
    /// Errors raised by seed repository adapters.
    pub enum SeedRepositoryError {
        /// Repository connection could not be established.
        Connection => "seeding connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "seeding query failed: {message}",
        /// Comment rows could not be linked to the inserted articles.
        Normalise => "seed comments could not be normalised: {message}",
    }
}

/// Records to insert, with article timestamps already converted.
///
/// Comments stay raw because their `article_id` is only known once the
/// articles have been inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedPayload {
    /// Topic rows.
    pub topics: Vec<TopicSeed>,
    /// User rows.
    pub users: Vec<UserSeed>,
    /// Article rows in insertion order.
    pub articles: Vec<ArticleSeed>,
    /// Comment rows referencing articles by title.
    pub comments: Vec<RawComment>,
}

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Topics inserted.
    pub topics: usize,
    /// Users inserted.
    pub users: usize,
    /// Articles inserted.
    pub articles: usize,
    /// Comments inserted.
    pub comments: usize,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Drop all existing rows and insert the payload.
    async fn replace_all(&self, payload: SeedPayload) -> Result<SeedSummary, SeedRepositoryError>;
}
