//! Dataset seeding orchestration.
//!
//! Converts a fixture [`SeedDataset`] into a [`SeedPayload`] and delegates the
//! destructive replace to the seeding repository port. Comments are checked
//! against the dataset's article titles before the database is touched, so a
//! dangling `belongs_to` fails fast instead of rolling back a transaction.

use std::sync::Arc;

use seed_data::{ArticleRef, NormaliseError, SeedDataset, format_comments, make_ref_obj};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{SeedPayload, SeedRepository, SeedRepositoryError, SeedSummary};

/// Errors raised while preparing or applying a dataset.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// Fixture records could not be normalised.
    #[error("seed data could not be normalised: {0}")]
    Normalise(#[from] NormaliseError),
    /// Persistence adapter failed while seeding.
    #[error("seed persistence error: {0}")]
    Persistence(#[from] SeedRepositoryError),
}

/// Service that replaces the stored news data with a fixture dataset.
#[derive(Clone)]
pub struct DatasetSeeder<R> {
    repository: Arc<R>,
}

impl<R> DatasetSeeder<R> {
    /// Create a new seeder with the given persistence adapter.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> DatasetSeeder<R>
where
    R: SeedRepository,
{
    /// Wipe existing rows and insert `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedingError::Normalise`] for bad timestamps or comments
    /// that name an unknown article, and [`SeedingError::Persistence`] when
    /// the adapter fails.
    pub async fn seed(&self, dataset: SeedDataset) -> Result<SeedSummary, SeedingError> {
        let articles = dataset.article_seeds()?;
        let provisional: Vec<ArticleRef> = articles
            .iter()
            .zip(1..)
            .map(|(article, id)| ArticleRef::new(id, article.fields.title.clone()))
            .collect();
        format_comments(&dataset.comments, &make_ref_obj(&provisional))?;

        let payload = SeedPayload {
            topics: dataset.topics,
            users: dataset.users,
            articles,
            comments: dataset.comments,
        };
        let summary = self.repository.replace_all(payload).await?;
        info!(
            topics = summary.topics,
            users = summary.users,
            articles = summary.articles,
            comments = summary.comments,
            "seeded news dataset"
        );
        Ok(summary)
    }
}
