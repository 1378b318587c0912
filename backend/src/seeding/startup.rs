//! Startup seeding orchestration.

use std::sync::Arc;

use seed_data::{DatasetError, SeedDataset};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{SeedRepository, SeedSummary};
use crate::domain::{DatasetSeeder, SeedingError};
use crate::seeding::config::SeedSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Fixture files could not be located, read or parsed.
    #[error("failed to load seed dataset: {0}")]
    Dataset(#[from] DatasetError),
    /// Normalisation or persistence failed.
    #[error("dataset seeding error: {0}")]
    Seeding(#[from] SeedingError),
}

/// Read the fixture directory selected by `settings`.
///
/// # Errors
///
/// [`StartupSeedingError::Dataset`] for an unknown environment or unreadable
/// fixtures.
pub fn load_dataset(settings: &SeedSettings) -> Result<SeedDataset, StartupSeedingError> {
    let data_dir = settings.data_dir()?;
    info!(data_dir = %data_dir.display(), "loading seed dataset");
    Ok(SeedDataset::load(&data_dir)?)
}

/// Replace the stored news data with fixtures when seeding is enabled.
///
/// Returns `None` without touching the repository when disabled.
///
/// # Errors
///
/// See [`StartupSeedingError`].
pub async fn seed_on_startup<R>(
    settings: &SeedSettings,
    repository: Arc<R>,
) -> Result<Option<SeedSummary>, StartupSeedingError>
where
    R: SeedRepository,
{
    if !settings.enabled() {
        info!(reason = "disabled", "dataset seeding skipped");
        return Ok(None);
    }

    let dataset = load_dataset(settings)?;
    let summary = DatasetSeeder::new(repository).seed(dataset).await?;
    Ok(Some(summary))
}
