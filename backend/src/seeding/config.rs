//! Seeding configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use seed_data::{DatasetError, SeedEnvironment};
use serde::Deserialize;

/// Configuration values controlling dataset seeding at startup.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEWS_SEED")]
pub struct SeedSettings {
    /// Replace the database contents with fixture data on startup. Unset
    /// means no.
    pub enabled: Option<bool>,
    /// Bundled dataset to load: `test` or `development`.
    pub environment: Option<String>,
    /// Fixture directory overriding the bundled dataset.
    pub data_dir: Option<PathBuf>,
}

impl SeedSettings {
    /// Whether seeding runs at startup.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// The selected bundled environment, `development` when unset.
    ///
    /// # Errors
    ///
    /// [`DatasetError::UnknownEnvironment`] for unrecognised names.
    pub fn environment(&self) -> Result<SeedEnvironment, DatasetError> {
        self.environment
            .as_deref()
            .map_or(Ok(SeedEnvironment::default()), str::parse)
    }

    /// Directory the fixtures are read from.
    ///
    /// # Errors
    ///
    /// See [`SeedSettings::environment`].
    pub fn data_dir(&self) -> Result<PathBuf, DatasetError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.environment()?.data_dir()),
        }
    }
}
