//! Startup and command-line wiring for dataset seeding.

mod config;
mod startup;

pub use config::SeedSettings;
pub use startup::{StartupSeedingError, load_dataset, seed_on_startup};
