//! Application configuration management.
//!
//! The configuration says where the two documents are loaded from. It is
//! read from `~/.config/fieldtrip/config.json` when present; the
//! `FIELDTRIP_ROSTER` and `FIELDTRIP_TRIPS` environment variables override
//! the file, and the working-directory defaults apply when neither is set.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::loader::DataSource;

/// Application name used for config/cache directory paths
pub const APP_NAME: &str = "fieldtrip";

/// Config file name
const CONFIG_FILE: &str = "config.json";

pub const ROSTER_ENV: &str = "FIELDTRIP_ROSTER";
pub const TRIPS_ENV: &str = "FIELDTRIP_TRIPS";

pub const DEFAULT_ROSTER_SOURCE: &str = "students_by_grade.json";
pub const DEFAULT_TRIPS_SOURCE: &str = "field_trips_data.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub roster_source: Option<String>,
    pub trips_source: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Load the config file, falling back to defaults when it is unusable.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply environment overrides.
    pub fn with_env(mut self) -> Self {
        self.apply_overrides(std::env::var(ROSTER_ENV).ok(), std::env::var(TRIPS_ENV).ok());
        self
    }

    fn apply_overrides(&mut self, roster: Option<String>, trips: Option<String>) {
        if let Some(roster) = roster.filter(|s| !s.trim().is_empty()) {
            self.roster_source = Some(roster);
        }
        if let Some(trips) = trips.filter(|s| !s.trim().is_empty()) {
            self.trips_source = Some(trips);
        }
    }

    pub fn roster(&self) -> DataSource {
        DataSource::from(self.roster_source.as_deref().unwrap_or(DEFAULT_ROSTER_SOURCE))
    }

    pub fn trips(&self) -> DataSource {
        DataSource::from(self.trips_source.as_deref().unwrap_or(DEFAULT_TRIPS_SOURCE))
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for the log file.
    pub fn log_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}
