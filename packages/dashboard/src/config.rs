//! Dashboard configuration.
//!
//! The defaults live in `config/default.toml`, embedded at compile time. A
//! user file is layered on top key by key, so it only needs the values it
//! changes.

use std::path::Path;

use broend_map_grouping::statistics::StatisticsPolicy;
use broend_map_spatial::HullConfig;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The user file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document is not valid TOML or has the wrong shape.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Tunables for the derived views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Group statistics policy.
    pub statistics: StatisticsPolicy,
    /// Cluster hull construction.
    pub hull: HullConfig,
}

impl DashboardConfig {
    /// Parses the embedded default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the embedded document is malformed.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::layered(None)
    }

    /// Parses a configuration document layered over the embedded defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if either document is malformed.
    pub fn from_toml_str(overrides: &str) -> Result<Self, ConfigError> {
        Self::layered(Some(overrides))
    }

    /// Loads the embedded defaults, overridden by the file at `path` if
    /// one is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Self::embedded();
        };

        log::info!("Reading configuration from {}", path.display());
        let body = std::fs::read_to_string(path)?;
        Self::from_toml_str(&body)
    }

    fn layered(overrides: Option<&str>) -> Result<Self, ConfigError> {
        let mut table: toml::Table = toml::from_str(DEFAULT_CONFIG_TOML)?;
        if let Some(overrides) = overrides {
            let overrides: toml::Table = toml::from_str(overrides)?;
            merge_tables(&mut table, overrides);
        }
        Ok(toml::Value::Table(table).try_into()?)
    }
}

/// Recursively overlays `overlay` onto `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(nested) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, nested);
                } else {
                    base.insert(key, toml::Value::Table(nested));
                }
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}
