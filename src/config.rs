//! Configuration for registry assembly
//!
//! This module provides runtime configuration loading from JSON files, so a
//! test run can point at an edited fixtures directory or restrict the
//! connectors it exercises without recompiling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::connectors::{self, SUPPORTED_CONNECTORS};
use crate::error::FixtureError;
use crate::registry::FixtureRegistry;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assets/fixture_config.json";

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registry assembly parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegistryConfig {
    /// Directory holding `<connector>.json` overrides
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
    /// Connectors to register; empty registers every supported connector
    #[serde(default)]
    pub connectors: Vec<String>,
}

/// Log output parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Max level: error, warn, info, debug or trace
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from JSON file
    ///
    /// # Returns
    /// The parsed configuration, or defaults when the file is missing or invalid.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_PATH)
    }

    /// Assemble a registry from the configured directory and allowlist.
    pub fn build_registry(&self) -> Result<FixtureRegistry, FixtureError> {
        let entries = match &self.registry.fixtures_dir {
            Some(dir) => {
                let ids: Vec<&str> = if self.registry.connectors.is_empty() {
                    SUPPORTED_CONNECTORS.to_vec()
                } else {
                    self.registry.connectors.iter().map(String::as_str).collect()
                };
                connectors::load_dir(dir, &ids)?
            }
            None => connectors::embedded_entries()?,
        };
        FixtureRegistry::from_entries(entries)?.retain_connectors(&self.registry.connectors)
    }
}
