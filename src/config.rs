//! Configuration Management
//!
//! The provider configuration threaded into every lookup, plus the optional
//! user config file the CLI falls back on.

use crate::bridge::error::LookupError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Provider configuration shared, read-only, by every lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base endpoint of the Bridge API, e.g. `http://localhost:5000/api`
    pub api_url: String,
}

impl ProviderConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Typed config from the host's untyped provider meta.
    ///
    /// The meta must be an object with a string `api_url`. The URL itself is
    /// not validated here.
    pub fn from_meta(meta: &Value) -> Result<Self, LookupError> {
        let Some(object) = meta.as_object() else {
            return Err(LookupError::invalid_input(
                "provider meta must be an object",
            ));
        };

        match object.get("api_url") {
            Some(Value::String(api_url)) => Ok(Self::new(api_url.as_str())),
            Some(other) => Err(LookupError::invalid_input(format!(
                "api_url must be a string, got {}",
                other
            ))),
            None => Err(LookupError::invalid_input("api_url is required")),
        }
    }
}

/// User configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base endpoint used when none is given on the command line
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bridge-lookup").join("config.json"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file (or config dir) yields the default configuration.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Get effective endpoint (CLI/env > config file)
    pub fn effective_api_url(&self, cli: Option<&str>) -> Option<ProviderConfig> {
        cli.filter(|url| !url.is_empty())
            .map(str::to_string)
            .or_else(|| self.api_url.clone().filter(|url| !url.is_empty()))
            .map(ProviderConfig::new)
    }
}
