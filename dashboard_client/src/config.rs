//! Client configuration: where the dashboard backend lives.
//!
//! Loaded from a small TOML file (see `configs/dashboard.toml`) or from the
//! `DASHBOARD_API_URL` environment variable. Nothing else is configurable:
//! the client carries no credentials, no timeouts and no retry policy.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::providers::dashboard_rest::provider::BASE_URL_VAR;

/// Errors related to client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`ClientConfig`].
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Parsed `dashboard.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the dashboard backend, e.g. `http://localhost:5000`.
    pub base_url: String,
}

impl ClientConfig {
    /// Reads and parses a TOML config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Builds a config from the `DASHBOARD_API_URL` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_VAR)
            .map_err(|_| ConfigError::MissingEnvVar(BASE_URL_VAR.to_string()))?;
        Ok(Self { base_url })
    }
}
