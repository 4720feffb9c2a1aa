//! Run configuration: how much of the input the report echoes and how
//! strictly conversion factors are compared.
//!
//! ```toml
//! detail = "full"
//! tolerance = 1e-12
//! ```
use crate::algebra::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Whether report sections carry the input records next to their diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputDetail {
    /// Echo every record of every collection.
    Full,
    /// Diagnostics only.
    #[default]
    Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub detail: OutputDetail,
    pub tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { detail: OutputDetail::default(), tolerance: DEFAULT_TOLERANCE }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format '{}', expected .toml or .json", path.display())]
    UnknownFormat { path: PathBuf },
    #[error("tolerance must be a finite non-negative number, got {0}")]
    InvalidTolerance(f64),
}

impl ValidationConfig {
    pub fn full() -> Self {
        Self { detail: OutputDetail::Full, ..Self::default() }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(content)?.checked()
    }

    /// Loads a `.toml` or `.json` config file, chosen by extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => serde_json::from_str::<Self>(&content)?.checked(),
            _ => Err(ConfigError::UnknownFormat { path: path.to_path_buf() }),
        }
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if self.tolerance.is_finite() && self.tolerance >= 0.0 {
            Ok(self)
        } else {
            Err(ConfigError::InvalidTolerance(self.tolerance))
        }
    }
}
