//! Engine configuration.
//!
//! A JSON file can set the enumeration limits and the operation model used by
//! the scorer; fields that are absent keep their defaults:
//!
//! ```json
//! {
//!   "limits": { "max_total_length": 12, "max_scripts": 100000 },
//!   "model": { "p_match": 0.9, "p_sub": 0.04, "p_del": 0.03, "p_ins": 0.03 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scripts::{EnumerationLimits, OperationModel};
use crate::utils::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub limits: EnumerationLimits,
    pub model: OperationModel,
}

impl EngineConfig {
    /// Load a config from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read, or any error of
    /// [`from_json`](Self::from_json).
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string and validate its operation model
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed JSON, or
    /// `ConfigError::Invalid` if a probability is negative or not finite.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.model.validate()?;
        Ok(config)
    }
}
