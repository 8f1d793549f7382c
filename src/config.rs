//! File-based configuration.
//!
//! The binary reads its reseed policy, generator settings, and output
//! behavior from a TOML file; command-line flags override individual
//! fields.

use crate::generator::MixAlgorithm;
use crate::source::{PolicyError, ReseedPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub policy: ReseedPolicy,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Hash algorithm for seed mixing.
    #[serde(default)]
    pub mix: MixAlgorithm,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Stream continuously (true) or emit a fixed number of bytes (false).
    pub continuous: bool,
    /// Number of bytes to emit if not continuous.
    pub byte_count: usize,
    /// Write raw bytes instead of hex.
    pub raw: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            continuous: false,
            byte_count: 32,
            raw: false,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.policy.validate()?;
        Ok(config)
    }
}
