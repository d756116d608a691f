//! `Lexis` Configuration Module
//!
//! Provides configuration file support via `lexis.toml`, environment variables,
//! and runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (CLI flags)
//! 2. Environment variables (`LEXIS_*`)
//! 3. Configuration file (`lexis.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Hard ceiling for `search.max_edits_limit`.
///
/// The fuzzy window grows with `2 * max_edits + 1` term lengths; beyond this
/// a `near` query degenerates into a full scan of the vocabulary.
pub const MAX_EDITS_CEILING: usize = 8;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Search configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Edit bound used by `near` when the caller does not give one.
    pub default_max_edits: usize,
    /// Largest edit bound a caller may request.
    pub max_edits_limit: usize,
    /// Maximum results printed per query.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_edits: 1,
            max_edits_limit: 3,
            max_results: 1000,
        }
    }
}

/// Storage configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Index directory path.
    pub data_dir: String,
    /// Read term blocks through a memory map instead of buffered file reads.
    pub use_mmap: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./lexis_data".to_string(),
            use_mmap: true,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace.
    pub level: String,
    /// Log format: text or json.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Main `Lexis` configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexisConfig {
    /// Search configuration.
    pub search: SearchConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl LexisConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("lexis.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("LEXIS_").split("__").lowercase(true));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_edits_limit > MAX_EDITS_CEILING {
            return Err(ConfigError::InvalidValue {
                key: "search.max_edits_limit".to_string(),
                message: format!(
                    "value {} is out of range [0, {MAX_EDITS_CEILING}]",
                    self.search.max_edits_limit
                ),
            });
        }

        if self.search.default_max_edits > self.search.max_edits_limit {
            return Err(ConfigError::InvalidValue {
                key: "search.default_max_edits".to_string(),
                message: format!(
                    "value {} exceeds search.max_edits_limit ({})",
                    self.search.default_max_edits, self.search.max_edits_limit
                ),
            });
        }

        if self.search.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                key: "search.max_results".to_string(),
                message: "value must be at least 1".to_string(),
            });
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.format".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        Ok(())
    }

    /// Resolves the edit bound for a `near` query.
    ///
    /// Uses `requested` when given, otherwise `search.default_max_edits`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bound exceeds `search.max_edits_limit`.
    pub fn effective_max_edits(&self, requested: Option<usize>) -> Result<usize, ConfigError> {
        let edits = requested.unwrap_or(self.search.default_max_edits);
        if edits > self.search.max_edits_limit {
            return Err(ConfigError::InvalidValue {
                key: "search.max_edits_limit".to_string(),
                message: format!(
                    "requested {edits} edits, limit is {}",
                    self.search.max_edits_limit
                ),
            });
        }
        Ok(edits)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
