//! Error types for loading and validating editor settings.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}' in '{section}': {reason}")]
    InvalidField {
        /// Section that failed validation.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Environment override could not be parsed.
    #[error("invalid environment override '{key}'")]
    InvalidOverride {
        /// Environment variable name.
        key: String,
        /// Raw value supplied.
        value: String,
    },
    /// Settings document was not valid JSON for the model.
    #[error("malformed settings document")]
    Parse {
        /// Source JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Settings file could not be read.
    #[error("failed to read settings file {path}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Source IO error.
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Section name for field-level failures.
    #[must_use]
    pub const fn section(&self) -> Option<&'static str> {
        match self {
            Self::InvalidField { section, .. } => Some(section),
            Self::InvalidOverride { .. } | Self::Parse { .. } | Self::Io { .. } => None,
        }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
