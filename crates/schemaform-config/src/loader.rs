//! Settings loading from JSON documents and environment overrides.
//!
//! # Design
//! - Documents are parsed with defaults, then overrides, then validated once.
//! - Overrides are passed in as key/value pairs so callers decide whether to
//!   read the process environment.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::model::FormsConfig;
use crate::validate::validate;

/// Prefix recognised for environment overrides.
pub const ENV_PREFIX: &str = "SCHEMAFORM_";

/// Parse and validate a settings document.
///
/// # Errors
/// Returns [`ConfigError::Parse`] for malformed JSON and
/// [`ConfigError::InvalidField`] when validation fails.
pub fn load_from_str(raw: &str) -> ConfigResult<FormsConfig> {
    let config: FormsConfig =
        serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
    validate(&config)?;
    Ok(config)
}

/// Load a settings file, apply `SCHEMAFORM_*` overrides from the process
/// environment and validate the result.
///
/// # Errors
/// Returns [`ConfigError::Io`] when the file cannot be read, plus any error
/// from parsing, overrides or validation.
pub fn load_from_path(path: &Path) -> ConfigResult<FormsConfig> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: FormsConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse { source })?;
    let config = apply_overrides(config, std::env::vars())?;
    validate(&config)?;
    info!(path = %path.display(), "loaded editor settings");
    Ok(config)
}

/// Apply recognised overrides; unrelated keys are ignored.
///
/// # Errors
/// Returns [`ConfigError::InvalidOverride`] when a recognised key carries a
/// value that does not parse.
pub fn apply_overrides<I, K, V>(mut config: FormsConfig, vars: I) -> ConfigResult<FormsConfig>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in vars {
        let key = key.as_ref();
        let Some(name) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        let value = value.as_ref();
        match name {
            "ENUM_COMMIT_DELAY_MS" => {
                config.enum_editor.commit_delay_ms = parse_u32(key, value)?;
            }
            "ENUM_UPDATE_IDS" => config.enum_editor.update_ids = parse_bool(key, value)?,
            "SEARCH_DEBOUNCE_MS" => config.search.debounce_ms = parse_u32(key, value)?,
            "SEARCH_PLACEHOLDER" => config.search.placeholder = value.to_string(),
            _ => continue,
        }
        debug!(key, "applied settings override");
    }
    Ok(config)
}

fn parse_u32(key: &str, value: &str) -> ConfigResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid_override(key, value))
}

fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid_override(key, value)),
    }
}

fn invalid_override(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidOverride {
        key: key.to_string(),
        value: value.to_string(),
    }
}
