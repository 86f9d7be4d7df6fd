//! Range checks applied after loading settings.

use crate::defaults::MAX_DELAY_MS;
use crate::error::{ConfigError, ConfigResult};
use crate::model::FormsConfig;

/// Validate a loaded settings document.
///
/// # Errors
/// Returns [`ConfigError::InvalidField`] when a delay exceeds [`MAX_DELAY_MS`]
/// or the search placeholder is blank.
pub fn validate(config: &FormsConfig) -> ConfigResult<()> {
    check_delay(
        "enum_editor",
        "commit_delay_ms",
        config.enum_editor.commit_delay_ms,
    )?;
    check_delay("search", "debounce_ms", config.search.debounce_ms)?;
    if config.search.placeholder.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            section: "search",
            field: "placeholder",
            value: Some(config.search.placeholder.clone()),
            reason: "must not be blank",
        });
    }
    Ok(())
}

fn check_delay(section: &'static str, field: &'static str, value: u32) -> ConfigResult<()> {
    if value > MAX_DELAY_MS {
        return Err(ConfigError::InvalidField {
            section,
            field,
            value: Some(value.to_string()),
            reason: "exceeds maximum delay",
        });
    }
    Ok(())
}
