//! Typed settings for the enum editor and the search bar.
//!
//! # Design
//! - Every field has a default so partial documents load cleanly.
//! - Pure data; loading and validation live in sibling modules.

use serde::{Deserialize, Serialize};

use crate::defaults::{
    DEFAULT_ENUM_COMMIT_DELAY_MS, DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_SEARCH_PLACEHOLDER,
};

/// Root settings document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Enum value editor settings.
    pub enum_editor: EnumEditorSettings,
    /// Table search bar settings.
    pub search: SearchSettings,
}

/// Enum value editor settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumEditorSettings {
    /// Quiet period before edits reach the owning field, in milliseconds.
    pub commit_delay_ms: u32,
    /// Whether ids follow label edits until set by hand.
    pub update_ids: bool,
}

impl Default for EnumEditorSettings {
    fn default() -> Self {
        Self {
            commit_delay_ms: DEFAULT_ENUM_COMMIT_DELAY_MS,
            update_ids: true,
        }
    }
}

/// Table search bar settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiet period before the search callback fires, in milliseconds.
    pub debounce_ms: u32,
    /// Placeholder for the empty input.
    pub placeholder: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

impl SearchSettings {
    /// Placeholder configured by the host, or `None` when it is still the
    /// built-in default and the translated text should be used instead.
    #[must_use]
    pub fn placeholder_override(&self) -> Option<&str> {
        (self.placeholder != DEFAULT_SEARCH_PLACEHOLDER).then_some(self.placeholder.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_timings() {
        let config = FormsConfig::default();
        assert_eq!(config.enum_editor.commit_delay_ms, 164);
        assert!(config.enum_editor.update_ids);
        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.search.placeholder, "Search");
    }

    #[test]
    fn partial_documents_keep_defaults() {
        let config: FormsConfig =
            serde_json::from_str(r#"{ "search": { "debounce_ms": 400 } }"#).expect("config");
        assert_eq!(config.search.debounce_ms, 400);
        assert_eq!(config.search.placeholder, "Search");
        assert_eq!(config.enum_editor, EnumEditorSettings::default());
    }

    #[test]
    fn default_placeholder_defers_to_translations() {
        let mut search = SearchSettings::default();
        assert_eq!(search.placeholder_override(), None);

        search.placeholder = "Filter records".to_string();
        assert_eq!(search.placeholder_override(), Some("Filter records"));
    }
}
