//! Default timings and copy for the editors.
//!
//! # Design
//! - The enum commit delay covers the whole edit-to-commit path (entry list
//!   debounce plus field commit debounce) in a single stage.

/// Quiet period before enum edits are committed to the owning field.
pub const DEFAULT_ENUM_COMMIT_DELAY_MS: u32 = 164;
/// Quiet period before search text is handed to the table.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 250;
/// Placeholder shown in the empty search input.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search";
/// Upper bound accepted for any debounce delay.
pub const MAX_DELAY_MS: u32 = 10_000;
