//! Enum entry validation and id-binding rules.
//!
//! # Design
//! - Validation is advisory: it annotates rows and never blocks edits.
//! - Id problems outrank label problems so the row shows the one that
//!   affects persisted data.

use crate::features::enum_editor::state::IdBinding;
use schemaform_model::{EnumValueConfig, EnumValuesPath};
use std::collections::HashSet;
use thiserror::Error;

/// Advisory problem attached to a single entry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The id is blank.
    #[error("Value id is required")]
    MissingId,
    /// Another, earlier entry already uses this id.
    #[error("Value id '{0}' is already used")]
    DuplicateId(String),
    /// The label is blank.
    #[error("Label is required")]
    MissingLabel,
}

/// Binding for an entry loaded from the owning field.
///
/// Ids that are blank or match the label (ignoring ASCII case) keep following
/// the label; anything else was chosen by hand.
#[must_use]
pub fn initial_binding(entry: &EnumValueConfig) -> IdBinding {
    if entry.id.is_empty() || entry.id.eq_ignore_ascii_case(&entry.label) {
        IdBinding::AutoDerived
    } else {
        IdBinding::ManuallySet
    }
}

/// Which property-level validation panel sits under the value list.
///
/// The panel contents come from the surrounding form; the editor only picks
/// the slot that matches the property shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationPanel {
    /// Rules for a single string value.
    Text,
    /// Rules for an array of values.
    List,
}

impl ValidationPanel {
    /// Panel for the field the editor writes to.
    #[must_use]
    pub const fn for_path(path: EnumValuesPath) -> Self {
        match path {
            EnumValuesPath::Direct => Self::Text,
            EnumValuesPath::Nested => Self::List,
        }
    }

    /// Stable name used as the slot's `data-validation` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::List => "array",
        }
    }
}

/// Validate entries in order; the result is aligned with the input.
#[must_use]
pub fn validate_entries(entries: &[EnumValueConfig]) -> Vec<Option<EntryError>> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .map(|entry| {
            let id = entry.id.trim();
            if id.is_empty() {
                return Some(EntryError::MissingId);
            }
            if !seen.insert(id) {
                return Some(EntryError::DuplicateId(id.to_string()));
            }
            if entry.label.trim().is_empty() {
                return Some(EntryError::MissingLabel);
            }
            None
        })
        .collect()
}
