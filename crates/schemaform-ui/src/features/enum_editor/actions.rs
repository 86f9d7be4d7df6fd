//! Enum editor actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Rows are addressed by their stable key, reordering by position.

use crate::features::enum_editor::state::EntryKey;

/// Edits a user can make to the enum value list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnumEditorAction {
    /// Append an empty entry.
    AddEntry,
    /// Remove an entry.
    RemoveEntry(EntryKey),
    /// Move the entry at `from` to position `to`.
    MoveEntry {
        /// Current position.
        from: usize,
        /// Target position.
        to: usize,
    },
    /// Replace an entry's label.
    EditLabel {
        /// Entry being edited.
        key: EntryKey,
        /// New label text.
        label: String,
    },
    /// Replace an entry's id directly.
    EditId {
        /// Entry being edited.
        key: EntryKey,
        /// New id text.
        id: String,
    },
}
