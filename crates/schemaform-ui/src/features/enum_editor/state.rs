//! Enum value editor state.
//!
//! # Design
//! - The working draft is what the rows render; the committed list is what the
//!   owning field last received.
//! - Every draft change restarts one commit stage. On settle the draft is
//!   compared with the committed list and only a real difference produces an
//!   [`EnumCommit`].
//! - Whether an id still follows its label is explicit per-entry state, not
//!   inferred from previous values.

use crate::core::debounce::{DebounceTicket, Debounced};
use crate::features::enum_editor::actions::EnumEditorAction;
use crate::features::enum_editor::logic::{EntryError, initial_binding, validate_entries};
use schemaform_config::EnumEditorSettings;
use schemaform_model::{
    EnumSource, EnumValueConfig, EnumValuesPath, PropertyDraft, SchemaRegistry,
    resolve_enum_values,
};
use tracing::debug;

/// Whether an entry's id follows its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdBinding {
    /// Label edits overwrite the id.
    AutoDerived,
    /// The id was edited directly; label edits leave it alone.
    ManuallySet,
}

/// Stable row identity, independent of position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey(u64);

impl EntryKey {
    /// Raw key value, used for keyed rendering.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// One row of the working draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumEntryDraft {
    /// Stable row identity.
    pub key: EntryKey,
    /// Current option values.
    pub value: EnumValueConfig,
    /// Id/label coupling for this row.
    pub binding: IdBinding,
}

impl EnumEntryDraft {
    fn set_label(&mut self, label: String, update_ids: bool) {
        if update_ids && self.binding == IdBinding::AutoDerived {
            self.value.id.clone_from(&label);
        }
        self.value.label = label;
    }

    fn set_id(&mut self, id: String) {
        self.value.id = id;
        self.binding = IdBinding::ManuallySet;
    }
}

/// Write produced when the draft settles with a real change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumCommit {
    /// Field receiving the values.
    pub path: EnumValuesPath,
    /// Ordered values to store.
    pub values: Vec<EnumValueConfig>,
}

impl EnumCommit {
    /// Store the values on the owning property as a literal list.
    pub fn apply_to(&self, property: &mut PropertyDraft) {
        self.path.set(property, EnumSource::from(self.values.clone()));
    }
}

/// Editing state for one property's enum values.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumEditorState {
    path: EnumValuesPath,
    update_ids: bool,
    entries: Vec<EnumEntryDraft>,
    next_key: u64,
    committed: Vec<EnumValueConfig>,
    pipeline: Debounced<Vec<EnumValueConfig>>,
}

impl EnumEditorState {
    /// Start editing `initial`, which is also treated as already committed.
    #[must_use]
    pub fn new(
        path: EnumValuesPath,
        initial: Vec<EnumValueConfig>,
        settings: &EnumEditorSettings,
    ) -> Self {
        let mut state = Self {
            path,
            update_ids: settings.update_ids,
            entries: Vec::with_capacity(initial.len()),
            next_key: 0,
            committed: initial.clone(),
            pipeline: Debounced::new(settings.commit_delay_ms),
        };
        for value in initial {
            let binding = initial_binding(&value);
            let key = state.allocate_key();
            state.entries.push(EnumEntryDraft {
                key,
                value,
                binding,
            });
        }
        state
    }

    /// Read the owning property's enum field and start editing it.
    #[must_use]
    pub fn from_property(
        property: &PropertyDraft,
        registry: &SchemaRegistry,
        settings: &EnumEditorSettings,
    ) -> Self {
        let path = EnumValuesPath::for_multiselect(property.is_multiselect());
        let initial = resolve_enum_values(path.get(property), registry);
        Self::new(path, initial, settings)
    }

    /// Field this editor writes to.
    #[must_use]
    pub const fn path(&self) -> EnumValuesPath {
        self.path
    }

    /// Whether label edits may rewrite ids.
    #[must_use]
    pub const fn update_ids(&self) -> bool {
        self.update_ids
    }

    /// Rows of the working draft.
    #[must_use]
    pub fn entries(&self) -> &[EnumEntryDraft] {
        &self.entries
    }

    /// Look up a row by key.
    #[must_use]
    pub fn entry(&self, key: EntryKey) -> Option<&EnumEntryDraft> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Current draft values in display order.
    #[must_use]
    pub fn values(&self) -> Vec<EnumValueConfig> {
        self.entries.iter().map(|entry| entry.value.clone()).collect()
    }

    /// Values the owning field last received.
    #[must_use]
    pub fn committed(&self) -> &[EnumValueConfig] {
        &self.committed
    }

    /// Whether no commit is waiting on the quiet period.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !self.pipeline.is_pending()
    }

    /// Quiet period of the commit stage.
    #[must_use]
    pub const fn commit_delay_ms(&self) -> u32 {
        self.pipeline.delay_ms()
    }

    /// Apply a user edit and restart the commit stage.
    ///
    /// Returns `None` when the action referenced a missing row or an
    /// out-of-range position and nothing changed.
    pub fn apply(&mut self, action: EnumEditorAction, now_ms: u64) -> Option<DebounceTicket> {
        match action {
            EnumEditorAction::AddEntry => {
                let key = self.allocate_key();
                self.entries.push(EnumEntryDraft {
                    key,
                    value: EnumValueConfig::default(),
                    binding: IdBinding::AutoDerived,
                });
            }
            EnumEditorAction::RemoveEntry(key) => {
                let index = self.index_of(key)?;
                self.entries.remove(index);
            }
            EnumEditorAction::MoveEntry { from, to } => {
                if from >= self.entries.len() || to >= self.entries.len() {
                    return None;
                }
                let entry = self.entries.remove(from);
                self.entries.insert(to, entry);
            }
            EnumEditorAction::EditLabel { key, label } => {
                let update_ids = self.update_ids;
                self.entry_mut(key)?.set_label(label, update_ids);
            }
            EnumEditorAction::EditId { key, id } => {
                self.entry_mut(key)?.set_id(id);
            }
        }
        let ticket = self.pipeline.schedule(self.values(), now_ms);
        debug!(
            path = %self.path,
            entries = self.entries.len(),
            delay_ms = self.pipeline.delay_ms(),
            "scheduled enum commit"
        );
        Some(ticket)
    }

    /// Settle the commit stage once its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<EnumCommit> {
        let values = self.pipeline.poll(now_ms)?;
        self.settle(values)
    }

    /// Settle the commit stage from a timer carrying `ticket`.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<EnumCommit> {
        let values = self.pipeline.fire(ticket)?;
        self.settle(values)
    }

    /// Settle the commit stage now, ignoring the remaining quiet period.
    ///
    /// Used before the owning property changes shape so an in-flight edit is
    /// not lost when the editor is rebuilt.
    pub fn flush(&mut self) -> Option<EnumCommit> {
        let values = self.pipeline.cancel()?;
        self.settle(values)
    }

    /// Drop any pending commit, e.g. when the editor unmounts.
    pub fn cancel_pending(&mut self) {
        if self.pipeline.cancel().is_some() {
            debug!(path = %self.path, "discarded pending enum commit");
        }
    }

    /// Advisory error for a row.
    #[must_use]
    pub fn entry_error(&self, key: EntryKey) -> Option<EntryError> {
        let index = self.index_of(key)?;
        validate_entries(&self.values()).swap_remove(index)
    }

    /// Advisory errors aligned with [`Self::entries`].
    #[must_use]
    pub fn errors(&self) -> Vec<Option<EntryError>> {
        validate_entries(&self.values())
    }

    fn settle(&mut self, values: Vec<EnumValueConfig>) -> Option<EnumCommit> {
        if values == self.committed {
            debug!(path = %self.path, "enum values unchanged; skipped commit");
            return None;
        }
        self.committed.clone_from(&values);
        debug!(path = %self.path, entries = values.len(), "committed enum values");
        Some(EnumCommit {
            path: self.path,
            values,
        })
    }

    fn allocate_key(&mut self) -> EntryKey {
        self.next_key += 1;
        EntryKey(self.next_key)
    }

    fn index_of(&self, key: EntryKey) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    fn entry_mut(&mut self, key: EntryKey) -> Option<&mut EnumEntryDraft> {
        self.entries.iter_mut().find(|entry| entry.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> EnumEditorSettings {
        EnumEditorSettings {
            commit_delay_ms: 100,
            update_ids: true,
        }
    }

    fn editor(values: Vec<EnumValueConfig>) -> EnumEditorState {
        EnumEditorState::new(EnumValuesPath::Direct, values, &settings())
    }

    fn first_key(state: &EnumEditorState) -> EntryKey {
        state.entries()[0].key
    }

    #[test]
    fn label_edits_drive_auto_derived_ids() {
        let mut state = editor(vec![EnumValueConfig::new("a", "A")]);
        let key = first_key(&state);
        state.apply(
            EnumEditorAction::EditLabel {
                key,
                label: "Alpha".to_string(),
            },
            0,
        );
        assert_eq!(state.entries()[0].value, EnumValueConfig::new("Alpha", "Alpha"));
    }

    #[test]
    fn manual_ids_stop_following_labels() {
        let mut state = editor(vec![EnumValueConfig::new("Alpha", "Alpha")]);
        let key = first_key(&state);
        state.apply(
            EnumEditorAction::EditId {
                key,
                id: "ALPHA_CODE".to_string(),
            },
            0,
        );
        state.apply(
            EnumEditorAction::EditLabel {
                key,
                label: "Alpha2".to_string(),
            },
            10,
        );
        let entry = state.entry(key).expect("entry");
        assert_eq!(entry.binding, IdBinding::ManuallySet);
        assert_eq!(entry.value, EnumValueConfig::new("ALPHA_CODE", "Alpha2"));
    }

    #[test]
    fn manual_ids_stay_manual_after_matching_label_again() {
        let mut state = editor(vec![EnumValueConfig::new("Beta", "Beta")]);
        let key = first_key(&state);
        state.apply(
            EnumEditorAction::EditId {
                key,
                id: "beta_code".to_string(),
            },
            0,
        );
        state.apply(
            EnumEditorAction::EditId {
                key,
                id: "Beta".to_string(),
            },
            5,
        );
        state.apply(
            EnumEditorAction::EditLabel {
                key,
                label: "Gamma".to_string(),
            },
            10,
        );
        let entry = state.entry(key).expect("entry");
        assert_eq!(entry.binding, IdBinding::ManuallySet);
        assert_eq!(entry.value, EnumValueConfig::new("Beta", "Gamma"));
    }

    #[test]
    fn disabled_id_updates_leave_ids_alone() {
        let mut state = EnumEditorState::new(
            EnumValuesPath::Direct,
            vec![EnumValueConfig::new("a", "a")],
            &EnumEditorSettings {
                commit_delay_ms: 10,
                update_ids: false,
            },
        );
        let key = first_key(&state);
        state.apply(
            EnumEditorAction::EditLabel {
                key,
                label: "b".to_string(),
            },
            0,
        );
        assert_eq!(state.entries()[0].value, EnumValueConfig::new("a", "b"));
    }

    #[test]
    fn commit_waits_for_quiet_period() {
        let mut state = editor(vec![EnumValueConfig::new("a", "a")]);
        state.apply(EnumEditorAction::AddEntry, 0);
        assert!(state.poll(99).is_none());
        assert_eq!(state.committed().len(), 1);
        let commit = state.poll(100).expect("commit");
        assert_eq!(commit.path, EnumValuesPath::Direct);
        assert_eq!(commit.values.len(), 2);
        assert!(state.is_settled());
    }

    #[test]
    fn unchanged_drafts_do_not_commit() {
        let mut state = editor(vec![
            EnumValueConfig::new("a", "a"),
            EnumValueConfig::new("b", "b"),
        ]);
        state.apply(EnumEditorAction::MoveEntry { from: 0, to: 1 }, 0);
        state.apply(EnumEditorAction::MoveEntry { from: 1, to: 0 }, 10);
        assert!(state.poll(500).is_none());
        assert!(state.is_settled());
    }

    #[test]
    fn unknown_keys_and_positions_are_ignored() {
        let mut state = editor(vec![EnumValueConfig::new("a", "a")]);
        let key = first_key(&state);
        state.apply(EnumEditorAction::RemoveEntry(key), 0);
        assert!(state.apply(EnumEditorAction::RemoveEntry(key), 5).is_none());
        assert!(
            state
                .apply(EnumEditorAction::MoveEntry { from: 0, to: 3 }, 5)
                .is_none()
        );
        assert!(state.entries().is_empty());
    }

    #[test]
    fn stale_timer_ticket_does_not_commit() {
        let mut state = editor(Vec::new());
        let first = state.apply(EnumEditorAction::AddEntry, 0).expect("ticket");
        let second = state.apply(EnumEditorAction::AddEntry, 20).expect("ticket");
        assert!(state.fire(first).is_none());
        let commit = state.fire(second).expect("commit");
        assert_eq!(commit.values.len(), 2);
    }

    #[test]
    fn cancel_discards_pending_commit() {
        let mut state = editor(Vec::new());
        state.apply(EnumEditorAction::AddEntry, 0);
        state.cancel_pending();
        assert!(state.poll(1_000).is_none());
        assert!(state.committed().is_empty());
    }

    #[test]
    fn flush_settles_before_the_deadline() {
        let mut state = editor(vec![EnumValueConfig::new("a", "a")]);
        state.apply(EnumEditorAction::AddEntry, 0);
        let commit = state.flush().expect("commit");
        assert_eq!(commit.values.len(), 2);
        assert!(state.is_settled());
        assert!(state.flush().is_none());
        assert!(state.poll(1_000).is_none());
    }

    #[test]
    fn new_rows_are_flagged_until_filled() {
        let mut state = editor(Vec::new());
        state.apply(EnumEditorAction::AddEntry, 0);
        let key = first_key(&state);
        assert_eq!(state.entry_error(key), Some(EntryError::MissingId));
        state.apply(
            EnumEditorAction::EditLabel {
                key,
                label: "Open".to_string(),
            },
            1,
        );
        assert_eq!(state.entry_error(key), None);
        assert_eq!(state.errors(), vec![None]);
    }

    #[test]
    fn nested_path_commit_lands_on_element_type() {
        let property = PropertyDraft::multi_select(
            "tags",
            Some(EnumSource::Preset("colors".to_string())),
        );
        let registry = SchemaRegistry::new()
            .with_preset("colors", vec![EnumValueConfig::new("red", "Red")]);
        let mut state = EnumEditorState::from_property(&property, &registry, &settings());
        assert_eq!(state.path(), EnumValuesPath::Nested);
        assert_eq!(state.values(), vec![EnumValueConfig::new("red", "Red")]);

        state.apply(EnumEditorAction::AddEntry, 0);
        let commit = state.poll(100).expect("commit");
        let mut property = property;
        commit.apply_to(&mut property);
        let Some(EnumSource::List(values)) = EnumValuesPath::Nested.get(&property) else {
            panic!("expected literal list");
        };
        assert_eq!(values.len(), 2);
    }
}
