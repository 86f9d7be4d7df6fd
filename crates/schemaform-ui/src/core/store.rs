//! App-wide yewdux store slices.
//!
//! # Design
//! - The schema slice is the owning form for the enum editor; it only changes
//!   through settled commits or explicit property toggles.
//! - The table slice records the last search intent handed to the loader.

use crate::features::enum_editor::state::EnumCommit;
use crate::features::search::state::SearchQuery;
use schemaform_model::{DataType, PropertyDraft, SchemaRegistry};
use tracing::debug;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Property under edit plus registry lookups.
    pub schema: SchemaSlice,
    /// Table filter state.
    pub table: TableSlice,
}

/// Owning form state for the property editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaSlice {
    /// Property being edited.
    pub property: PropertyDraft,
    /// Named enum presets.
    pub registry: SchemaRegistry,
    /// Number of settled enum commits applied.
    pub revision: u64,
}

/// Table toolbar state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSlice {
    /// Last search intent received from the search bar.
    pub query: SearchQuery,
}

impl Default for TableSlice {
    fn default() -> Self {
        Self {
            query: SearchQuery::Cleared,
        }
    }
}

/// Write a settled enum commit into the owning property.
pub fn apply_enum_commit(store: &mut AppStore, commit: &EnumCommit) {
    commit.apply_to(&mut store.schema.property);
    store.schema.revision += 1;
    debug!(
        path = %commit.path,
        revision = store.schema.revision,
        "applied enum commit to property"
    );
}

/// Switch the property between single and multi-valued, carrying its enum
/// options to the matching location.
pub fn set_multiselect(store: &mut AppStore, multiselect: bool) {
    let property = &mut store.schema.property;
    if property.is_multiselect() == multiselect {
        return;
    }
    if multiselect {
        let source = property.enum_values.take();
        property.data_type = DataType::Array;
        property.of = Some(Box::new(PropertyDraft::single_select(String::new(), source)));
    } else {
        property.enum_values = property.of.take().and_then(|of| of.enum_values);
        property.data_type = DataType::String;
    }
}

/// Write an editor's flushed draft at its current path, then switch the
/// property between single and multi-valued.
pub fn flush_and_set_multiselect(
    store: &mut AppStore,
    flushed: Option<&EnumCommit>,
    multiselect: bool,
) {
    if let Some(commit) = flushed {
        apply_enum_commit(store, commit);
    }
    set_multiselect(store, multiselect);
}

/// Record the latest search intent.
pub fn apply_search(store: &mut AppStore, query: SearchQuery) {
    store.table.query = query;
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemaform_model::{EnumSource, EnumValueConfig, EnumValuesPath};

    fn store_with(values: Vec<EnumValueConfig>) -> AppStore {
        AppStore {
            schema: SchemaSlice {
                property: PropertyDraft::single_select("status", Some(EnumSource::List(values))),
                ..SchemaSlice::default()
            },
            ..AppStore::default()
        }
    }

    #[test]
    fn commits_replace_field_and_bump_revision() {
        let mut store = store_with(vec![EnumValueConfig::new("a", "A")]);
        let commit = EnumCommit {
            path: EnumValuesPath::Direct,
            values: vec![EnumValueConfig::new("b", "B")],
        };
        apply_enum_commit(&mut store, &commit);
        assert_eq!(store.schema.revision, 1);
        assert_eq!(
            store.schema.property.enum_values,
            Some(EnumSource::List(vec![EnumValueConfig::new("b", "B")]))
        );
    }

    #[test]
    fn multiselect_toggle_moves_enum_source() {
        let values = vec![EnumValueConfig::new("a", "A")];
        let mut store = store_with(values.clone());

        set_multiselect(&mut store, true);
        assert!(store.schema.property.is_multiselect());
        assert!(store.schema.property.enum_values.is_none());
        assert_eq!(
            EnumValuesPath::Nested.get(&store.schema.property),
            Some(&EnumSource::List(values.clone()))
        );

        set_multiselect(&mut store, false);
        assert!(!store.schema.property.is_multiselect());
        assert!(store.schema.property.of.is_none());
        assert_eq!(
            EnumValuesPath::Direct.get(&store.schema.property),
            Some(&EnumSource::List(values))
        );
    }

    #[test]
    fn pending_draft_survives_multiselect_toggle() {
        let mut store = store_with(vec![EnumValueConfig::new("a", "A")]);
        let draft = vec![
            EnumValueConfig::new("a", "A"),
            EnumValueConfig::new("b", "B"),
        ];
        let flushed = EnumCommit {
            path: EnumValuesPath::Direct,
            values: draft.clone(),
        };

        flush_and_set_multiselect(&mut store, Some(&flushed), true);
        assert!(store.schema.property.enum_values.is_none());
        assert_eq!(
            EnumValuesPath::Nested.get(&store.schema.property),
            Some(&EnumSource::List(draft))
        );
        assert_eq!(store.schema.revision, 1);

        flush_and_set_multiselect(&mut store, None, false);
        assert_eq!(store.schema.revision, 1);
        assert!(!store.schema.property.is_multiselect());
    }

    #[test]
    fn search_intent_is_recorded() {
        let mut store = AppStore::default();
        assert_eq!(store.table.query, SearchQuery::Cleared);
        apply_search(&mut store, SearchQuery::Text("foo".to_string()));
        assert_eq!(store.table.query.as_text(), Some("foo"));
    }
}
