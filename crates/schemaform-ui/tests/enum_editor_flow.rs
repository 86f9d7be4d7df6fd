//! End-to-end enum editing against the store with a manual clock.

use schemaform_config::EnumEditorSettings;
use schemaform_model::{EnumSource, EnumValueConfig, EnumValuesPath, resolve_enum_values};
use schemaform_test_support::fixtures::{
    ManualClock, init_test_logging, multi_select_property, sample_registry, sample_values,
    single_select_property,
};
use schemaform_test_support::mocks::RecordingSink;
use schemaform_ui::core::store::{AppStore, SchemaSlice, apply_enum_commit};
use schemaform_ui::features::enum_editor::actions::EnumEditorAction;
use schemaform_ui::features::enum_editor::logic::EntryError;
use schemaform_ui::features::enum_editor::state::{EnumCommit, EnumEditorState, IdBinding};

const DELAY: u64 = 164;

fn store_with(values: Vec<EnumValueConfig>) -> AppStore {
    AppStore {
        schema: SchemaSlice {
            property: single_select_property(values),
            registry: sample_registry(),
            revision: 0,
        },
        ..AppStore::default()
    }
}

fn editor_for(store: &AppStore) -> EnumEditorState {
    EnumEditorState::from_property(
        &store.schema.property,
        &store.schema.registry,
        &EnumEditorSettings::default(),
    )
}

fn stored_values(store: &AppStore) -> Vec<EnumValueConfig> {
    let path = EnumValuesPath::for_multiselect(store.schema.property.is_multiselect());
    resolve_enum_values(path.get(&store.schema.property), &store.schema.registry)
}

fn settle(editor: &mut EnumEditorState, store: &mut AppStore, clock: &mut ManualClock) {
    if let Some(commit) = editor.poll(clock.advance(DELAY)) {
        apply_enum_commit(store, &commit);
    }
}

#[test]
fn label_then_id_then_label_scenario() {
    init_test_logging();
    let mut clock = ManualClock::default();
    let mut store = store_with(vec![EnumValueConfig::new("a", "A")]);
    let mut editor = editor_for(&store);
    let key = editor.entries()[0].key;
    assert_eq!(editor.entries()[0].binding, IdBinding::AutoDerived);

    editor.apply(
        EnumEditorAction::EditLabel {
            key,
            label: "Alpha".into(),
        },
        clock.now(),
    );
    assert_eq!(stored_values(&store), vec![EnumValueConfig::new("a", "A")]);
    settle(&mut editor, &mut store, &mut clock);
    assert_eq!(stored_values(&store), vec![EnumValueConfig::new("Alpha", "Alpha")]);

    editor.apply(
        EnumEditorAction::EditId {
            key,
            id: "ALPHA_CODE".into(),
        },
        clock.now(),
    );
    settle(&mut editor, &mut store, &mut clock);
    assert_eq!(
        stored_values(&store),
        vec![EnumValueConfig::new("ALPHA_CODE", "Alpha")]
    );

    editor.apply(
        EnumEditorAction::EditLabel {
            key,
            label: "Alpha2".into(),
        },
        clock.now(),
    );
    settle(&mut editor, &mut store, &mut clock);
    assert_eq!(
        stored_values(&store),
        vec![EnumValueConfig::new("ALPHA_CODE", "Alpha2")]
    );
    assert_eq!(store.schema.revision, 3);
}

#[test]
fn ids_follow_labels_without_direct_edits() {
    let mut clock = ManualClock::default();
    let mut store = store_with(sample_values());
    let mut editor = editor_for(&store);

    editor.apply(EnumEditorAction::AddEntry, clock.now());
    let added = editor.entries()[3].key;
    for label in ["C", "Cr", "Critical"] {
        editor.apply(
            EnumEditorAction::EditLabel {
                key: added,
                label: label.into(),
            },
            clock.advance(10),
        );
    }
    let first = editor.entries()[0].key;
    editor.apply(
        EnumEditorAction::EditLabel {
            key: first,
            label: "Lowest".into(),
        },
        clock.advance(10),
    );
    editor.apply(EnumEditorAction::MoveEntry { from: 3, to: 0 }, clock.advance(10));
    settle(&mut editor, &mut store, &mut clock);

    let values = stored_values(&store);
    assert_eq!(values.len(), 4);
    assert!(values.iter().all(|value| value.id == value.label));
    assert_eq!(values[0].label, "Critical");
    assert_eq!(values[1].label, "Lowest");
}

#[test]
fn rapid_changes_produce_one_commit_with_the_final_list() {
    let mut clock = ManualClock::default();
    let store = store_with(Vec::new());
    let mut editor = editor_for(&store);
    let commits: RecordingSink<EnumCommit> = RecordingSink::new();
    let record = commits.callback();

    editor.apply(EnumEditorAction::AddEntry, clock.now());
    let key = editor.entries()[0].key;
    let mut label = String::new();
    for ch in "Pending".chars() {
        label.push(ch);
        editor.apply(
            EnumEditorAction::EditLabel {
                key,
                label: label.clone(),
            },
            clock.advance(DELAY - 1),
        );
        if let Some(commit) = editor.poll(clock.now()) {
            record(commit);
        }
    }
    assert!(commits.is_empty());

    if let Some(commit) = editor.poll(clock.advance(DELAY)) {
        record(commit);
    }
    assert_eq!(commits.len(), 1);
    assert_eq!(
        commits.last().map(|commit| commit.values),
        Some(vec![EnumValueConfig::new("Pending", "Pending")])
    );
}

#[test]
fn stale_timer_tickets_do_not_commit() {
    let mut clock = ManualClock::default();
    let store = store_with(sample_values());
    let mut editor = editor_for(&store);
    let key = editor.entries()[1].key;

    let first = editor.apply(
        EnumEditorAction::EditLabel {
            key,
            label: "Mid".into(),
        },
        clock.now(),
    );
    let second = editor.apply(
        EnumEditorAction::EditLabel {
            key,
            label: "Middle".into(),
        },
        clock.advance(20),
    );
    assert!(first.and_then(|ticket| editor.fire(ticket)).is_none());
    let commit = second.and_then(|ticket| editor.fire(ticket));
    assert_eq!(
        commit.map(|commit| commit.values[1].clone()),
        Some(EnumValueConfig::new("Middle", "Middle"))
    );
}

#[test]
fn multiselect_commits_land_on_the_element_type() {
    let mut clock = ManualClock::default();
    let mut store = AppStore {
        schema: SchemaSlice {
            property: multi_select_property(sample_values()),
            ..SchemaSlice::default()
        },
        ..AppStore::default()
    };
    let mut editor = editor_for(&store);
    assert_eq!(editor.path(), EnumValuesPath::Nested);

    let key = editor.entries()[2].key;
    editor.apply(EnumEditorAction::RemoveEntry(key), clock.now());
    settle(&mut editor, &mut store, &mut clock);

    assert!(store.schema.property.enum_values.is_none());
    assert_eq!(
        EnumValuesPath::Nested.get(&store.schema.property),
        Some(&EnumSource::List(sample_values()[..2].to_vec()))
    );
}

#[test]
fn validation_is_advisory_and_edits_still_commit() {
    let mut clock = ManualClock::default();
    let mut store = store_with(sample_values());
    let mut editor = editor_for(&store);
    let key = editor.entries()[1].key;

    editor.apply(
        EnumEditorAction::EditId {
            key,
            id: "Low".into(),
        },
        clock.now(),
    );
    assert_eq!(
        editor.entry_error(key),
        Some(EntryError::DuplicateId("Low".into()))
    );
    settle(&mut editor, &mut store, &mut clock);
    assert_eq!(stored_values(&store)[1].id, "Low");
}

#[test]
fn preset_sources_are_rewritten_as_literal_lists() {
    let mut clock = ManualClock::default();
    let mut store = AppStore {
        schema: SchemaSlice {
            property: schemaform_model::PropertyDraft::single_select(
                "priority",
                Some(EnumSource::Preset(
                    schemaform_test_support::fixtures::PRIORITY_PRESET.into(),
                )),
            ),
            registry: sample_registry(),
            revision: 0,
        },
        ..AppStore::default()
    };
    let mut editor = editor_for(&store);
    assert_eq!(editor.values(), sample_values());

    editor.apply(EnumEditorAction::AddEntry, clock.now());
    settle(&mut editor, &mut store, &mut clock);

    let mut expected = sample_values();
    expected.push(EnumValueConfig::default());
    assert_eq!(
        store.schema.property.enum_values,
        Some(EnumSource::List(expected))
    );
}
