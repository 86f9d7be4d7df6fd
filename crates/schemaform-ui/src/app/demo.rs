//! Seed data shown when the editor runs standalone.

use crate::core::store::{AppStore, SchemaSlice};
use schemaform_model::{EnumSource, EnumValueConfig, PropertyDraft, SchemaRegistry};

pub(crate) const STATUS_PRESET: &str = "status";

pub(crate) fn demo_registry() -> SchemaRegistry {
    SchemaRegistry::new().with_preset(
        STATUS_PRESET,
        vec![
            EnumValueConfig::new("todo", "Todo").with_color("gray"),
            EnumValueConfig::new("doing", "Doing").with_color("blue"),
            EnumValueConfig::new("done", "Done").with_color("green"),
        ],
    )
}

pub(crate) fn demo_store() -> AppStore {
    AppStore {
        schema: SchemaSlice {
            property: PropertyDraft::single_select(
                "status",
                Some(EnumSource::Preset(STATUS_PRESET.to_string())),
            ),
            registry: demo_registry(),
            revision: 0,
        },
        ..AppStore::default()
    }
}
