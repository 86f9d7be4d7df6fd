//! Named enum presets and resolution of stored enum sources.

use crate::enums::{EnumMapValue, EnumSource, EnumValueConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registry of reusable enum presets shared across collections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaRegistry {
    #[serde(default)]
    enum_configs: BTreeMap<String, Vec<EnumValueConfig>>,
}

impl SchemaRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style preset registration.
    #[must_use]
    pub fn with_preset(mut self, name: impl Into<String>, values: Vec<EnumValueConfig>) -> Self {
        self.insert_preset(name, values);
        self
    }

    /// Register or replace a preset.
    pub fn insert_preset(&mut self, name: impl Into<String>, values: Vec<EnumValueConfig>) {
        self.enum_configs.insert(name.into(), values);
    }

    /// Look up a preset by name.
    #[must_use]
    pub fn enum_preset(&self, name: &str) -> Option<&[EnumValueConfig]> {
        self.enum_configs.get(name).map(Vec::as_slice)
    }
}

/// Resolve whatever a property stores into an ordered option list.
///
/// Missing sources, flags and unknown presets resolve to an empty list.
#[must_use]
pub fn resolve_enum_values(
    source: Option<&EnumSource>,
    registry: &SchemaRegistry,
) -> Vec<EnumValueConfig> {
    match source {
        None | Some(EnumSource::Flag(_)) => Vec::new(),
        Some(EnumSource::Preset(name)) => registry
            .enum_preset(name)
            .map(<[EnumValueConfig]>::to_vec)
            .unwrap_or_default(),
        Some(EnumSource::List(values)) => values.clone(),
        Some(EnumSource::Map(entries)) => entries
            .iter()
            .map(|(id, value)| match value {
                EnumMapValue::Label(label) => EnumValueConfig::new(id.clone(), label.clone()),
                EnumMapValue::Meta(meta) => EnumValueConfig {
                    id: id.clone(),
                    label: meta.label.clone(),
                    color: meta.color.clone(),
                    disabled: meta.disabled,
                },
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EnumValueMeta;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new().with_preset(
            "priority",
            vec![
                EnumValueConfig::new("low", "Low"),
                EnumValueConfig::new("high", "High"),
            ],
        )
    }

    #[test]
    fn flags_and_missing_sources_are_empty() {
        let registry = registry();
        assert!(resolve_enum_values(None, &registry).is_empty());
        assert!(resolve_enum_values(Some(&EnumSource::Flag(false)), &registry).is_empty());
        assert!(resolve_enum_values(Some(&EnumSource::Flag(true)), &registry).is_empty());
    }

    #[test]
    fn presets_resolve_through_registry() {
        let registry = registry();
        let values =
            resolve_enum_values(Some(&EnumSource::Preset("priority".to_string())), &registry);
        assert_eq!(values.len(), 2);
        assert_eq!(values[1].id, "high");

        let missing =
            resolve_enum_values(Some(&EnumSource::Preset("unknown".to_string())), &registry);
        assert!(missing.is_empty());
    }

    #[test]
    fn map_sources_resolve_in_key_order() {
        let mut entries = BTreeMap::new();
        entries.insert("z".to_string(), EnumMapValue::Label("Zed".to_string()));
        entries.insert(
            "a".to_string(),
            EnumMapValue::Meta(EnumValueMeta {
                label: "Ay".to_string(),
                color: Some("green".to_string()),
                disabled: true,
            }),
        );
        let values = resolve_enum_values(Some(&EnumSource::Map(entries)), &SchemaRegistry::new());
        assert_eq!(values[0].id, "a");
        assert_eq!(values[0].color.as_deref(), Some("green"));
        assert!(values[0].disabled);
        assert_eq!(values[1], EnumValueConfig::new("z", "Zed"));
    }
}
