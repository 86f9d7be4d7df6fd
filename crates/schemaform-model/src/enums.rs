//! Enum value configuration and the shapes a property's enum field can take.
//!
//! # Design
//! - Ids are always carried as strings; numeric ids from stored schemas are
//!   normalised on deserialisation.
//! - `EnumSource` mirrors every shape a stored schema may contain so resolving
//!   happens in one place (see [`crate::registry`]).

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One enumerated option: the persisted id plus its display label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueConfig {
    /// Value written to the data source.
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    /// User-facing label.
    pub label: String,
    /// Optional chip colour key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the option is hidden from new selections.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl EnumValueConfig {
    /// Build a config with matching id and label.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: None,
            disabled: false,
        }
    }

    /// Attach a colour key.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Metadata accepted for keyed (map-shaped) enum sources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueMeta {
    /// User-facing label.
    pub label: String,
    /// Optional chip colour key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the option is hidden from new selections.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

/// Value side of a map-shaped enum source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumMapValue {
    /// Bare label string.
    Label(String),
    /// Label with metadata.
    Meta(EnumValueMeta),
}

/// Stored value of a property's `enumValues` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumSource {
    /// Boolean flag; `false` disables the enum, `true` carries no values.
    Flag(bool),
    /// Reference to a named preset in the schema registry.
    Preset(String),
    /// Literal ordered list of options.
    List(Vec<EnumValueConfig>),
    /// Options keyed by id, resolved in key order.
    Map(BTreeMap<String, EnumMapValue>),
}

impl From<Vec<EnumValueConfig>> for EnumSource {
    fn from(values: Vec<EnumValueConfig>) -> Self {
        Self::List(values)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Int(value) => value.to_string(),
    })
}
