//! Property drafts edited by the schema editor and the typed enum path.

use crate::enums::EnumSource;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Stored data type of a property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Free text or single-select string.
    #[default]
    String,
    /// Numeric value or single-select number.
    Number,
    /// Collection; enum options live on the element type (`of`).
    Array,
}

/// Property being edited in the schema editor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    /// Display name of the property.
    #[serde(default)]
    pub name: String,
    /// Stored data type.
    #[serde(default)]
    pub data_type: DataType,
    /// Enum options for single-valued properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<EnumSource>,
    /// Element type for array properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of: Option<Box<PropertyDraft>>,
}

impl PropertyDraft {
    /// Single-valued property with the given enum source.
    #[must_use]
    pub fn single_select(name: impl Into<String>, source: Option<EnumSource>) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::String,
            enum_values: source,
            of: None,
        }
    }

    /// Array property whose string elements carry the enum source.
    #[must_use]
    pub fn multi_select(name: impl Into<String>, source: Option<EnumSource>) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::Array,
            enum_values: None,
            of: Some(Box::new(Self::single_select(String::new(), source))),
        }
    }

    /// Whether the property stores many values.
    #[must_use]
    pub const fn is_multiselect(&self) -> bool {
        matches!(self.data_type, DataType::Array)
    }
}

/// Typed location of the enum options within a [`PropertyDraft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumValuesPath {
    /// `enumValues` on the property itself.
    Direct,
    /// `of.enumValues` on the array element type.
    Nested,
}

impl EnumValuesPath {
    /// Path used by single- or multi-valued editors.
    #[must_use]
    pub const fn for_multiselect(multiselect: bool) -> Self {
        if multiselect {
            Self::Nested
        } else {
            Self::Direct
        }
    }

    /// Dotted form used in logs and error keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "enumValues",
            Self::Nested => "of.enumValues",
        }
    }

    /// Read the enum source at this path.
    #[must_use]
    pub fn get(self, property: &PropertyDraft) -> Option<&EnumSource> {
        match self {
            Self::Direct => property.enum_values.as_ref(),
            Self::Nested => property.of.as_ref()?.enum_values.as_ref(),
        }
    }

    /// Write the enum source at this path, creating the element type if needed.
    pub fn set(self, property: &mut PropertyDraft, source: EnumSource) {
        match self {
            Self::Direct => property.enum_values = Some(source),
            Self::Nested => {
                property
                    .of
                    .get_or_insert_with(|| Box::new(PropertyDraft::default()))
                    .enum_values = Some(source);
            }
        }
    }
}

impl Display for EnumValuesPath {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EnumValueConfig;
    use serde_json::json;

    #[test]
    fn path_follows_multiselect_flag() {
        assert_eq!(EnumValuesPath::for_multiselect(false), EnumValuesPath::Direct);
        assert_eq!(EnumValuesPath::for_multiselect(true), EnumValuesPath::Nested);
        assert_eq!(EnumValuesPath::Nested.to_string(), "of.enumValues");
    }

    #[test]
    fn nested_set_creates_element_type() {
        let mut property = PropertyDraft {
            name: "tags".to_string(),
            data_type: DataType::Array,
            ..PropertyDraft::default()
        };
        assert!(EnumValuesPath::Nested.get(&property).is_none());

        let source = EnumSource::List(vec![EnumValueConfig::new("a", "A")]);
        EnumValuesPath::Nested.set(&mut property, source.clone());
        assert_eq!(EnumValuesPath::Nested.get(&property), Some(&source));
        assert!(EnumValuesPath::Direct.get(&property).is_none());
    }

    #[test]
    fn drafts_use_camel_case_keys() {
        let property: PropertyDraft = serde_json::from_value(json!({
            "name": "Status",
            "dataType": "array",
            "of": { "dataType": "string", "enumValues": "statuses" }
        }))
        .expect("property");
        assert!(property.is_multiselect());
        assert_eq!(
            EnumValuesPath::Nested.get(&property),
            Some(&EnumSource::Preset("statuses".to_string()))
        );
    }
}
