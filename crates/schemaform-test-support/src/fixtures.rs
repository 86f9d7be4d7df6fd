//! Sample enum data, a manual millisecond clock and test logging.

use std::sync::Once;

use schemaform_model::{EnumSource, EnumValueConfig, PropertyDraft, SchemaRegistry};
use schemaform_telemetry::{LogFormat, LoggingConfig, init_logging};

/// Preset name registered by [`sample_registry`].
pub const PRIORITY_PRESET: &str = "priority";

/// Three entries whose ids follow their labels.
#[must_use]
pub fn sample_values() -> Vec<EnumValueConfig> {
    vec![
        EnumValueConfig::new("Low", "Low"),
        EnumValueConfig::new("Medium", "Medium"),
        EnumValueConfig::new("High", "High").with_color("red"),
    ]
}

/// Entries with ids that were chosen independently of their labels.
#[must_use]
pub fn manual_id_values() -> Vec<EnumValueConfig> {
    vec![
        EnumValueConfig::new("p1", "Urgent"),
        EnumValueConfig::new("p2", "Normal"),
    ]
}

/// Registry holding [`sample_values`] under [`PRIORITY_PRESET`].
#[must_use]
pub fn sample_registry() -> SchemaRegistry {
    SchemaRegistry::new().with_preset(PRIORITY_PRESET, sample_values())
}

/// Single-valued property with a literal enum list.
#[must_use]
pub fn single_select_property(values: Vec<EnumValueConfig>) -> PropertyDraft {
    PropertyDraft::single_select("priority", Some(EnumSource::List(values)))
}

/// Multi-valued property with a literal enum list on its element type.
#[must_use]
pub fn multi_select_property(values: Vec<EnumValueConfig>) -> PropertyDraft {
    PropertyDraft::multi_select("tags", Some(EnumSource::List(values)))
}

/// Millisecond clock advanced explicitly by tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    /// Clock starting at `start_ms`.
    #[must_use]
    pub const fn starting_at(start_ms: u64) -> Self {
        Self { now_ms: start_ms }
    }

    /// Current reading.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now_ms
    }

    /// Move forward by `delta_ms` and return the new reading.
    pub const fn advance(&mut self, delta_ms: u64) -> u64 {
        self.now_ms += delta_ms;
        self.now_ms
    }
}

static LOGGING: Once = Once::new();

/// Install a debug-level subscriber routed through the test capture writer.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let config = LoggingConfig {
            level: "debug",
            format: LogFormat::Pretty,
            build_sha: "test",
            capture_for_tests: true,
        };
        let _ = init_logging(&config);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemaform_model::resolve_enum_values;

    #[test]
    fn registry_preset_resolves_to_sample_values() {
        let registry = sample_registry();
        let source = EnumSource::Preset(PRIORITY_PRESET.to_string());
        assert_eq!(resolve_enum_values(Some(&source), &registry), sample_values());
    }

    #[test]
    fn manual_clock_advances() {
        let mut clock = ManualClock::starting_at(10);
        assert_eq!(clock.advance(5), 15);
        assert_eq!(clock.now(), 15);
    }

    #[test]
    fn init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }
}
