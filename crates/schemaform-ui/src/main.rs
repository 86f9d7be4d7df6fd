#![forbid(unsafe_code)]
#![deny(unused_must_use, missing_docs)]
//! Schemaform UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> anyhow::Result<()> {
    schemaform_ui::run_app();
    Ok(())
}

/// Environment variable selecting `json` or `pretty` log output.
#[cfg(not(target_arch = "wasm32"))]
const LOG_FORMAT_VAR: &str = "SCHEMAFORM_LOG_FORMAT";

#[cfg(not(target_arch = "wasm32"))]
fn logging_config(format: Option<&str>) -> schemaform_telemetry::LoggingConfig<'static> {
    use schemaform_telemetry::{LogFormat, LoggingConfig, log_format_from_str};

    LoggingConfig {
        format: format.map_or_else(LogFormat::infer, log_format_from_str),
        ..LoggingConfig::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    let format = std::env::var(LOG_FORMAT_VAR).ok();
    schemaform_telemetry::init_logging(&logging_config(format.as_deref()))?;
    tracing::warn!(
        "schemaform-ui is intended for wasm32; build with `trunk build` or `cargo build --target wasm32-unknown-unknown`"
    );
    Ok(())
}
