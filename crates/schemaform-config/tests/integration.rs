use std::io::Write;

use schemaform_config::{ConfigError, FormsConfig, load_from_path};

#[test]
fn settings_file_round_trips_through_loader() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "enum_editor": {{ "commit_delay_ms": 80, "update_ids": false }},
            "search": {{ "placeholder": "Find records" }}
        }}"#
    )?;

    let config = load_from_path(file.path())?;
    assert_eq!(config.enum_editor.commit_delay_ms, 80);
    assert!(!config.enum_editor.update_ids);
    assert_eq!(config.search.debounce_ms, FormsConfig::default().search.debounce_ms);
    assert_eq!(config.search.placeholder, "Find records");
    Ok(())
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = load_from_path(&path).expect_err("missing file");
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_values_fail_validation() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "search": {{ "debounce_ms": 60000 }} }}"#)?;
    let err = load_from_path(file.path()).expect_err("delay too large");
    assert_eq!(err.section(), Some("search"));
    Ok(())
}
