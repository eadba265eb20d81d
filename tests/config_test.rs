//! Integration tests for Settings layered loading.
//!
//! These tests pass explicit global/explicit paths into `load_layers`, so a
//! real global config on the machine does not leak in.

use std::fs;

use tempfile::TempDir;

use paysplit::config::{Settings, DEFAULT_ADJUSTMENT};

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_files_when_load_then_compiled_defaults() {
    let settings = Settings::load_layers(None, None).expect("load");

    assert_eq!(settings.default_adjustment, DEFAULT_ADJUSTMENT);
    assert_eq!(settings.labels.partner, "Partner");
}

#[test]
fn given_explicit_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "paysplit.toml",
        r#"
default_adjustment = 2.5

[labels]
partner = "Kurosaki"
"#,
    );

    let settings = Settings::load_layers(None, Some(&path)).expect("load");

    assert_eq!(settings.default_adjustment, 2.5);
    assert_eq!(settings.labels.partner, "Kurosaki");
    assert_eq!(settings.labels.payee, "Payee", "unspecified label inherits");
}

#[test]
fn given_global_and_explicit_when_load_then_explicit_wins_per_field() {
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "global.toml",
        r#"
default_adjustment = 8

[labels]
title = "Global title"
payee = "Ishii"
"#,
    );
    let explicit = write_config(
        &dir,
        "explicit.toml",
        r#"
[labels]
title = "Explicit title"
"#,
    );

    let settings = Settings::load_layers(Some(&global), Some(&explicit)).expect("load");

    assert_eq!(settings.default_adjustment, 8.0);
    assert_eq!(settings.labels.title, "Explicit title");
    assert_eq!(settings.labels.payee, "Ishii");
}

#[test]
fn given_missing_global_when_load_then_skipped() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let settings = Settings::load_layers(Some(&missing), None).expect("load");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_explicit_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Settings::load_layers(None, Some(&missing)).unwrap_err();

    assert!(err.to_string().contains("config file not found"), "{err}");
}

#[test]
fn given_malformed_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "default_adjustment = [");

    let err = Settings::load_layers(None, Some(&path)).unwrap_err();

    assert!(err.to_string().starts_with("config error: parse"), "{err}");
}

#[test]
fn given_adjustment_beyond_slider_when_load_then_kept() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "wide.toml", "default_adjustment = 40\n");

    let settings = Settings::load_layers(None, Some(&path)).expect("load");

    assert_eq!(settings.default_adjustment, 40.0);
}

#[test]
fn given_nan_adjustment_when_load_then_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "nan.toml", "default_adjustment = nan\n");

    let settings = Settings::load_layers(None, Some(&path)).expect("load");

    assert_eq!(settings.default_adjustment, 0.0);
}

#[test]
fn given_missing_target_when_write_template_then_created_and_loadable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("paysplit.toml");

    Settings::write_template(&path).expect("write template");

    let settings = Settings::load_layers(None, Some(&path)).expect("load template");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_existing_target_when_write_template_then_refuses() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "paysplit.toml", "default_adjustment = 1\n");

    let err = Settings::write_template(&path).unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "default_adjustment = 1\n"
    );
}
