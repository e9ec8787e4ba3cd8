//! End-to-end tests for `cabinetdraft rules`.

use std::fs;

use serde_json::Value;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_rules_path_honours_config_dir() {
    let temp_dir = TempDir::new().unwrap();

    let output = isolated_command(temp_dir.path())
        .args(["rules", "path"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        temp_dir.path().join("rules.json").display().to_string()
    );
}

#[test]
fn test_rules_show_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let output = isolated_command(temp_dir.path())
        .args(["rules", "show"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let rules: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rules["sheet_size"]["width"].as_f64(), Some(1220.0));
    assert_eq!(rules["construction"]["door_gap"].as_f64(), Some(4.0));
}

#[test]
fn test_rules_show_merges_document() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("rules.json"),
        r#"{"construction": {"door_gap": 3}}"#,
    )
    .unwrap();

    let output = isolated_command(temp_dir.path())
        .args(["rules", "show"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let rules: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rules["construction"]["door_gap"].as_f64(), Some(3.0));
    assert_eq!(rules["construction"]["band_width"].as_f64(), Some(60.0));
}

#[test]
fn test_rules_reset_overwrites_document() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("rules.json");
    fs::write(&rules_path, r#"{"construction": {"door_gap": 3}}"#).unwrap();

    let output = isolated_command(temp_dir.path())
        .args(["rules", "reset"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let on_disk: Value = serde_json::from_str(&fs::read_to_string(&rules_path).unwrap()).unwrap();
    assert_eq!(on_disk["construction"]["door_gap"].as_f64(), Some(4.0));
}

#[test]
fn test_rules_option_overrides_config_dir() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("custom").join("shop.json");

    let output = isolated_command(temp_dir.path())
        .args(["rules", "--rules", custom.to_str().unwrap(), "reset"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(custom.exists());
    assert!(!temp_dir.path().join("rules.json").exists());
}
