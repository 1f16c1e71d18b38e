//! Tests for global configuration management

use std::fs;
use std::path::PathBuf;

use segduty::config::GlobalConfig;
use segduty::core::models::SymmetryPolicy;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = GlobalConfig::default();
    assert!(config.display.color);
    assert!(config.catalog.path.is_none());
    assert_eq!(config.catalog.policy(), SymmetryPolicy::Close);
}

#[test]
fn test_missing_config_is_default() {
    let dir = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&dir.path().join("config.toml"));
    assert_eq!(config, GlobalConfig::default());
}

#[test]
fn test_invalid_config_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "display = 3").unwrap();

    assert_eq!(GlobalConfig::load_from(&path), GlobalConfig::default());
}

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = GlobalConfig::default();
    config.display.color = false;
    config.catalog.path = Some(PathBuf::from("/tmp/catalog.toml"));
    config.catalog.strict_symmetry = true;
    config.save_to(&path).unwrap();

    let loaded = GlobalConfig::load_from(&path);
    assert_eq!(loaded, config);
    assert_eq!(loaded.catalog.policy(), SymmetryPolicy::Strict);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[catalog]\nstrict_symmetry = true\n").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert!(config.display.color);
    assert!(config.catalog.strict_symmetry);
}

#[test]
fn test_catalog_load_uses_builtin_without_path() {
    let config = GlobalConfig::default();
    assert_eq!(config.catalog.load(None).unwrap().len(), 30);
}

#[test]
fn test_strict_config_rejects_builtin_catalog() {
    let mut config = GlobalConfig::default();
    config.catalog.strict_symmetry = true;
    assert!(config.catalog.load(None).is_err());
}

#[test]
fn test_catalog_override_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
categories = ["Banking"]

[[task]]
id = "online_banking"
name = "Online Banking Access"
category = "Banking"
risk_weight = 10
conflicts_with = ["sign_checks"]

[[task]]
id = "sign_checks"
name = "Sign Checks"
category = "Banking"
risk_weight = 10
"#,
    )
    .unwrap();

    let config = GlobalConfig::default();
    let catalog = config.catalog.load(Some(&path)).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.conflicts("sign_checks", "online_banking"));
    assert_eq!(catalog.asymmetric_conflicts().len(), 1);
}
