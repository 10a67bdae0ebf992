//! Integration tests for Settings config loading.
//!
//! These tests only use explicit config files in temp directories. They
//! assume no `KTREE_*` variables and no global config file are present.

use std::fs;

use tempfile::TempDir;

use ktree::config::Settings;
use ktree::Order;

#[test]
fn given_explicit_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ktree.toml");
    fs::write(
        &path,
        r#"
orders = ["bfs", "heap"]
separator = " | "
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.orders, vec![Order::Bfs, Order::Heap]);
    assert_eq!(settings.separator, " | ");
    // not in the file, default kept
    assert!(settings.show_tree);
}

#[test]
fn given_missing_explicit_file_when_load_then_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("config:"), "{err}");
}

#[test]
fn given_unknown_order_when_load_then_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ktree.toml");
    fs::write(&path, "orders = [\"sideways\"]\n").unwrap();

    assert!(Settings::load(Some(&path)).is_err());
}

#[test]
fn given_loaded_settings_when_shown_then_toml_reloads_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ktree.toml");
    fs::write(&path, "show_tree = false\norders = [\"in-order\"]\n").unwrap();
    let settings = Settings::load(Some(&path)).unwrap();

    let shown = dir.path().join("shown.toml");
    fs::write(&shown, settings.to_toml().unwrap()).unwrap();
    assert_eq!(Settings::load(Some(&shown)).unwrap(), settings);
}
