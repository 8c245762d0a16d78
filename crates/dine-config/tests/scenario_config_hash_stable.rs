//! Scenario: config hash stability.
//!
//! # Invariants under test
//! - Reordering YAML keys does not change the hash.
//! - Changing any leaf value changes the hash.
//! - Later layers override earlier ones, and the hash follows the merged tree.
//! - Loading from files matches loading from the same strings.

use dine_config::{load_layered_yaml, load_layered_yaml_from_strings};
use std::io::Write;

#[test]
fn key_order_does_not_change_hash() {
    let a = "venue:\n  name: Bistro\n  table_count: 12\nkitchen:\n  serving_overhead_minutes: 10\n";
    let b = "kitchen:\n  serving_overhead_minutes: 10\nvenue:\n  table_count: 12\n  name: Bistro\n";
    let la = load_layered_yaml_from_strings(&[a]).unwrap();
    let lb = load_layered_yaml_from_strings(&[b]).unwrap();
    assert_eq!(la.config_hash, lb.config_hash);
    assert_eq!(la.canonical_json, lb.canonical_json);
}

#[test]
fn changed_leaf_changes_hash() {
    let a = load_layered_yaml_from_strings(&["venue:\n  table_count: 12\n"]).unwrap();
    let b = load_layered_yaml_from_strings(&["venue:\n  table_count: 13\n"]).unwrap();
    assert_ne!(a.config_hash, b.config_hash);
}

#[test]
fn override_layer_wins_and_equals_flat_doc() {
    let base = "venue:\n  name: Bistro\n  table_count: 12\n";
    let over = "venue:\n  table_count: 30\n";
    let flat = "venue:\n  name: Bistro\n  table_count: 30\n";

    let layered = load_layered_yaml_from_strings(&[base, over]).unwrap();
    let single = load_layered_yaml_from_strings(&[flat]).unwrap();

    assert_eq!(layered.config_hash, single.config_hash);
    let cfg = layered.settings().unwrap();
    assert_eq!(cfg.venue.table_count, 30);
    assert_eq!(cfg.venue.name, "Bistro");
}

#[test]
fn file_and_string_loading_agree() {
    let dir = tempfile::tempdir().unwrap();
    let base_path = dir.path().join("base.yaml");
    let over_path = dir.path().join("local.yaml");
    let base = "countdown:\n  tick_millis: 50\n";
    let over = "catalog:\n  path: menu.yaml\n";
    std::fs::File::create(&base_path)
        .unwrap()
        .write_all(base.as_bytes())
        .unwrap();
    std::fs::File::create(&over_path)
        .unwrap()
        .write_all(over.as_bytes())
        .unwrap();

    let from_files = load_layered_yaml(&[
        base_path.to_str().unwrap(),
        over_path.to_str().unwrap(),
    ])
    .unwrap();
    let from_strings = load_layered_yaml_from_strings(&[base, over]).unwrap();
    assert_eq!(from_files.config_hash, from_strings.config_hash);

    let cfg = from_files.settings().unwrap();
    assert_eq!(cfg.countdown.tick_millis, 50);
    assert_eq!(cfg.catalog.path.as_deref(), Some("menu.yaml"));
}

#[test]
fn missing_file_reports_path() {
    let err = load_layered_yaml(&["/definitely/not/here.yaml"]).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.yaml"));
}
