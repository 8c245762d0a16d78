//! Scenario: `dine play`.
//!
//! # Invariants under test
//! - A scripted checkout ends in `waiting` with an empty cart and the
//!   countdown at ETA × 60.
//! - Rejected steps are skipped without aborting the script.
//! - With `--wait-secs` and a short tick the countdown runs down to zero.

use assert_cmd::prelude::*;
use serde_json::Value;
use std::process::Command;

const CHECKOUT: &str = r#"
- { type: add_item, item_id: 1 }
- { type: add_item, item_id: 5 }
- { type: add_item, item_id: 1 }
- { type: select_table, table: 3 }
- type: proceed_to_checkout
- { type: select_table, table: 99 }
- { type: select_table, table: 5 }
- type: continue
- type: confirm_and_pay
"#;

fn run(args: &[&str]) -> Value {
    let out = Command::cargo_bin("dine").unwrap().args(args).output().unwrap();
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn scripted_checkout_reaches_waiting() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("visit.yaml");
    std::fs::write(&script, CHECKOUT).unwrap();

    let view = run(&["play", "--script", script.to_str().unwrap()]);
    assert_eq!(view["flow"]["phase"], "waiting");
    assert_eq!(view["flow"]["table_number"], 5);
    assert_eq!(view["flow"]["remaining_seconds"], 40 * 60);
    assert_eq!(view["flow"]["remaining_clock"], "40:00");
    assert_eq!(view["cart"]["item_count"], 0);
    assert_eq!(view["flow"]["order"]["total"], 335_000);
    assert_eq!(view["flow"]["order"]["item_count"], 3);
}

#[test]
fn countdown_runs_down_with_short_ticks() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("visit.yaml");
    std::fs::write(&script, CHECKOUT).unwrap();
    let catalog = dir.path().join("menu.yaml");
    std::fs::write(
        &catalog,
        r#"
categories:
  - { id: drink, name: Drinks }
items:
  - { id: 1, name: Espresso, price: 30000, category: drink, prep_time: 1 }
  - { id: 5, name: Water, price: 10000, category: drink, prep_time: 1 }
"#,
    )
    .unwrap();
    let cfg = dir.path().join("dine.yaml");
    std::fs::write(
        &cfg,
        format!(
            "kitchen:\n  serving_overhead_minutes: 0\ncountdown:\n  tick_millis: 5\ncatalog:\n  path: {}\n",
            catalog.display()
        ),
    )
    .unwrap();

    let view = run(&[
        "play",
        "--config",
        cfg.to_str().unwrap(),
        "--script",
        script.to_str().unwrap(),
        "--wait-secs",
        "3",
    ]);
    assert_eq!(view["flow"]["phase"], "waiting");
    assert_eq!(view["flow"]["remaining_seconds"], 0);
}

#[test]
fn missing_script_fails() {
    Command::cargo_bin("dine")
        .unwrap()
        .args(["play", "--script", "/no/such/script.yaml"])
        .assert()
        .failure();
}
