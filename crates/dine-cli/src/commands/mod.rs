//! Command handler modules for the `dine` CLI.
//!
//! Shared utilities used by multiple commands live here.

pub mod menu;
pub mod play;

use anyhow::Result;
use dine_config::{DineConfig, UnusedKeyPolicy};
use tracing::{info, warn};

/// Load layered config (defaults when no paths are given), report unused
/// keys, and return the typed view.
pub fn load_config(paths: &[String], strict: bool) -> Result<DineConfig> {
    if paths.is_empty() {
        info!("no config given; using defaults");
        return Ok(DineConfig::default());
    }

    let loaded = dine_config::load_layered_yaml(paths)?;

    let policy = if strict {
        UnusedKeyPolicy::Fail
    } else {
        UnusedKeyPolicy::Warn
    };
    let report = dine_config::report_unused_keys(&loaded.config_json, policy)?;
    if !report.is_clean() {
        warn!(
            unused = ?report.unused_leaf_pointers,
            "config contains keys nothing reads"
        );
    }

    let cfg = loaded.settings()?;
    info!(config_hash = %loaded.config_hash, "config loaded");
    Ok(cfg)
}
