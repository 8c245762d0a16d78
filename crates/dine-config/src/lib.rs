//! dine-config
//!
//! Layered YAML configuration.
//! - Documents merge left to right (later layers override earlier ones)
//! - The merged tree is canonicalised to JSON and hashed (SHA-256) so a
//!   session can report exactly which configuration it ran with
//! - [`DineConfig`] is the typed view the rest of the workspace reads
//! - [`report_unused_keys`] flags keys nothing reads (typos, stale sections)

mod consumption;
mod settings;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::map::Entry;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

pub use consumption::{consumed_pointers, report_unused_keys, UnusedKeyPolicy, UnusedKeyReport};
pub use settings::{
    CatalogSettings, CountdownSettings, DineConfig, KitchenSettings, VenueSettings,
};

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

impl LoadedConfig {
    /// Typed, validated view of the merged tree.
    pub fn settings(&self) -> Result<DineConfig> {
        DineConfig::from_json(&self.config_json)
    }
}

/// Read and merge YAML files, earliest first.
pub fn load_layered_yaml<P: AsRef<Path>>(paths: &[P]) -> Result<LoadedConfig> {
    let docs = paths
        .iter()
        .map(|p| {
            let p = p.as_ref();
            fs::read_to_string(p)
                .with_context(|| format!("failed to read yaml path: {}", p.display()))
        })
        .collect::<Result<Vec<String>>>()?;
    load_layered_yaml_from_strings(&docs)
}

/// Merge in-memory YAML documents, earliest first.
pub fn load_layered_yaml_from_strings<S: AsRef<str>>(yaml_docs: &[S]) -> Result<LoadedConfig> {
    let mut merged = Value::Object(Map::new());
    for (idx, raw) in yaml_docs.iter().enumerate() {
        let layer: serde_yaml::Value = serde_yaml::from_str(raw.as_ref())
            .with_context(|| format!("invalid yaml in layer {idx}"))?;
        let layer = serde_json::to_value(layer).context("yaml->json conversion failed")?;
        // An empty document parses as null: no overrides.
        if !layer.is_null() {
            merge_into(&mut merged, layer);
        }
    }

    // serde_json's default Map is key-sorted, so the compact form does not
    // depend on YAML key order.
    let canonical_json = serde_json::to_string(&merged).context("canonical json serialize failed")?;
    let config_hash = hex::encode(Sha256::digest(canonical_json.as_bytes()));
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

/// Objects merge key by key; any other value in `layer` replaces `base`.
fn merge_into(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Object(base_map), Value::Object(layer_map)) => {
            for (k, v) in layer_map {
                match base_map.entry(k) {
                    Entry::Occupied(mut slot) => merge_into(slot.get_mut(), v),
                    Entry::Vacant(slot) => {
                        slot.insert(v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}
