use anyhow::{Context, Result};
use dine_catalog::{load_catalog_file, sample_catalog, Catalog};
use dine_config::DineConfig;

/// The subset of [`DineConfig`] a session reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub venue_name: String,
    pub table_count: u32,
    pub serving_overhead_minutes: u32,
    pub tick_millis: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&DineConfig::default())
    }
}

impl From<&DineConfig> for SessionSettings {
    fn from(cfg: &DineConfig) -> Self {
        Self {
            venue_name: cfg.venue.name.clone(),
            table_count: cfg.venue.table_count,
            serving_overhead_minutes: cfg.kitchen.serving_overhead_minutes,
            tick_millis: cfg.countdown.tick_millis,
        }
    }
}

/// Catalog named by `catalog.path`, or the built-in house menu.
pub fn open_catalog(cfg: &DineConfig) -> Result<Catalog> {
    match cfg.catalog.path.as_deref() {
        Some(path) => load_catalog_file(path),
        None => sample_catalog().context("built-in catalog failed validation"),
    }
}
