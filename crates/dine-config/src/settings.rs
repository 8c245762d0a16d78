//! Typed configuration.
//!
//! Every section and key is optional; missing values take the house
//! defaults. Out-of-range values are rejected by [`DineConfig::validate`].

use anyhow::{bail, Context, Result};
use dine_cart::SERVING_OVERHEAD_MINUTES;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_VENUE_NAME: &str = "Restaurant";
pub const DEFAULT_TABLE_COUNT: u32 = 20;
pub const DEFAULT_TICK_MILLIS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueSettings {
    pub name: String,
    pub table_count: u32,
}

impl Default for VenueSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_VENUE_NAME.to_string(),
            table_count: DEFAULT_TABLE_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenSettings {
    pub serving_overhead_minutes: u32,
}

impl Default for KitchenSettings {
    fn default() -> Self {
        Self {
            serving_overhead_minutes: SERVING_OVERHEAD_MINUTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSettings {
    /// Wall-clock length of one countdown second. Shortened in demos and tests.
    pub tick_millis: u64,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            tick_millis: DEFAULT_TICK_MILLIS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// `None` → built-in sample menu.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DineConfig {
    pub venue: VenueSettings,
    pub kitchen: KitchenSettings,
    pub countdown: CountdownSettings,
    pub catalog: CatalogSettings,
}

impl DineConfig {
    pub fn from_json(v: &Value) -> Result<Self> {
        let cfg: DineConfig = if v.is_null() {
            DineConfig::default()
        } else {
            serde_json::from_value(v.clone()).context("config does not match expected shape")?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.venue.table_count == 0 {
            bail!("CONFIG_INVALID: venue.table_count must be > 0");
        }
        if self.countdown.tick_millis == 0 {
            bail!("CONFIG_INVALID: countdown.tick_millis must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_tree_yields_defaults() {
        let cfg = DineConfig::from_json(&json!({})).unwrap();
        assert_eq!(cfg, DineConfig::default());
        assert_eq!(cfg.venue.name, "Restaurant");
        assert_eq!(cfg.venue.table_count, 20);
        assert_eq!(cfg.kitchen.serving_overhead_minutes, 15);
        assert_eq!(cfg.countdown.tick_millis, 1000);
        assert!(cfg.catalog.path.is_none());
    }

    #[test]
    fn overhead_default_matches_a_fresh_cart() {
        let cfg = DineConfig::default();
        assert_eq!(
            cfg.kitchen.serving_overhead_minutes,
            dine_cart::Cart::new().serving_overhead_minutes()
        );
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg = DineConfig::from_json(&json!({"venue": {"table_count": 8}})).unwrap();
        assert_eq!(cfg.venue.table_count, 8);
        assert_eq!(cfg.venue.name, "Restaurant");
    }

    #[test]
    fn zero_tables_rejected() {
        let err = DineConfig::from_json(&json!({"venue": {"table_count": 0}})).unwrap_err();
        assert!(err.to_string().contains("table_count"));
    }

    #[test]
    fn zero_tick_rejected() {
        let err = DineConfig::from_json(&json!({"countdown": {"tick_millis": 0}})).unwrap_err();
        assert!(err.to_string().contains("tick_millis"));
    }

    #[test]
    fn wrong_type_is_a_shape_error() {
        let err = DineConfig::from_json(&json!({"venue": {"table_count": "many"}})).unwrap_err();
        assert!(format!("{err:#}").contains("expected shape"));
    }
}
