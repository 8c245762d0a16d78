//! dine-catalog
//!
//! Static menu reference data and the browsing view-state projected over it.
//! - Validated, read-only [`Catalog`] of items and categories
//! - Catalog files (YAML / JSON) and a built-in sample menu
//! - [`FilterState`]: category + free-text query + open item detail
//! - Pure deterministic logic apart from [`load_catalog_file`]

mod types;

pub mod catalog;
pub mod filter;
pub mod loader;
pub mod sample;

pub use catalog::{Catalog, CatalogError};
pub use filter::{CategoryFilter, FilterError, FilterState, VisibleItems};
pub use loader::{load_catalog_file, parse_catalog_json, parse_catalog_yaml, CatalogDocument};
pub use sample::sample_catalog;
pub use types::{Category, CategoryId, ItemFlags, ItemId, MenuItem, ALL_CATEGORIES};
