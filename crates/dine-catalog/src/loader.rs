//! Catalog files.
//!
//! A catalog document lists `categories` and `items` (the front-end
//! spelling `menuItems` is accepted too). `.json` files are parsed as JSON,
//! everything else as YAML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::{Category, MenuItem, ALL_CATEGORIES};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
    #[serde(alias = "menuItems")]
    pub items: Vec<MenuItem>,
}

impl CatalogDocument {
    /// Validate into a [`Catalog`].
    ///
    /// A declared `"all"` category is dropped first: front-end data commonly
    /// lists it as the first chip even though it is the filter sentinel.
    pub fn into_catalog(self) -> Result<Catalog> {
        let categories = self
            .categories
            .into_iter()
            .filter(|c| c.id.as_str() != ALL_CATEGORIES)
            .collect();
        Ok(Catalog::new(categories, self.items)?)
    }
}

pub fn parse_catalog_yaml(raw: &str) -> Result<Catalog> {
    let doc: CatalogDocument = serde_yaml::from_str(raw).context("invalid catalog yaml")?;
    doc.into_catalog()
}

pub fn parse_catalog_json(raw: &str) -> Result<Catalog> {
    let doc: CatalogDocument = serde_json::from_str(raw).context("invalid catalog json")?;
    doc.into_catalog()
}

pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog path: {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let catalog = if is_json {
        parse_catalog_json(&raw)
    } else {
        parse_catalog_yaml(&raw)
    };
    catalog.with_context(|| format!("catalog file rejected: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_chip_is_dropped_before_validation() {
        let yaml = r#"
categories:
  - { id: "all", name: "All" }
  - { id: "drink", name: "Drinks" }
menuItems:
  - { id: 5, name: "Soft Drink", price: 35000, category: "drink", prepTime: 2 }
"#;
        let c = parse_catalog_yaml(yaml).unwrap();
        assert_eq!(c.categories().len(), 1);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn invalid_item_surfaces_catalog_error() {
        let yaml = r#"
categories:
  - { id: "drink", name: "Drinks" }
items:
  - { id: 5, name: "Soft Drink", price: 35000, category: "drink", prep_time: 0 }
"#;
        let err = parse_catalog_yaml(yaml).unwrap_err();
        assert!(format!("{err:#}").contains("prep_time"), "got: {err:#}");
    }
}
