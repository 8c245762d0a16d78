//! Scenario: catalogs load from YAML and JSON files
//!
//! # Invariants under test
//!
//! 1. A YAML file using the front-end field spelling (`menuItems`, `prepTime`,
//!    `isFeatured`) loads into a validated catalog.
//! 2. A `.json` file is parsed as JSON.
//! 3. A malformed catalog fails with the file path in the error chain.
//! 4. A missing file fails with a read error, not a panic.

use std::io::Write;

use dine_catalog::{load_catalog_file, ItemId};

const YAML_CATALOG: &str = r#"
categories:
  - { id: "all", name: "All", icon: "🍽️" }
  - { id: "pizza", name: "Pizza", icon: "🍕" }
  - { id: "drink", name: "Drinks", icon: "🥤" }
menuItems:
  - id: 1
    name: "Special Pizza"
    price: 150000
    category: "pizza"
    rating: 4.8
    prepTime: 25
    calories: 850
    ingredients: ["Mozzarella", "Pepperoni"]
    isFeatured: true
  - id: 5
    name: "Soft Drink"
    price: 35000
    category: "drink"
    rating: 3.9
    prepTime: 2
    ingredients: []
"#;

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(body.as_bytes()).unwrap();
    f
}

#[test]
fn yaml_catalog_with_front_end_spelling_loads() {
    let f = write_temp(".yaml", YAML_CATALOG);
    let catalog = load_catalog_file(f.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.categories().len(), 2, "'all' chip must be dropped");
    let pizza = catalog.item(ItemId(1)).unwrap();
    assert_eq!(pizza.prep_time, 25);
    assert!(pizza.flags.is_featured);
    assert_eq!(pizza.ingredients, vec!["Mozzarella", "Pepperoni"]);
}

#[test]
fn json_catalog_loads() {
    let json = r#"{
        "categories": [{"id": "drink", "name": "Drinks"}],
        "items": [{"id": 9, "name": "Water", "price": 10000, "category": "drink", "prep_time": 1}]
    }"#;
    let f = write_temp(".json", json);
    let catalog = load_catalog_file(f.path()).unwrap();
    assert_eq!(catalog.item(ItemId(9)).unwrap().name, "Water");
}

#[test]
fn malformed_catalog_error_names_the_file() {
    let yaml = r#"
categories:
  - { id: "drink", name: "Drinks" }
items:
  - { id: 1, name: "Water", price: 1, category: "pizza", prepTime: 1 }
"#;
    let f = write_temp(".yaml", yaml);
    let err = load_catalog_file(f.path()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("catalog file rejected"), "got: {msg}");
    assert!(msg.contains("unknown category"), "got: {msg}");
}

#[test]
fn missing_file_is_an_error() {
    let err = load_catalog_file("/definitely/not/here/catalog.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("failed to read catalog path"));
}
