//! Scenario: category + query filter is a pure projection over the catalog
//!
//! # Invariants under test
//!
//! 1. Selecting category "drink" with an empty query yields exactly the drink
//!    items, in catalog order.
//! 2. The projection is recomputed on each call: changing the query after a
//!    call does not affect a later fresh call's correctness.
//! 3. Clearing filters restores the full catalog in order.
//!
//! All tests are pure; no IO.

use dine_catalog::{
    sample_catalog, Catalog, Category, CategoryFilter, FilterState, MenuItem,
};

fn catalog_with_two_drinks() -> Catalog {
    let mut items = dine_catalog::sample::sample_items();
    items.push(MenuItem::new(7, "Lemonade", 40_000, "drink", 3));
    Catalog::new(dine_catalog::sample::sample_categories(), items).unwrap()
}

#[test]
fn drink_category_returns_only_drinks_in_catalog_order() {
    let catalog = catalog_with_two_drinks();
    let mut f = FilterState::new();
    f.set_category(&catalog, CategoryFilter::parse("drink")).unwrap();
    assert_eq!(f.search_query(), "");

    let got: Vec<u32> = f.visible_items(&catalog).map(|i| i.id.0).collect();
    assert_eq!(got, vec![5, 7]);
    assert!(f
        .visible_items(&catalog)
        .all(|i| i.category.as_str() == "drink"));
}

#[test]
fn projection_tracks_every_state_change() {
    let catalog = sample_catalog().unwrap();
    let mut f = FilterState::new();

    f.set_query("pizza");
    assert_eq!(f.visible_items(&catalog).count(), 1);

    f.set_query("");
    assert_eq!(f.visible_items(&catalog).count(), catalog.len());

    f.set_category(&catalog, CategoryFilter::parse("dessert"))
        .unwrap();
    f.set_query("CHEESE");
    let got: Vec<&str> = f
        .visible_items(&catalog)
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(got, vec!["Cheesecake"]);
}

#[test]
fn clear_filters_restores_full_catalog() {
    let catalog = sample_catalog().unwrap();
    let mut f = FilterState::new();
    f.set_category(&catalog, CategoryFilter::parse("salad")).unwrap();
    f.set_query("zzz");
    assert_eq!(f.visible_items(&catalog).count(), 0);

    f.clear_filters();
    let all: Vec<u32> = f.visible_items(&catalog).map(|i| i.id.0).collect();
    assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn empty_catalog_projects_to_nothing() {
    let catalog = Catalog::new(vec![Category::new("drink", "Drinks")], vec![]).unwrap();
    let f = FilterState::new();
    assert!(catalog.is_empty());
    assert_eq!(f.visible_items(&catalog).next(), None);
}
