//! Built-in house menu, used when no catalog file is configured.

use crate::catalog::{Catalog, CatalogError};
use crate::types::{Category, ItemFlags, MenuItem};

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("pizza", "Pizza").with_icon("🍕").with_color("bg-red-50"),
        Category::new("burger", "Burgers").with_icon("🍔").with_color("bg-amber-50"),
        Category::new("pasta", "Pasta").with_icon("🍝").with_color("bg-blue-50"),
        Category::new("salad", "Salads").with_icon("🥗").with_color("bg-green-50"),
        Category::new("drink", "Drinks").with_icon("🥤").with_color("bg-sky-50"),
        Category::new("dessert", "Desserts").with_icon("🍰").with_color("bg-pink-50"),
    ]
}

pub fn sample_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Special Pizza", 150_000, "pizza", 25)
            .with_description("Pepperoni, mushroom, mozzarella and the house sauce")
            .with_image("pictures/Special pizza.png")
            .with_rating(4.8)
            .with_calories(850)
            .with_ingredients(["Mozzarella", "Pepperoni", "Mushroom", "Tomato sauce"])
            .with_flags(ItemFlags {
                is_popular: true,
                is_featured: true,
                ..ItemFlags::default()
            }),
        MenuItem::new(2, "Whole Burger", 120_000, "burger", 15)
            .with_description("200g beef patty with cheddar and the house sauce")
            .with_image("pictures/The whole burger.jpg")
            .with_rating(4.6)
            .with_calories(720)
            .with_ingredients(["Burger bun", "Beef patty", "Cheddar", "Lettuce"])
            .with_flags(ItemFlags {
                is_featured: true,
                ..ItemFlags::default()
            }),
        MenuItem::new(3, "Alfredo Pasta", 135_000, "pasta", 20)
            .with_description("Penne in creamy alfredo sauce with fresh mushroom")
            .with_image("pictures/Pasta alfredo.jpg")
            .with_rating(4.5)
            .with_calories(650)
            .with_ingredients(["Penne", "Alfredo sauce", "Mushroom", "Parmesan"])
            .with_flags(ItemFlags {
                is_vegetarian: true,
                ..ItemFlags::default()
            }),
        MenuItem::new(4, "Caesar Salad", 95_000, "salad", 10)
            .with_description("Classic caesar with the house dressing and croutons")
            .with_image("pictures/Caesar salad.jpg")
            .with_rating(4.3)
            .with_calories(320)
            .with_ingredients(["Romaine", "Caesar dressing", "Parmesan", "Croutons"]),
        MenuItem::new(5, "Soft Drink", 35_000, "drink", 2)
            .with_description("Chilled carbonated drink, 330ml")
            .with_image("pictures/soft drink.jpg")
            .with_rating(3.9)
            .with_calories(150),
        MenuItem::new(6, "Cheesecake", 85_000, "dessert", 5)
            .with_description("Classic cheesecake with fresh strawberries")
            .with_image("pictures/something cake.jpg")
            .with_rating(4.7)
            .with_calories(480)
            .with_ingredients(["Biscuit", "Cream cheese", "Strawberry", "Sugar"])
            .with_flags(ItemFlags {
                is_new: true,
                is_vegetarian: true,
                ..ItemFlags::default()
            }),
    ]
}

/// The house menu as a validated [`Catalog`].
pub fn sample_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(sample_categories(), sample_items())
}
