use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved category key used by the filter to mean "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Unique identifier of a menu item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Key of a category (e.g. "pizza", "drink").
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A browsable category. `icon` and `color` are presentation hints only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl Category {
    pub fn new<I, N>(id: I, name: N) -> Self
    where
        I: Into<CategoryId>,
        N: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            color: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Optional badges carried by a menu item. All default to `false`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFlags {
    #[serde(default, alias = "isPopular")]
    pub is_popular: bool,
    #[serde(default, alias = "isNew")]
    pub is_new: bool,
    #[serde(default, alias = "isFeatured")]
    pub is_featured: bool,
    #[serde(default, alias = "isVegetarian")]
    pub is_vegetarian: bool,
    #[serde(default, alias = "isSpicy")]
    pub is_spicy: bool,
}

/// An immutable catalog entry.
///
/// `price` is in the smallest currency unit. `prep_time` is in minutes and
/// must be positive (checked when the catalog is built).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: u64,
    pub category: CategoryId,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(alias = "prepTime")]
    pub prep_time: u32,
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, flatten)]
    pub flags: ItemFlags,
}

impl MenuItem {
    /// Minimal constructor; the optional fields start empty.
    pub fn new<N, C>(id: u32, name: N, price: u64, category: C, prep_time: u32) -> Self
    where
        N: Into<String>,
        C: Into<CategoryId>,
    {
        Self {
            id: ItemId(id),
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            image: String::new(),
            rating: 0.0,
            prep_time,
            calories: 0,
            ingredients: Vec::new(),
            flags: ItemFlags::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_false_when_absent() {
        let yaml = r#"
id: 7
name: "Lemonade"
price: 40000
category: "drink"
prepTime: 3
"#;
        let item: MenuItem = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.prep_time, 3);
        assert_eq!(item.flags, ItemFlags::default());
        assert!(item.ingredients.is_empty());
    }

    #[test]
    fn camel_case_flags_are_accepted() {
        let json = r#"{"id":1,"name":"Pizza","price":1,"category":"pizza",
            "prep_time":10,"isFeatured":true,"isSpicy":true}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.flags.is_featured);
        assert!(item.flags.is_spicy);
        assert!(!item.flags.is_new);
    }
}
