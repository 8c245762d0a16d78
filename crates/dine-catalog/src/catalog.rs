//! Static, validated menu reference data.
//!
//! A [`Catalog`] is built once at startup and never mutated. Construction
//! checks the well-formedness rules every downstream component relies on
//! (unique ids, known categories, positive prep time, rating range), so the
//! cart and order flow can treat catalog entries as trusted.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::types::{Category, CategoryId, ItemId, MenuItem, ALL_CATEGORIES};

/// Well-formedness violations surfaced by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Two items share the same id.
    DuplicateItemId { id: ItemId },
    /// Two categories share the same key.
    DuplicateCategory { id: CategoryId },
    /// A category uses the reserved filter key `"all"`.
    ReservedCategoryId,
    /// An item points at a category that is not declared.
    UnknownCategory { item: ItemId, category: CategoryId },
    /// `prep_time` must be at least one minute.
    NonPositivePrepTime { item: ItemId },
    /// `rating` must lie within 0.0..=5.0.
    RatingOutOfRange { item: ItemId, rating: f32 },
    /// Item names must be non-blank.
    EmptyName { item: ItemId },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateItemId { id } => write!(f, "catalog: duplicate item id {id}"),
            Self::DuplicateCategory { id } => write!(f, "catalog: duplicate category '{id}'"),
            Self::ReservedCategoryId => write!(
                f,
                "catalog: category id '{ALL_CATEGORIES}' is reserved for the filter"
            ),
            Self::UnknownCategory { item, category } => write!(
                f,
                "catalog: item {item} references unknown category '{category}'"
            ),
            Self::NonPositivePrepTime { item } => {
                write!(f, "catalog: item {item} must have prep_time > 0")
            }
            Self::RatingOutOfRange { item, rating } => write!(
                f,
                "catalog: item {item} rating {rating} is outside 0.0..=5.0"
            ),
            Self::EmptyName { item } => write!(f, "catalog: item {item} has an empty name"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only item and category reference data, in declaration order.
#[derive(Clone, Debug)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<Arc<MenuItem>>,
    by_id: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Validate and build a catalog. Nothing is built on error.
    pub fn new(categories: Vec<Category>, items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen_categories: HashSet<&CategoryId> = HashSet::new();
        for c in &categories {
            if c.id.as_str() == ALL_CATEGORIES {
                return Err(CatalogError::ReservedCategoryId);
            }
            if !seen_categories.insert(&c.id) {
                return Err(CatalogError::DuplicateCategory { id: c.id.clone() });
            }
        }

        let mut by_id = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            Self::validate_item(item, &seen_categories)?;
            if by_id.insert(item.id, idx).is_some() {
                return Err(CatalogError::DuplicateItemId { id: item.id });
            }
        }

        Ok(Self {
            categories,
            items: items.into_iter().map(Arc::new).collect(),
            by_id,
        })
    }

    fn validate_item(item: &MenuItem, categories: &HashSet<&CategoryId>) -> Result<(), CatalogError> {
        if item.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { item: item.id });
        }
        if !categories.contains(&item.category) {
            return Err(CatalogError::UnknownCategory {
                item: item.id,
                category: item.category.clone(),
            });
        }
        if item.prep_time == 0 {
            return Err(CatalogError::NonPositivePrepTime { item: item.id });
        }
        if !(0.0..=5.0).contains(&item.rating) {
            return Err(CatalogError::RatingOutOfRange {
                item: item.id,
                rating: item.rating,
            });
        }
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn items(&self) -> &[Arc<MenuItem>] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Arc<MenuItem>> {
        self.by_id.get(&id).map(|&idx| &self.items[idx])
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn has_category(&self, id: &CategoryId) -> bool {
        self.category(id).is_some()
    }

    /// Items flagged `is_featured`, in catalog order.
    pub fn featured_items(&self) -> impl Iterator<Item = &Arc<MenuItem>> + '_ {
        self.items.iter().filter(|i| i.flags.is_featured)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
