//! Filter / selection view-state.
//!
//! [`FilterState`] holds what the browsing screen is narrowed to: a category
//! (or every category) and a free-text query, plus the item whose detail
//! sheet is open. [`FilterState::visible_items`] is a pure projection over a
//! [`Catalog`]; nothing is cached, so each call recomputes from scratch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::{CategoryId, ItemId, MenuItem, ALL_CATEGORIES};

/// Category selection: the "all" sentinel or one concrete category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    /// `"all"` (any case) maps to the sentinel; anything else names a category.
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        if t.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Only(CategoryId::new(t))
        }
    }

    pub fn admits(&self, category: &CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<CategoryFilter> for String {
    fn from(f: CategoryFilter) -> Self {
        match f {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(c) => c.0,
        }
    }
}

/// Rejections from the filter setters. State is unchanged on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    UnknownCategory(CategoryId),
    UnknownItem(ItemId),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(c) => write!(f, "filter: unknown category '{c}'"),
            Self::UnknownItem(id) => write!(f, "filter: unknown item {id}"),
        }
    }
}

impl std::error::Error for FilterError {}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    selected_category: CategoryFilter,
    search_query: String,
    selected_item: Option<ItemId>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_item(&self) -> Option<ItemId> {
        self.selected_item
    }

    /// Select a category. A concrete category must exist in `catalog`.
    pub fn set_category(
        &mut self,
        catalog: &Catalog,
        filter: CategoryFilter,
    ) -> Result<(), FilterError> {
        if let CategoryFilter::Only(c) = &filter {
            if !catalog.has_category(c) {
                return Err(FilterError::UnknownCategory(c.clone()));
            }
        }
        self.selected_category = filter;
        Ok(())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Reset category and query to their defaults. The detail sheet is left alone.
    pub fn clear_filters(&mut self) {
        self.selected_category = CategoryFilter::All;
        self.search_query.clear();
    }

    /// Open the detail sheet for `id`.
    pub fn open_item(&mut self, catalog: &Catalog, id: ItemId) -> Result<(), FilterError> {
        if catalog.item(id).is_none() {
            return Err(FilterError::UnknownItem(id));
        }
        self.selected_item = Some(id);
        Ok(())
    }

    pub fn close_item(&mut self) {
        self.selected_item = None;
    }

    /// Lazily yield the catalog items passing the current filter, in catalog order.
    pub fn visible_items<'a>(&'a self, catalog: &'a Catalog) -> VisibleItems<'a> {
        VisibleItems {
            inner: catalog.items().iter(),
            category: &self.selected_category,
            needle: self.search_query.to_lowercase(),
        }
    }
}

/// Iterator returned by [`FilterState::visible_items`].
#[derive(Clone, Debug)]
pub struct VisibleItems<'a> {
    inner: std::slice::Iter<'a, Arc<MenuItem>>,
    category: &'a CategoryFilter,
    needle: String,
}

impl<'a> Iterator for VisibleItems<'a> {
    type Item = &'a Arc<MenuItem>;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        let category = self.category;
        self.inner
            .by_ref()
            .find(|item| category.admits(&item.category) && item.name.to_lowercase().contains(needle))
    }
}
