//! Synchronous session owner.
//!
//! # Design
//! A [`Session`] is the only writer of the cart, favorites, filter and order
//! flow for one visit. Every change goes through [`Session::apply`] (or
//! [`Session::tick`] for the countdown), so there is a single place where
//! state moves and a single error type for rejections.
//!
//! # Invariants
//! - A rejected intent leaves every component unchanged.
//! - Add, favorite and detail intents naming item ids absent from the catalog
//!   are rejected before any component sees them. Removal never fails.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dine_cart::{Cart, CartSnapshot, FavoriteSet};
use dine_catalog::{Catalog, CategoryFilter, FilterError, FilterState, ItemId, MenuItem};
use dine_flow::{FlowError, FlowEvent, FlowOutcome, FlowView, OrderFlow, OrderId, OrderPhase};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bootstrap::SessionSettings;
use crate::intent::Intent;

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The intent named an item the catalog does not carry.
    UnknownItem { item_id: ItemId },
    Filter(FilterError),
    Flow(FlowError),
    /// The runtime task is gone; nothing was applied.
    RuntimeClosed,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownItem { item_id } => write!(f, "unknown menu item {item_id}"),
            Self::Filter(e) => write!(f, "{e}"),
            Self::Flow(e) => write!(f, "{e}"),
            Self::RuntimeClosed => write!(f, "session runtime has shut down"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Filter(e) => Some(e),
            Self::Flow(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FilterError> for SessionError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

impl From<FlowError> for SessionError {
    fn from(e: FlowError) -> Self {
        Self::Flow(e)
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterView {
    pub selected_category: CategoryFilter,
    pub search_query: String,
    pub selected_item: Option<ItemId>,
}

/// Everything the presentation layer renders, as one serializable value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub venue_name: String,
    pub cart: CartSnapshot,
    pub favorites: Vec<ItemId>,
    pub filter: FilterView,
    pub visible_items: Vec<ItemId>,
    pub featured_items: Vec<ItemId>,
    pub flow: FlowView,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct Session {
    catalog: Arc<Catalog>,
    venue_name: String,
    cart: Cart,
    favorites: FavoriteSet,
    filter: FilterState,
    flow: OrderFlow,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>, settings: &SessionSettings) -> Self {
        Self::with_session_id(catalog, settings, Uuid::new_v4())
    }

    /// Fixed session id; order ids derived from it are reproducible.
    pub fn with_session_id(
        catalog: Arc<Catalog>,
        settings: &SessionSettings,
        session_id: Uuid,
    ) -> Self {
        Self {
            catalog,
            venue_name: settings.venue_name.clone(),
            cart: Cart::with_serving_overhead(settings.serving_overhead_minutes),
            favorites: FavoriteSet::new(),
            filter: FilterState::new(),
            flow: OrderFlow::new(session_id, settings.table_count),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.flow.session_id()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn flow(&self) -> &OrderFlow {
        &self.flow
    }

    pub fn phase(&self) -> OrderPhase {
        self.flow.phase()
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &Arc<MenuItem>> + '_ {
        self.filter.visible_items(&self.catalog)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.session_id(),
            venue_name: self.venue_name.clone(),
            cart: self.cart.snapshot(),
            favorites: self.favorites.ids().collect(),
            filter: FilterView {
                selected_category: self.filter.selected_category().clone(),
                search_query: self.filter.search_query().to_string(),
                selected_item: self.filter.selected_item(),
            },
            visible_items: self.visible_items().map(|i| i.id).collect(),
            featured_items: self.catalog.featured_items().map(|i| i.id).collect(),
            flow: self.flow.view(),
        }
    }

    /// Apply `intent`, stamping a confirmed order with the current time.
    pub fn apply(&mut self, intent: Intent) -> Result<Option<FlowOutcome>, SessionError> {
        self.apply_at(intent, Utc::now())
    }

    /// Apply `intent`. Returns the flow outcome for checkout intents and
    /// `None` for cart, favorites and filter intents.
    pub fn apply_at(
        &mut self,
        intent: Intent,
        now: DateTime<Utc>,
    ) -> Result<Option<FlowOutcome>, SessionError> {
        match intent {
            Intent::AddItem { item_id } => {
                let item = Arc::clone(self.known_item(item_id)?);
                self.cart.add_item(&item);
                Ok(None)
            }
            // Removing something that is not in the cart is a silent no-op,
            // whether or not the catalog knows the id.
            Intent::RemoveItem { item_id } => {
                self.cart.remove_item(item_id);
                Ok(None)
            }
            Intent::ToggleFavorite { item_id } => {
                self.known_item(item_id)?;
                self.favorites.toggle(item_id);
                Ok(None)
            }
            Intent::SetCategory { category } => {
                self.filter.set_category(&self.catalog, category)?;
                Ok(None)
            }
            Intent::SetQuery { query } => {
                self.filter.set_query(query);
                Ok(None)
            }
            Intent::ClearFilters => {
                self.filter.clear_filters();
                Ok(None)
            }
            Intent::OpenItem { item_id } => {
                self.filter.open_item(&self.catalog, item_id)?;
                Ok(None)
            }
            Intent::CloseItem => {
                self.filter.close_item();
                Ok(None)
            }
            Intent::ProceedToCheckout => self.flow_event(FlowEvent::ProceedToCheckout),
            Intent::SelectTable { table } => self.flow_event(FlowEvent::SelectTable(table)),
            Intent::Continue => self.flow_event(FlowEvent::Continue),
            Intent::Back => self.flow_event(FlowEvent::Back),
            Intent::ConfirmAndPay => self.flow_event(FlowEvent::ConfirmAndPay { placed_at: now }),
            Intent::ReturnToMenu => self.flow_event(FlowEvent::ReturnToMenu),
        }
    }

    /// One countdown second for `order_id`.
    pub fn tick(&mut self, order_id: OrderId) -> Result<FlowOutcome, SessionError> {
        Ok(self
            .flow
            .apply(FlowEvent::Tick { order_id }, &mut self.cart)?)
    }

    fn flow_event(&mut self, event: FlowEvent) -> Result<Option<FlowOutcome>, SessionError> {
        Ok(Some(self.flow.apply(event, &mut self.cart)?))
    }

    fn known_item(&self, item_id: ItemId) -> Result<&Arc<MenuItem>, SessionError> {
        self.catalog
            .item(item_id)
            .ok_or(SessionError::UnknownItem { item_id })
    }
}
