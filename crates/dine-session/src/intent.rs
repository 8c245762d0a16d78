//! User actions accepted by a [`crate::Session`].

use dine_catalog::{CategoryFilter, ItemId};
use serde::{Deserialize, Serialize};

/// Wire form: `{"type": "add_item", "item_id": 1}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    AddItem { item_id: ItemId },
    RemoveItem { item_id: ItemId },
    ToggleFavorite { item_id: ItemId },
    SetCategory { category: CategoryFilter },
    SetQuery { query: String },
    ClearFilters,
    OpenItem { item_id: ItemId },
    CloseItem,
    ProceedToCheckout,
    SelectTable { table: u32 },
    Continue,
    Back,
    ConfirmAndPay,
    ReturnToMenu,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "add_item",
            Self::RemoveItem { .. } => "remove_item",
            Self::ToggleFavorite { .. } => "toggle_favorite",
            Self::SetCategory { .. } => "set_category",
            Self::SetQuery { .. } => "set_query",
            Self::ClearFilters => "clear_filters",
            Self::OpenItem { .. } => "open_item",
            Self::CloseItem => "close_item",
            Self::ProceedToCheckout => "proceed_to_checkout",
            Self::SelectTable { .. } => "select_table",
            Self::Continue => "continue",
            Self::Back => "back",
            Self::ConfirmAndPay => "confirm_and_pay",
            Self::ReturnToMenu => "return_to_menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tag_matches_name() {
        let intents = [
            Intent::AddItem { item_id: ItemId(1) },
            Intent::SetCategory {
                category: CategoryFilter::All,
            },
            Intent::ClearFilters,
            Intent::SelectTable { table: 3 },
            Intent::ConfirmAndPay,
        ];
        for intent in intents {
            let v = serde_json::to_value(&intent).unwrap();
            assert_eq!(v["type"], intent.name());
        }
    }

    #[test]
    fn parses_script_form() {
        let i: Intent =
            serde_json::from_str(r#"{"type":"set_category","category":"drink"}"#).unwrap();
        assert_eq!(
            i,
            Intent::SetCategory {
                category: CategoryFilter::parse("drink")
            }
        );
    }
}
