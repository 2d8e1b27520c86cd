use crate::config::IdStrategy;
use crate::ui::mvi::UiState;

use super::item::ShoppingItem;
use super::quantity::DEFAULT_QUANTITY_TEXT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListState {
    /// Insertion order; only appends and removals change it.
    pub items: Vec<ShoppingItem>,
    pub draft_name: String,
    pub draft_quantity: String,
    pub is_dialog_open: bool,
    pub id_strategy: IdStrategy,
    /// Next id under [`IdStrategy::Monotonic`]. Never decreases.
    pub next_id: u32,
}

impl Default for ShoppingListState {
    fn default() -> Self {
        Self::with_strategy(IdStrategy::default())
    }
}

impl UiState for ShoppingListState {}

impl ShoppingListState {
    pub fn with_strategy(id_strategy: IdStrategy) -> Self {
        Self {
            items: Vec::new(),
            draft_name: String::new(),
            draft_quantity: DEFAULT_QUANTITY_TEXT.to_string(),
            is_dialog_open: false,
            id_strategy,
            next_id: 1,
        }
    }

    pub fn item(&self, id: u32) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn editing_item(&self) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.is_editing)
    }

    pub fn is_editing(&self) -> bool {
        self.editing_item().is_some()
    }
}
