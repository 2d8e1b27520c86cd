mod intent;
mod item;
mod quantity;
mod reducer;
mod state;

pub use intent::ShoppingListIntent;
pub use item::ShoppingItem;
pub use quantity::{parse_quantity, DEFAULT_QUANTITY, DEFAULT_QUANTITY_TEXT};
pub use reducer::ShoppingListReducer;
pub use state::ShoppingListState;
