/// One entry in the shopping list.
///
/// Values are never mutated in place; the `with_*` helpers return an updated
/// copy so every snapshot keeps its own items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    /// Rendered as an edit row instead of a display row.
    pub is_editing: bool,
}

impl ShoppingItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            is_editing: false,
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_quantity(self, quantity: u32) -> Self {
        Self { quantity, ..self }
    }

    pub fn with_editing(self, is_editing: bool) -> Self {
        Self { is_editing, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_not_editing() {
        let item = ShoppingItem::new(1, "Eggs", 12);
        assert!(!item.is_editing);
        assert_eq!(item.name, "Eggs");
        assert_eq!(item.quantity, 12);
    }

    #[test]
    fn with_helpers_leave_original_untouched() {
        let original = ShoppingItem::new(3, "Milk", 1);
        let edited = original
            .clone()
            .with_name("Oat milk")
            .with_quantity(2)
            .with_editing(true);

        assert_eq!(original, ShoppingItem::new(3, "Milk", 1));
        assert_eq!(edited.id, 3);
        assert_eq!(edited.name, "Oat milk");
        assert_eq!(edited.quantity, 2);
        assert!(edited.is_editing);
    }
}
