use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListIntent {
    OpenAddDialog,
    /// Hide the add dialog and reset both drafts (cancel path).
    CloseAddDialog,
    UpdateDraftName { text: String },
    UpdateDraftQuantity { text: String },
    /// Append an item built from the drafts, then close the dialog.
    ConfirmAdd,
    /// Edit the first row carrying `id`.
    BeginEdit { id: u32 },
    /// Edit the row at `index`; used by the list screen, where ids may repeat.
    BeginEditRow { index: usize },
    /// Update the editing row with `id` (or the first row with `id`) and
    /// clear every editing flag.
    CommitEdit { id: u32, name: String, quantity: u32 },
    Delete { id: u32 },
}

impl Intent for ShoppingListIntent {}
