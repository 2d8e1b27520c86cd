use crate::config::Config;
use crate::ui::mvi::Store;
use crate::ui::shopping::{
    parse_quantity, ShoppingItem, ShoppingListIntent, ShoppingListReducer, ShoppingListState,
};

/// Text field that receives typed characters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Field {
    #[default]
    Name,
    Quantity,
}

impl Field {
    pub fn toggle(self) -> Self {
        match self {
            Field::Name => Field::Quantity,
            Field::Quantity => Field::Name,
        }
    }
}

/// What the keyboard is currently driving.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    List,
    AddDialog,
    EditRow,
}

/// Text buffers of the row being edited.
///
/// Kept outside the store: nothing is committed until Enter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditRowState {
    pub id: u32,
    pub name: String,
    pub quantity: String,
    pub focus: Field,
    /// Values at the time editing began, written back on cancel.
    pub original_name: String,
    pub original_quantity: u32,
}

impl EditRowState {
    fn from_item(item: &ShoppingItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            focus: Field::Name,
            original_name: item.name.clone(),
            original_quantity: item.quantity,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Quantity => &mut self.quantity,
        }
    }
}

pub struct App {
    should_quit: bool,
    title: String,
    store: Store<ShoppingListReducer>,
    /// Highlighted row index into `items`.
    selection: usize,
    dialog_focus: Field,
    edit_row: Option<EditRowState>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            title: config.ui.title.clone(),
            store: Store::new(ShoppingListState::with_strategy(config.list.id_strategy)),
            selection: 0,
            dialog_focus: Field::Name,
            edit_row: None,
        }
    }

    pub fn state(&self) -> &ShoppingListState {
        self.store.state()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mode(&self) -> Mode {
        if self.state().is_dialog_open {
            Mode::AddDialog
        } else if self.edit_row.is_some() {
            Mode::EditRow
        } else {
            Mode::List
        }
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.state().items.get(self.selection)
    }

    pub fn dialog_focus(&self) -> Field {
        self.dialog_focus
    }

    pub fn edit_row(&self) -> Option<&EditRowState> {
        self.edit_row.as_ref()
    }

    fn dispatch(&mut self, intent: ShoppingListIntent) {
        self.store.dispatch(intent);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.state().items.len();
        self.selection = self.selection.min(len.saturating_sub(1));
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.state().items.len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let next = self.selection as isize + delta;
        self.selection = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn open_add_dialog(&mut self) {
        self.dialog_focus = Field::Name;
        self.dispatch(ShoppingListIntent::OpenAddDialog);
    }

    /// Cancel the dialog; drafts are discarded.
    pub fn close_add_dialog(&mut self) {
        self.dispatch(ShoppingListIntent::CloseAddDialog);
    }

    pub fn confirm_add(&mut self) {
        self.dispatch(ShoppingListIntent::ConfirmAdd);
        if let Some(item) = self.state().items.last() {
            tracing::info!(id = item.id, name = %item.name, quantity = item.quantity, "item added");
        }
        self.selection = self.state().items.len().saturating_sub(1);
    }

    pub fn toggle_field(&mut self) {
        match self.mode() {
            Mode::AddDialog => self.dialog_focus = self.dialog_focus.toggle(),
            Mode::EditRow => {
                if let Some(edit) = self.edit_row.as_mut() {
                    edit.focus = edit.focus.toggle();
                }
            }
            Mode::List => {}
        }
    }

    pub fn type_char(&mut self, ch: char) {
        self.edit_focused_text(|text| text.push(ch));
    }

    pub fn backspace(&mut self) {
        self.edit_focused_text(|text| {
            text.pop();
        });
    }

    fn edit_focused_text(&mut self, edit: impl FnOnce(&mut String)) {
        match self.mode() {
            Mode::AddDialog => {
                let state = self.state();
                let intent = match self.dialog_focus {
                    Field::Name => {
                        let mut text = state.draft_name.clone();
                        edit(&mut text);
                        ShoppingListIntent::UpdateDraftName { text }
                    }
                    Field::Quantity => {
                        let mut text = state.draft_quantity.clone();
                        edit(&mut text);
                        ShoppingListIntent::UpdateDraftQuantity { text }
                    }
                };
                self.dispatch(intent);
            }
            Mode::EditRow => {
                if let Some(row) = self.edit_row.as_mut() {
                    edit(row.focused_mut());
                }
            }
            Mode::List => {}
        }
    }

    pub fn begin_edit_selected(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        // Target the row, not the id: ids can repeat under `ListLength`.
        self.edit_row = Some(EditRowState::from_item(item));
        self.dispatch(ShoppingListIntent::BeginEditRow {
            index: self.selection,
        });
    }

    /// Commit the edit row buffers, parsing the quantity with the default fallback.
    pub fn commit_edit(&mut self) {
        let Some(row) = self.edit_row.take() else {
            return;
        };
        let quantity = parse_quantity(&row.quantity);
        tracing::info!(id = row.id, name = %row.name, quantity, "item updated");
        self.dispatch(ShoppingListIntent::CommitEdit {
            id: row.id,
            name: row.name,
            quantity,
        });
    }

    /// Leave the edit row, writing back the values it started with.
    pub fn cancel_edit(&mut self) {
        let Some(row) = self.edit_row.take() else {
            return;
        };
        self.dispatch(ShoppingListIntent::CommitEdit {
            id: row.id,
            name: row.original_name,
            quantity: row.original_quantity,
        });
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };
        tracing::info!(id, "item deleted");
        if self.edit_row.as_ref().is_some_and(|row| row.id == id) {
            self.edit_row = None;
        }
        self.dispatch(ShoppingListIntent::Delete { id });
    }
}
