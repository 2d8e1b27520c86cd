//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use shopping_list::config::{Config, IdStrategy};
use shopping_list::ui::app::App;
use shopping_list::ui::input::handle_key;
use shopping_list::ui::mvi::Reducer;
use shopping_list::ui::shopping::{ShoppingListIntent, ShoppingListReducer, ShoppingListState};
use std::path::PathBuf;
use tempfile::TempDir;

/// Run the add flow on the reducer: draft name, draft quantity, confirm.
pub fn add_item(state: ShoppingListState, name: &str, quantity: &str) -> ShoppingListState {
    ShoppingListReducer::reduce_all(
        state,
        [
            ShoppingListIntent::OpenAddDialog,
            ShoppingListIntent::UpdateDraftName {
                text: name.to_string(),
            },
            ShoppingListIntent::UpdateDraftQuantity {
                text: quantity.to_string(),
            },
            ShoppingListIntent::ConfirmAdd,
        ],
    )
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..key(KeyCode::Char(ch))
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Add an item through the keyboard, replacing the default "1" quantity.
pub fn add_via_keys(app: &mut App, name: &str, quantity: &str) {
    press(app, KeyCode::Char('a'));
    type_text(app, name);
    press(app, KeyCode::Tab);
    press(app, KeyCode::Backspace);
    type_text(app, quantity);
    press(app, KeyCode::Enter);
}

pub fn test_app() -> App {
    App::new(&Config::default())
}

pub fn list_length_app() -> App {
    let mut config = Config::default();
    config.list.id_strategy = IdStrategy::ListLength;
    App::new(&config)
}

/// Write `contents` to a config.toml inside a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}
