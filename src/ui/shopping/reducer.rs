use crate::config::IdStrategy;
use crate::ui::mvi::Reducer;

use super::intent::ShoppingListIntent;
use super::item::ShoppingItem;
use super::quantity::{parse_quantity, DEFAULT_QUANTITY_TEXT};
use super::state::ShoppingListState;

pub struct ShoppingListReducer;

impl Reducer for ShoppingListReducer {
    type State = ShoppingListState;
    type Intent = ShoppingListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShoppingListIntent::OpenAddDialog => ShoppingListState {
                is_dialog_open: true,
                ..state
            },
            ShoppingListIntent::CloseAddDialog => close_dialog(state),
            ShoppingListIntent::UpdateDraftName { text } => ShoppingListState {
                draft_name: text,
                ..state
            },
            ShoppingListIntent::UpdateDraftQuantity { text } => ShoppingListState {
                draft_quantity: text,
                ..state
            },
            ShoppingListIntent::ConfirmAdd => confirm_add(state),
            ShoppingListIntent::BeginEdit { id } => {
                let index = state.items.iter().position(|item| item.id == id);
                begin_edit_at(state, index)
            }
            ShoppingListIntent::BeginEditRow { index } => {
                let index = (index < state.items.len()).then_some(index);
                begin_edit_at(state, index)
            }
            ShoppingListIntent::CommitEdit { id, name, quantity } => {
                // Ids can repeat under `ListLength`; prefer the row being edited.
                let target = state
                    .items
                    .iter()
                    .position(|item| item.id == id && item.is_editing)
                    .or_else(|| state.items.iter().position(|item| item.id == id));
                let mut replacement = Some((name, quantity));
                ShoppingListState {
                    items: state
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let update = if Some(index) == target {
                                replacement.take()
                            } else {
                                None
                            };
                            match update {
                                Some((name, quantity)) => item
                                    .with_name(name)
                                    .with_quantity(quantity)
                                    .with_editing(false),
                                None => item.with_editing(false),
                            }
                        })
                        .collect(),
                    ..state
                }
            }
            ShoppingListIntent::Delete { id } => ShoppingListState {
                items: state
                    .items
                    .into_iter()
                    .filter(|item| item.id != id)
                    .collect(),
                ..state
            },
        }
    }
}

/// Mark the row at `index` as the only editing row; `None` clears every flag.
fn begin_edit_at(state: ShoppingListState, index: Option<usize>) -> ShoppingListState {
    ShoppingListState {
        items: state
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| item.with_editing(Some(i) == index))
            .collect(),
        ..state
    }
}

fn close_dialog(state: ShoppingListState) -> ShoppingListState {
    ShoppingListState {
        is_dialog_open: false,
        draft_name: String::new(),
        draft_quantity: DEFAULT_QUANTITY_TEXT.to_string(),
        ..state
    }
}

fn confirm_add(state: ShoppingListState) -> ShoppingListState {
    let quantity = parse_quantity(&state.draft_quantity);
    let (id, next_id) = match state.id_strategy {
        IdStrategy::Monotonic => {
            // The counter only collides once it has pinned at u32::MAX;
            // from then on hand out the lowest id not in use.
            let id = if state.item(state.next_id).is_some() {
                lowest_free_id(&state.items)
            } else {
                state.next_id
            };
            (id, state.next_id.checked_add(1).unwrap_or(u32::MAX))
        }
        // Mirrors the list length, so ids can repeat after a delete.
        IdStrategy::ListLength => {
            let id = u32::try_from(state.items.len())
                .ok()
                .and_then(|len| len.checked_add(1))
                .unwrap_or(u32::MAX);
            (id, state.next_id)
        }
    };

    let mut items = state.items;
    items.push(ShoppingItem::new(id, state.draft_name, quantity));

    close_dialog(ShoppingListState {
        items,
        next_id,
        draft_name: String::new(),
        ..state
    })
}

fn lowest_free_id(items: &[ShoppingItem]) -> u32 {
    let mut used: Vec<u32> = items.iter().map(|item| item.id).collect();
    used.sort_unstable();
    used.dedup();
    let mut candidate = 1;
    for id in used {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate = candidate.saturating_add(1);
        }
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: ShoppingListState, name: &str, quantity: &str) -> ShoppingListState {
        let state = ShoppingListReducer::reduce(state, ShoppingListIntent::OpenAddDialog);
        let state = ShoppingListReducer::reduce(
            state,
            ShoppingListIntent::UpdateDraftName {
                text: name.to_string(),
            },
        );
        let state = ShoppingListReducer::reduce(
            state,
            ShoppingListIntent::UpdateDraftQuantity {
                text: quantity.to_string(),
            },
        );
        ShoppingListReducer::reduce(state, ShoppingListIntent::ConfirmAdd)
    }

    #[test]
    fn open_dialog_only_sets_flag() {
        let state = ShoppingListState {
            draft_name: "half typed".to_string(),
            ..ShoppingListState::default()
        };
        let new = ShoppingListReducer::reduce(state, ShoppingListIntent::OpenAddDialog);
        assert!(new.is_dialog_open);
        assert_eq!(new.draft_name, "half typed");
    }

    #[test]
    fn drafts_are_stored_verbatim() {
        let state = ShoppingListReducer::reduce(
            ShoppingListState::default(),
            ShoppingListIntent::UpdateDraftQuantity {
                text: " x1 ".to_string(),
            },
        );
        assert_eq!(state.draft_quantity, " x1 ");
    }

    #[test]
    fn confirm_appends_and_resets() {
        let state = add(ShoppingListState::default(), "Eggs", "12");
        assert_eq!(state.items, vec![ShoppingItem::new(1, "Eggs", 12)]);
        assert!(!state.is_dialog_open);
        assert_eq!(state.draft_name, "");
        assert_eq!(state.draft_quantity, "1");
    }

    #[test]
    fn confirm_with_bad_quantity_uses_default() {
        let state = add(ShoppingListState::default(), "Apples", "abc");
        assert_eq!(state.items[0].quantity, 1);
    }

    #[test]
    fn confirm_allows_empty_name() {
        let state = add(ShoppingListState::default(), "", "3");
        assert_eq!(state.items[0].name, "");
        assert_eq!(state.items[0].quantity, 3);
    }

    #[test]
    fn monotonic_ids_skip_deleted() {
        let state = add(ShoppingListState::default(), "Eggs", "12");
        let state = add(state, "Bread", "2");
        let state = ShoppingListReducer::reduce(state, ShoppingListIntent::Delete { id: 2 });
        let state = add(state, "Jam", "1");
        let ids: Vec<u32> = state.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn list_length_ids_follow_item_count() {
        let state = ShoppingListState::with_strategy(IdStrategy::ListLength);
        let state = add(state, "Eggs", "12");
        let state = add(state, "Bread", "2");
        let ids: Vec<u32> = state.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(state.next_id, 1);
    }

    #[test]
    fn exhausted_counter_reuses_lowest_free_id() {
        let state = ShoppingListState {
            next_id: u32::MAX,
            ..ShoppingListState::default()
        };
        let state = add(state, "Eggs", "12");
        assert_eq!(state.next_id, u32::MAX);
        let state = add(state, "Bread", "2");
        let state = add(state, "Jam", "1");
        let ids: Vec<u32> = state.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![u32::MAX, 1, 2]);
    }

    #[test]
    fn lowest_free_id_fills_gaps() {
        let items = vec![
            ShoppingItem::new(1, "a", 1),
            ShoppingItem::new(3, "b", 1),
            ShoppingItem::new(3, "c", 1),
        ];
        assert_eq!(lowest_free_id(&items), 2);
        assert_eq!(lowest_free_id(&[]), 1);
    }

    #[test]
    fn begin_edit_moves_flag() {
        let state = add(ShoppingListState::default(), "Eggs", "12");
        let state = add(state, "Bread", "2");
        let state = ShoppingListReducer::reduce(state, ShoppingListIntent::BeginEdit { id: 1 });
        let state = ShoppingListReducer::reduce(state, ShoppingListIntent::BeginEdit { id: 2 });
        assert!(!state.items[0].is_editing);
        assert!(state.items[1].is_editing);
    }

    #[test]
    fn begin_edit_unknown_id_clears_all() {
        let state = add(ShoppingListState::default(), "Eggs", "12");
        let state = ShoppingListReducer::reduce(state, ShoppingListIntent::BeginEdit { id: 1 });
        let state = ShoppingListReducer::reduce(state, ShoppingListIntent::BeginEdit { id: 42 });
        assert!(!state.is_editing());
    }

    #[test]
    fn begin_edit_row_out_of_range_clears_all() {
        let state = add(ShoppingListState::default(), "Eggs", "12");
        let state = ShoppingListReducer::reduce(state, ShoppingListIntent::BeginEditRow { index: 0 });
        assert!(state.items[0].is_editing);
        let state = ShoppingListReducer::reduce(state, ShoppingListIntent::BeginEditRow { index: 5 });
        assert!(!state.is_editing());
    }

    #[test]
    fn commit_edit_clears_every_flag() {
        let mut state = add(ShoppingListState::default(), "Eggs", "12");
        state = add(state, "Bread", "2");
        // Corrupt state with two editing rows; commit must still normalize it.
        state.items = state
            .items
            .into_iter()
            .map(|item| item.with_editing(true))
            .collect();
        let state = ShoppingListReducer::reduce(
            state,
            ShoppingListIntent::CommitEdit {
                id: 1,
                name: "Milk".to_string(),
                quantity: 2,
            },
        );
        assert!(state.items.iter().all(|item| !item.is_editing));
        assert_eq!(state.items[0].name, "Milk");
        assert_eq!(state.items[1].name, "Bread");
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let state = add(ShoppingListState::default(), "Eggs", "12");
        let before = state.clone();
        let state = ShoppingListReducer::reduce(state, ShoppingListIntent::Delete { id: 7 });
        assert_eq!(state, before);
    }
}
