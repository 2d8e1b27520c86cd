//! Display and edit rows of the list screen.

use crate::ui::app::{EditRowState, Field};
use crate::ui::shopping::ShoppingItem;
use crate::ui::text_field::text_field_line;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

/// Read-only row: name over "Quantity: N".
pub fn display_row(item: &ShoppingItem) -> ListItem<'static> {
    let name = Line::from(Span::styled(
        format!(" {}", item.name),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ));
    let quantity = Line::from(Span::styled(
        format!(" Quantity: {}", item.quantity),
        Style::default().fg(MUTED_TEXT),
    ));
    ListItem::new(vec![name, quantity, Line::from("")])
}

/// Editable row seeded from the item when editing began.
pub fn edit_row(row: &EditRowState) -> ListItem<'static> {
    let mut name = text_field_line("Item Name", &row.name, row.focus == Field::Name);
    let mut quantity =
        text_field_line("Item Quantity", &row.quantity, row.focus == Field::Quantity);
    name.spans.insert(0, Span::raw(" "));
    quantity.spans.insert(0, Span::raw(" "));
    let update = Line::from(Span::styled(
        " [Update: Enter]",
        Style::default().fg(ACCENT),
    ));
    ListItem::new(vec![name, quantity, update, Line::from("")])
}
