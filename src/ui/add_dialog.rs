use crate::ui::app::Field;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::shopping::ShoppingListState;
use crate::ui::text_field::text_field_line;
use crate::ui::theme::{ACCENT, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 7;

pub const DIALOG_TITLE: &str = " Add Shopping Item ";

pub fn render_add_dialog(frame: &mut Frame, area: Rect, state: &ShoppingListState, focus: Field) {
    if !state.is_dialog_open {
        return;
    }

    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let lines = vec![
        text_field_line("Item Name", &state.draft_name, focus == Field::Name),
        Line::from(""),
        text_field_line("Quantity", &state.draft_quantity, focus == Field::Quantity),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter: Add", Style::default().fg(ACCENT)),
            Span::styled("  Esc: Cancel", Style::default().fg(MUTED_TEXT)),
        ]),
    ];

    let block = Block::default()
        .title(DIALOG_TITLE)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
