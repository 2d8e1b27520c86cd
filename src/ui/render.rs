use crate::ui::add_dialog::render_add_dialog;
use crate::ui::app::{App, Mode};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::item_row::{display_row, edit_row};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, MUTED_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const EMPTY_HINT: &str = "Your list is empty. Press 'a' to add an item.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new(app.title(), state.items.len()).widget(), header);
    frame.render_widget(Clear, body);

    if state.items.is_empty() {
        let hint = Paragraph::new(EMPTY_HINT)
            .style(Style::default().fg(MUTED_TEXT))
            .alignment(Alignment::Center);
        frame.render_widget(hint, body);
    } else {
        let rows: Vec<ListItem> = state
            .items
            .iter()
            .map(|item| match app.edit_row() {
                Some(row) if item.is_editing && row.id == item.id => edit_row(row),
                _ => display_row(item),
            })
            .collect();
        let list = List::new(rows).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
        let mut list_state = ListState::default().with_selected(Some(app.selection()));
        frame.render_stateful_widget(list, body, &mut list_state);
    }

    frame.render_widget(Footer::new(app.mode()).widget(footer), footer);

    if app.mode() == Mode::AddDialog {
        render_add_dialog(frame, body, state, app.dialog_focus());
    }
}
