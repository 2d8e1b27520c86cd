//! Single-line labelled text field, as used by the add dialog and edit row.

use crate::ui::theme::{FIELD_FOCUS, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const CARET: &str = "▏";

pub fn text_field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(FIELD_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let mut spans = vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
    ];
    if focused {
        spans.push(Span::styled(CARET, Style::default().fg(FIELD_FOCUS)));
    }
    Line::from(spans)
}
