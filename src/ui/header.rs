use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
    item_count: usize,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, item_count: usize) -> Self {
        Self { title, item_count }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let count = match self.item_count {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.title,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(count, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
