use crate::todo::TodoListState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &TodoListState) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(TEXT);

        let summary = if state.is_empty() {
            "empty".to_string()
        } else {
            format!("{} of {} done", state.completed_count(), state.len())
        };

        let line = Line::from(vec![
            Span::styled(" tuido", title_style),
            Span::styled("  ", text_style),
            Span::styled(summary, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
