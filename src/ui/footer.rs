use crate::ui::theme::{GLOBAL_BORDER, STATUS_ERROR, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left; the last rejected intent (or the version)
    /// on the right.
    pub fn widget(&self, rejection: Option<&str>, area: Rect) -> Paragraph<'static> {
        let hints = " ↑/↓: Select │ Enter: Toggle │ Type: Edit │ Ctrl+Q: Quit";
        let (right, right_style) = match rejection {
            Some(message) => (
                format!("{} ", message),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (
                format!("v{} ", VERSION),
                Style::default().fg(TEXT).add_modifier(Modifier::DIM),
            ),
        };

        // Pad using char count, not byte count (for Unicode).
        let hints_width = hints.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, right_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
