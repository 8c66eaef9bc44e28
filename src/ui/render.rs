use crate::todo::TodoListState;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{DONE_TEXT, GLOBAL_BORDER, SELECTED_BG, TEXT, TEXT_DIM};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const CHECKBOX_DONE: &str = "[x] ";
const CHECKBOX_OPEN: &str = "[ ] ";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.store().snapshot();

    frame.render_widget(Header::new().widget(&state), header);
    frame.render_widget(Clear, body);
    render_todo_list(frame, body, &state, app);
    frame.render_widget(Footer::new().widget(app.last_rejection(), footer), footer);
}

fn render_todo_list(frame: &mut Frame<'_>, area: Rect, state: &TodoListState, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if state.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            " Nothing to do. Start with --demo or seed items in the config file.",
            Style::default().fg(TEXT_DIM),
        )));
        frame.render_widget(hint, inner);
        return;
    }

    let selected = app.selection();
    let visible_rows = inner.height as usize;
    // Keep the selected row inside the window.
    let offset = selected.saturating_sub(visible_rows.saturating_sub(1));
    let inner_width = inner.width as usize;

    let lines: Vec<Line> = state
        .todos
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, todo)| {
            let checkbox = if todo.is_complete {
                CHECKBOX_DONE
            } else {
                CHECKBOX_OPEN
            };

            let mut row_style = Style::default().fg(TEXT);
            if todo.is_complete {
                row_style = Style::default()
                    .fg(DONE_TEXT)
                    .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
            }
            if index == selected {
                row_style = row_style.bg(SELECTED_BG);
            }

            let used = 1 + checkbox.chars().count() + todo.description.chars().count();
            let padding = inner_width.saturating_sub(used);

            Line::from(vec![
                Span::styled(" ", row_style),
                Span::styled(checkbox.to_string(), row_style),
                Span::styled(todo.description.clone(), row_style),
                Span::styled(" ".repeat(padding), row_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    // Text cursor at the end of the selected description.
    let row = selected.saturating_sub(offset);
    let text_end = 1 + CHECKBOX_OPEN.chars().count()
        + state.todos[selected].description.chars().count();
    let x = inner.x + (text_end as u16).min(inner.width.saturating_sub(1));
    let y = inner.y + (row as u16).min(inner.height.saturating_sub(1));
    frame.set_cursor_position((x, y));
}
