//! Drawing of the single application screen.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::commands::AppState;
use crate::frontend::input::QueryInput;
use crate::types::{Status, StatusLevel};

const HELP: &str = "Type to filter | ↑↓ PgUp/PgDn Scroll | Ctrl-E/F2 Export PDF | Esc Quit";

/// Front-end-only state: the text field and the list scroll position.
#[derive(Debug, Default)]
pub struct ScreenState {
    pub input: QueryInput,
    pub list_state: ListState,
}

impl ScreenState {
    /// Select the first row of a fresh view (or nothing when it is empty).
    pub fn reset_selection(&mut self, rows: usize) {
        self.list_state.select(if rows == 0 { None } else { Some(0) });
    }

    pub fn scroll_down(&mut self, step: usize, rows: usize) {
        if rows == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| i + step);
        self.list_state.select(Some(next.min(rows - 1)));
    }

    pub fn scroll_up(&mut self, step: usize) {
        if let Some(i) = self.list_state.selected() {
            self.list_state.select(Some(i.saturating_sub(step)));
        }
    }
}

fn status_style(status: &Status) -> Style {
    match status.level {
        StatusLevel::Info => Style::default(),
        StatusLevel::Success => Style::default().fg(Color::Green),
        StatusLevel::Warning => Style::default().fg(Color::Yellow),
        StatusLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn render(frame: &mut Frame, app: &AppState, screen: &mut ScreenState) {
    let [filter_area, list_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    // Filter field
    frame.render_widget(
        Paragraph::new(screen.input.text()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter by title or category "),
        ),
        filter_area,
    );
    let cursor_x = filter_area.x + 1 + screen.input.width() as u16;
    frame.set_cursor_position(Position::new(
        cursor_x.min(filter_area.right().saturating_sub(2)),
        filter_area.y + 1,
    ));

    // Product list
    let view = app.view();
    let items: Vec<ListItem> = app.listing().into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Products ({} of {}) ", view.len(), view.catalog_len())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, list_area, &mut screen.list_state);

    // Status bar
    let status = app.status();
    frame.render_widget(
        Paragraph::new(status.message.as_str()).style(status_style(status)),
        status_area,
    );

    // Footer
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)).centered(),
        help_area,
    );
}
