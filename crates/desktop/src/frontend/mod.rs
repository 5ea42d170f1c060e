//! Terminal front-end (ratatui + crossterm).
//!
//! The front-end owns only presentation state. Every key that matters to the
//! application is turned into a [`UiEvent`](crate::types::UiEvent) and handed
//! to [`AppState::handle`].

pub mod input;
pub mod view;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::commands::AppState;
use crate::types::{Flow, UiEvent};
use input::Action;
use view::ScreenState;

/// Run the interactive loop until the user quits.
pub fn run(app: &mut AppState) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut AppState) -> Result<()> {
    let mut screen = ScreenState::default();
    screen.reset_selection(app.view().len());

    loop {
        terminal.draw(|frame| view::render(frame, app, &mut screen))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Windows compatibility: only handle Press events
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match screen.input.on_key(key) {
            Action::Ui(event) => {
                let refilter = matches!(event, UiEvent::QueryChanged(_));
                if dispatch(app, event) == Flow::Quit {
                    return Ok(());
                }
                if refilter {
                    screen.reset_selection(app.view().len());
                }
            }
            Action::ScrollDown(step) => screen.scroll_down(step, app.view().len()),
            Action::ScrollUp(step) => screen.scroll_up(step),
            Action::Ignore => {}
        }
    }
}

fn dispatch(app: &mut AppState, event: UiEvent) -> Flow {
    tracing::debug!(?event, "ui event");
    app.handle(event)
}
