//! Keyboard handling for the terminal front-end.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::UiEvent;

/// Rows skipped by PageUp/PageDown.
pub const PAGE_STEP: usize = 10;

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Forward to the application state.
    Ui(UiEvent),
    ScrollUp(usize),
    ScrollDown(usize),
    /// Nothing to do for this key.
    Ignore,
}

/// Text entry backing the filter field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
}

impl QueryInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width of the current text in characters (for cursor placement).
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    /// Translate a key press, editing the filter text when needed.
    ///
    /// Every edit of the text raises [`UiEvent::QueryChanged`], including edits
    /// that leave it empty.
    pub fn on_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Action::Ui(UiEvent::Quit),
            KeyCode::Char('e') if ctrl => Action::Ui(UiEvent::ExportRequested),
            KeyCode::Char('u') if ctrl => self.replace(String::new()),
            KeyCode::Char(_) if ctrl => Action::Ignore,
            KeyCode::Char(c) => {
                let mut text = self.text.clone();
                text.push(c);
                self.replace(text)
            }
            KeyCode::Backspace => {
                if self.text.is_empty() {
                    return Action::Ignore;
                }
                let mut text = self.text.clone();
                text.pop();
                self.replace(text)
            }
            KeyCode::F(2) => Action::Ui(UiEvent::ExportRequested),
            KeyCode::Esc => Action::Ui(UiEvent::Quit),
            KeyCode::Up => Action::ScrollUp(1),
            KeyCode::Down => Action::ScrollDown(1),
            KeyCode::PageUp => Action::ScrollUp(PAGE_STEP),
            KeyCode::PageDown => Action::ScrollDown(PAGE_STEP),
            _ => Action::Ignore,
        }
    }

    fn replace(&mut self, text: String) -> Action {
        self.text = text;
        Action::Ui(UiEvent::QueryChanged(self.text.clone()))
    }
}
