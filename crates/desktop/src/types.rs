//! Types shared between the application state and the front-end.
//!
//! Nothing here depends on the terminal backend, so the same types can drive
//! any other UI.

/// Something the user did that the application must react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The filter text changed (raised on every keystroke).
    QueryChanged(String),
    /// The export button was activated.
    ExportRequested,
    /// The user closed the window.
    Quit,
}

/// Whether the event loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Severity of the status bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLevel::Info => "Info",
            StatusLevel::Success => "Success",
            StatusLevel::Warning => "Warning",
            StatusLevel::Error => "Error",
        }
    }
}

/// Outcome of the most recent fetch, filter or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, message)
    }

    fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}
