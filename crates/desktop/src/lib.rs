//! `storefront-desktop`
//!
//! **Responsibility:** interactive shell around the filtered-report pipeline.
//!
//! This crate provides:
//! - Application state (catalog, current view, status) with one event handler
//! - A terminal front-end that raises events on keystrokes
//!
//! Filtering and rendering stay in their own crates and never see the UI.

pub mod commands;
pub mod frontend;
pub mod types;

pub use commands::AppState;
pub use types::{Flow, Status, StatusLevel, UiEvent};
