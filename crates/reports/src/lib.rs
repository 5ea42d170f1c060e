//! `storefront-reports`
//!
//! **Responsibility:** turn a filtered product view into a paginated PDF.
//!
//! Rendering happens in three steps:
//! 1. [`layout`] places every string and rule on numbered pages (pure).
//! 2. [`pdf::encode`] turns the layout into PDF bytes with `lopdf`.
//! 3. [`writer::write_atomically`] writes the bytes next to the destination
//!    and renames them into place.

pub mod error;
pub mod layout;
pub mod pdf;
pub mod render;
pub mod writer;

pub use error::ReportError;
pub use layout::{DrawOp, FontFace, LayoutPage, ReportLayout, layout};
pub use render::{ReportSummary, render, render_pdf, render_to};
