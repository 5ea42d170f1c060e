//! Report rendering entry points.

use std::path::{Path, PathBuf};

use storefront_core::settings::REPORT_FILE_NAME;
use storefront_products::Product;

use crate::error::ReportError;
use crate::layout::layout;
use crate::pdf;
use crate::writer::write_atomically;

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub path: PathBuf,
    pub pages: usize,
    pub rows: usize,
    pub bytes: usize,
}

/// Render `view` to PDF bytes without touching the file system.
pub fn render_pdf(view: &[Product]) -> Result<Vec<u8>, ReportError> {
    if view.is_empty() {
        return Err(ReportError::NoData);
    }
    pdf::encode(&layout(view))
}

/// Render `view` to `path`, replacing any previous report there.
///
/// An empty view is rejected with [`ReportError::NoData`] before anything is
/// created, so an existing report survives.
pub fn render_to(view: &[Product], path: &Path) -> Result<ReportSummary, ReportError> {
    if view.is_empty() {
        tracing::warn!(path = %path.display(), "report skipped: view is empty");
        return Err(ReportError::NoData);
    }

    let report = layout(view);
    let bytes = pdf::encode(&report)?;
    write_atomically(path, &bytes)?;

    let summary = ReportSummary {
        path: path.to_path_buf(),
        pages: report.page_count(),
        rows: report.row_count(),
        bytes: bytes.len(),
    };
    tracing::info!(
        path = %summary.path.display(),
        pages = summary.pages,
        rows = summary.rows,
        bytes = summary.bytes,
        "report written"
    );
    Ok(summary)
}

/// Render `view` to the fixed report file in the working directory.
pub fn render(view: &[Product]) -> Result<ReportSummary, ReportError> {
    render_to(view, Path::new(REPORT_FILE_NAME))
}
