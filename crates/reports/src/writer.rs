//! Atomic report output.

use std::io::Write;
use std::path::Path;

use crate::error::ReportError;

/// Write `bytes` to `path` so that readers only ever see the previous file or
/// the complete new one.
///
/// The data goes to a temporary file in the destination directory, is synced,
/// then renamed over `path`. On failure the temporary file is removed and any
/// existing file at `path` is left untouched.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), ReportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".storefront-report-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| ReportError::write(path, e))?;

    tmp.write_all(bytes).map_err(|e| ReportError::write(path, e))?;
    tmp.flush().map_err(|e| ReportError::write(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| ReportError::write(path, e))?;

    tmp.persist(path)
        .map_err(|e| ReportError::write(path, e.error))?;
    Ok(())
}
