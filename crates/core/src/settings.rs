//! Compile-time settings.
//!
//! Storefront has no configuration files and no CLI flags: every tunable is a
//! constant here. [`Settings`] bundles the ones that vary between a real run
//! and a test run (endpoint, output path) so they can be passed explicitly.

use std::path::PathBuf;

/// Remote catalog endpoint.
pub const API_URL: &str = "https://dummyjson.com/products";

/// File name of the exported report (written in the working directory).
pub const REPORT_FILE_NAME: &str = "filtered_products_report.pdf";

/// File the terminal front-end sends its logs to.
pub const LOG_FILE_NAME: &str = "storefront.log";

/// Runtime view of the compile-time settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Catalog endpoint queried once at startup.
    pub api_url: String,
    /// Destination of the PDF export (overwritten on every export).
    pub report_path: PathBuf,
}

impl Settings {
    pub fn new(api_url: impl Into<String>, report_path: impl Into<PathBuf>) -> Self {
        Self {
            api_url: api_url.into(),
            report_path: report_path.into(),
        }
    }

    /// Name shown to the user for the report (file name only, no directory).
    pub fn report_display_name(&self) -> String {
        self.report_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.report_path.display().to_string())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(API_URL, REPORT_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_the_constants() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, API_URL);
        assert_eq!(settings.report_path, PathBuf::from(REPORT_FILE_NAME));
    }

    #[test]
    fn display_name_strips_directories() {
        let settings = Settings::new("http://127.0.0.1:1/products", "/tmp/out/report.pdf");
        assert_eq!(settings.report_display_name(), "report.pdf");
    }
}
