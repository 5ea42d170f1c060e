//! Application state and the handlers UI events are dispatched to.

use storefront_catalog::CatalogSource;
use storefront_core::Settings;
use storefront_products::{Catalog, FilteredView, listing_lines};
use storefront_reports::{ReportError, render_to};

use crate::types::{Flow, Status, UiEvent};

/// Everything the front-end shows, owned in one place.
///
/// The catalog is loaded once in [`AppState::start`] and never changes; the
/// view is recomputed from it on every query change.
#[derive(Debug, Clone)]
pub struct AppState {
    settings: Settings,
    catalog: Catalog,
    view: FilteredView,
    status: Status,
}

impl AppState {
    /// Load the catalog (one blocking fetch) and build the initial state.
    pub fn start<S: CatalogSource + ?Sized>(settings: Settings, source: &S) -> Self {
        let (catalog, status) = match source.fetch() {
            Ok(products) if products.is_empty() => {
                tracing::warn!("catalog endpoint returned no products");
                (Catalog::empty(), Status::warning("The API returned no products."))
            }
            Ok(products) => {
                let catalog = Catalog::new(products);
                let status = Status::info(format!(
                    "Catalog loaded. Showing {} products.",
                    catalog.len()
                ));
                (catalog, status)
            }
            Err(error) => {
                tracing::error!(%error, "catalog fetch failed");
                (
                    Catalog::empty(),
                    Status::error(format!("Could not load products from the API: {error}")),
                )
            }
        };

        let view = FilteredView::all(&catalog);
        Self {
            settings,
            catalog,
            view,
            status,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Lines for the product list (placeholder line when the view is empty).
    pub fn listing(&self) -> Vec<String> {
        listing_lines(self.view.products())
    }

    /// Single dispatch point for UI events.
    pub fn handle(&mut self, event: UiEvent) -> Flow {
        match event {
            UiEvent::QueryChanged(query) => {
                self.filter(&query);
                Flow::Continue
            }
            UiEvent::ExportRequested => {
                self.export();
                Flow::Continue
            }
            UiEvent::Quit => Flow::Quit,
        }
    }

    fn filter(&mut self, query: &str) {
        self.view = FilteredView::compute(&self.catalog, query);
        tracing::debug!(query, matches = self.view.len(), "filter applied");
        self.status = Status::info(format!(
            "Showing {} of {} products.",
            self.view.len(),
            self.view.catalog_len()
        ));
    }

    fn export(&mut self) {
        let path = &self.settings.report_path;
        self.status = match render_to(self.view.products(), path) {
            Ok(summary) => Status::success(format!(
                "PDF '{}' generated successfully ({} page(s), {} product(s)).",
                self.settings.report_display_name(),
                summary.pages,
                summary.rows
            )),
            Err(ReportError::NoData) => Status::warning("No filtered data to export."),
            Err(error) => {
                tracing::error!(%error, "report export failed");
                Status::error(format!("Failed to generate PDF: {error}"))
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatusLevel;
    use storefront_catalog::FetchError;
    use storefront_products::{Price, Product, ProductId};

    struct Canned(Result<Vec<Product>, u16>);

    impl CatalogSource for Canned {
        fn fetch(&self) -> Result<Vec<Product>, FetchError> {
            self.0.clone().map_err(FetchError::Status)
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            Product::new(ProductId::new(1), "Apple Watch", Price::new(399.99).unwrap(), "wearables"),
            Product::new(ProductId::new(2), "iPhone", Price::new(999.0).unwrap(), "smartphones"),
        ]
    }

    fn app_in(dir: &tempfile::TempDir, source: Canned) -> AppState {
        let settings = Settings::new("http://127.0.0.1:9/products", dir.path().join("report.pdf"));
        AppState::start(settings, &source)
    }

    #[test]
    fn start_with_products_shows_everything() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(&dir, Canned(Ok(sample())));

        assert_eq!(app.catalog().len(), 2);
        assert_eq!(app.view().len(), 2);
        assert_eq!(app.status().level, StatusLevel::Info);
        assert_eq!(app.status().message, "Catalog loaded. Showing 2 products.");
    }

    #[test]
    fn start_after_fetch_failure_is_usable_and_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, Canned(Err(503)));

        assert!(app.catalog().is_empty());
        assert_eq!(app.status().level, StatusLevel::Error);
        assert!(app.status().message.contains("HTTP 503"));
        assert_eq!(app.listing(), vec!["No products found.".to_string()]);

        assert_eq!(app.handle(UiEvent::QueryChanged("x".into())), Flow::Continue);
        assert_eq!(app.status().message, "Showing 0 of 0 products.");
    }

    #[test]
    fn start_with_empty_catalog_warns() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(&dir, Canned(Ok(Vec::new())));
        assert_eq!(app.status().level, StatusLevel::Warning);
    }

    #[test]
    fn query_change_recomputes_view_and_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, Canned(Ok(sample())));

        app.handle(UiEvent::QueryChanged("phone".into()));
        assert_eq!(app.view().len(), 1);
        assert_eq!(app.view().products()[0].title(), "iPhone");
        assert_eq!(app.status().message, "Showing 1 of 2 products.");

        app.handle(UiEvent::QueryChanged(String::new()));
        assert_eq!(app.view().len(), 2);
    }

    #[test]
    fn export_writes_report_and_reports_success() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, Canned(Ok(sample())));

        app.handle(UiEvent::ExportRequested);

        assert_eq!(app.status().level, StatusLevel::Success);
        assert!(app.status().message.starts_with("PDF 'report.pdf' generated successfully"));
        assert!(dir.path().join("report.pdf").exists());
    }

    #[test]
    fn export_of_empty_view_warns_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, Canned(Ok(sample())));

        app.handle(UiEvent::QueryChanged("no such thing".into()));
        app.handle(UiEvent::ExportRequested);

        assert_eq!(app.status().level, StatusLevel::Warning);
        assert_eq!(app.status().message, "No filtered data to export.");
        assert!(!dir.path().join("report.pdf").exists());
    }

    #[test]
    fn export_failure_reports_error_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(
            "http://127.0.0.1:9/products",
            dir.path().join("missing").join("report.pdf"),
        );
        let mut app = AppState::start(settings, &Canned(Ok(sample())));
        app.handle(UiEvent::QueryChanged("watch".into()));
        let view_before = app.view().clone();

        app.handle(UiEvent::ExportRequested);

        assert_eq!(app.status().level, StatusLevel::Error);
        assert!(app.status().message.starts_with("Failed to generate PDF:"));
        assert_eq!(app.view(), &view_before);
    }

    #[test]
    fn quit_stops_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, Canned(Ok(sample())));
        assert_eq!(app.handle(UiEvent::Quit), Flow::Quit);
    }
}
