//! Page layout for the product report.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner of a
//! US Letter page. The vertical cursor walks down the page; a row is only
//! placed after the cursor has been checked against the bottom margin.

use storefront_products::Product;
use storefront_products::listing::truncate_chars;

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

/// Distance from the top edge to the first line on every page.
pub const TOP_OFFSET: f32 = 50.0;
/// Rows are not started below this height.
pub const BOTTOM_MARGIN: f32 = 50.0;
pub const SIDE_MARGIN: f32 = 30.0;
pub const LINE_HEIGHT: f32 = 15.0;
/// Gap between the title banner and the column header on the first page.
pub const TITLE_GAP: f32 = 30.0;

pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const BODY_FONT_SIZE: f32 = 10.0;

pub const REPORT_TITLE: &str = "Filtered Products Report";

/// Maximum characters of a product title printed in the report.
pub const TITLE_MAX_CHARS: usize = 40;

/// Column header labels and their x positions, in print order.
pub const COLUMNS: [(&str, f32); 4] = [
    ("ID", 30.0),
    ("Title", 70.0),
    ("Category", 350.0),
    ("Price ($)", 500.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        font: FontFace,
        size: f32,
        x: f32,
        y: f32,
        text: String,
    },
    /// Horizontal rule from `x1` to `x2` at height `y`.
    Rule { x1: f32, x2: f32, y: f32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    ops: Vec<DrawOp>,
}

impl LayoutPage {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// All text strings on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }

    /// Number of header blocks drawn on this page.
    pub fn header_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rule { .. }))
            .count()
    }

    /// Number of product rows on this page.
    pub fn row_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    DrawOp::Text { font: FontFace::Regular, x, .. } if *x == COLUMNS[0].1
                )
            })
            .count()
    }

    fn text(&mut self, font: FontFace, size: f32, x: f32, y: f32, text: impl Into<String>) {
        self.ops.push(DrawOp::Text {
            font,
            size,
            x,
            y,
            text: text.into(),
        });
    }

    fn rule(&mut self, y: f32) {
        self.ops.push(DrawOp::Rule {
            x1: SIDE_MARGIN,
            x2: PAGE_WIDTH - SIDE_MARGIN,
            y,
        });
    }

    /// Draw the column header block with its top line at `y`.
    ///
    /// Returns the cursor position for the first row below it.
    fn header(&mut self, y: f32) -> f32 {
        for (label, x) in COLUMNS {
            self.text(FontFace::Bold, BODY_FONT_SIZE, x, y, label);
        }
        let rule_y = y - LINE_HEIGHT;
        self.rule(rule_y);
        rule_y - LINE_HEIGHT
    }

    fn row(&mut self, y: f32, product: &Product) {
        let cells = [
            product.id_typed().to_string(),
            truncate_chars(product.title(), TITLE_MAX_CHARS).to_string(),
            product.category().to_string(),
            product.price().to_currency(),
        ];
        for ((_, x), cell) in COLUMNS.into_iter().zip(cells) {
            self.text(FontFace::Regular, BODY_FONT_SIZE, x, y, cell);
        }
    }
}

/// The report as a list of pages of drawing instructions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportLayout {
    pages: Vec<LayoutPage>,
}

impl ReportLayout {
    pub fn pages(&self) -> &[LayoutPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn row_count(&self) -> usize {
        self.pages.iter().map(LayoutPage::row_count).sum()
    }
}

/// Lay out `products` as a table, starting a new page whenever the cursor
/// drops below the bottom margin.
///
/// The first page opens with the report title; every page (the first one
/// included) carries the column header block.
pub fn layout(products: &[Product]) -> ReportLayout {
    let top = PAGE_HEIGHT - TOP_OFFSET;

    let mut pages = Vec::new();
    let mut page = LayoutPage::default();

    page.text(FontFace::Bold, TITLE_FONT_SIZE, SIDE_MARGIN, top, REPORT_TITLE);
    let mut y = page.header(top - TITLE_GAP);

    for product in products {
        if y < BOTTOM_MARGIN {
            pages.push(std::mem::take(&mut page));
            y = page.header(top);
        }
        page.row(y, product);
        y -= LINE_HEIGHT;
    }

    pages.push(page);
    ReportLayout { pages }
}
