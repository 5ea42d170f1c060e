//! One-line text rendering of products for list displays.

use crate::product::Product;

/// Width (in characters) of the title column in list lines.
pub const LISTING_TITLE_WIDTH: usize = 30;

/// Placeholder line shown instead of an empty list.
pub const EMPTY_LISTING: &str = "No products found.";

/// Cut `text` to at most `max` characters (not bytes). No ellipsis.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// `ID | Title | Price | Category`, with the title cut to 30 characters.
pub fn listing_line(product: &Product) -> String {
    format!(
        "{:<4} | {:<width$} | ${:<6} | {}",
        product.id_typed(),
        truncate_chars(product.title(), LISTING_TITLE_WIDTH),
        product.price(),
        product.category(),
        width = LISTING_TITLE_WIDTH,
    )
}

/// Lines for a whole view; an empty view yields the placeholder line.
pub fn listing_lines(products: &[Product]) -> Vec<String> {
    if products.is_empty() {
        return vec![EMPTY_LISTING.to_string()];
    }
    products.iter().map(listing_line).collect()
}
