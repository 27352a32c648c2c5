//! Normalized book records.

use crate::ids::BookId;
use serde::{Deserialize, Serialize};

/// Title used when the catalog omits one.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Author line used when the catalog lists no authors.
pub const DEFAULT_AUTHORS: &str = "Unknown Author";
/// Description used when the catalog omits one.
pub const DEFAULT_DESCRIPTION: &str = "No description available";
/// Cover image used when the catalog has no thumbnail.
pub const DEFAULT_IMAGE: &str = "https://via.placeholder.com/128x195?text=No+Image";
/// Category used when the catalog lists none.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
/// Publisher used when the catalog omits one.
pub const DEFAULT_PUBLISHER: &str = "Unknown";

/// A book as the storefront sees it, after catalog normalization.
///
/// Display fields are always populated (missing upstream values are replaced
/// with defaults). `price` stays `None` until a placeholder is assigned at
/// add-to-cart time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Catalog identifier.
    pub id: BookId,
    /// Display title.
    pub title: String,
    /// Authors joined with ", ".
    pub authors: String,
    /// Long description.
    pub description: String,
    /// Cover thumbnail URL.
    pub image: String,
    /// First catalog category.
    pub category: String,
    /// Publisher name.
    pub publisher: String,
    /// Publication date as reported upstream (may be empty).
    pub published_date: String,
    /// Page count, 0 when unknown.
    pub page_count: u32,
    /// Average rating, 0.0 when unrated.
    pub average_rating: f32,
    /// Preview URL, if the catalog offers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
    /// Purchase URL, if the catalog offers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_link: Option<String>,
    /// Placeholder price in whole currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

impl BookRecord {
    /// Create a record with default metadata.
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, authors: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: authors.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            publisher: DEFAULT_PUBLISHER.to_string(),
            published_date: String::new(),
            page_count: 0,
            average_rating: 0.0,
            preview_link: None,
            buy_link: None,
            price: None,
        }
    }

    /// Set the price.
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Price used for totals; unpriced books count as 0.
    pub fn unit_price(&self) -> i64 {
        self.price.map(i64::from).unwrap_or(0)
    }

    /// Whether the catalog reported a rating.
    pub fn is_rated(&self) -> bool {
        self.average_rating > 0.0
    }

    /// The catalog's buy link, or a synthesized web search for the book.
    pub fn purchase_link(&self) -> String {
        match &self.buy_link {
            Some(link) => link.clone(),
            None => format!(
                "https://www.google.com/search?q=Buy+{}+by+{}",
                encode_uri_component(&self.title),
                encode_uri_component(&self.authors)
            ),
        }
    }
}

/// Percent-encode everything except the URI-component unreserved set
/// (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`).
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_defaults() {
        let book = BookRecord::new("a1", "Dune", "Frank Herbert");
        assert_eq!(book.description, DEFAULT_DESCRIPTION);
        assert_eq!(book.image, DEFAULT_IMAGE);
        assert_eq!(book.price, None);
        assert_eq!(book.unit_price(), 0);
        assert!(!book.is_rated());
    }

    #[test]
    fn test_purchase_link_prefers_catalog_link() {
        let mut book = BookRecord::new("a1", "Dune", "Frank Herbert");
        book.buy_link = Some("https://play.google.com/store/books/details?id=a1".into());
        assert_eq!(
            book.purchase_link(),
            "https://play.google.com/store/books/details?id=a1"
        );
    }

    #[test]
    fn test_purchase_link_synthesized() {
        let book = BookRecord::new("a1", "Dune & Co", "Frank Herbert");
        assert_eq!(
            book.purchase_link(),
            "https://www.google.com/search?q=Buy+Dune%20%26%20Co+by+Frank%20Herbert"
        );
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a-b_c.d!~*'()"), "a-b_c.d!~*'()");
        assert_eq!(encode_uri_component("a b/c?"), "a%20b%2Fc%3F");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_serializes_camel_case() {
        let book = BookRecord::new("a1", "Dune", "Frank Herbert").with_price(300);
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["pageCount"], 0);
        assert_eq!(json["price"], 300);
        assert!(json.get("buyLink").is_none());
    }
}
