//! Wire types for the book-search `volumes` endpoint and their normalization.

use haven_commerce::catalog::{
    BookRecord, DEFAULT_AUTHORS, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, DEFAULT_IMAGE,
    DEFAULT_PUBLISHER, DEFAULT_TITLE,
};
use haven_commerce::BookId;
use serde::Deserialize;

/// Response body of a volumes search.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    /// Upstream total match count.
    #[serde(default)]
    pub total_items: u64,
    /// Matches; absent when there are none.
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

impl VolumesResponse {
    /// Normalize every volume into a book record, in response order.
    pub fn into_books(self) -> Vec<BookRecord> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .map(Volume::into_book)
            .collect()
    }
}

/// One search hit.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: String,
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
    #[serde(default)]
    pub sale_info: Option<SaleInfo>,
}

/// Bibliographic metadata of a volume.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinks>,
    pub categories: Option<Vec<String>>,
    pub published_date: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub average_rating: Option<f32>,
    pub preview_link: Option<String>,
}

/// Cover image links.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

/// Sale metadata of a volume.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfo {
    pub buy_link: Option<String>,
}

impl Volume {
    /// Normalize into a [`BookRecord`], filling display defaults.
    ///
    /// Empty strings and empty lists count as missing.
    pub fn into_book(self) -> BookRecord {
        let info = self.volume_info.unwrap_or_default();

        let authors = info
            .authors
            .filter(|a| !a.is_empty())
            .map(|a| a.join(", "))
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHORS.to_string());

        BookRecord {
            id: BookId::new(self.id),
            title: non_empty(info.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            authors,
            description: non_empty(info.description)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            image: non_empty(info.image_links.and_then(|l| l.thumbnail))
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            category: non_empty(info.categories.and_then(|c| c.into_iter().next()))
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            publisher: non_empty(info.publisher).unwrap_or_else(|| DEFAULT_PUBLISHER.to_string()),
            published_date: info.published_date.unwrap_or_default(),
            page_count: info.page_count.unwrap_or(0),
            average_rating: info.average_rating.unwrap_or(0.0),
            preview_link: non_empty(info.preview_link),
            buy_link: non_empty(self.sale_info.and_then(|s| s.buy_link)),
            price: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_volume_normalizes() {
        let json = r#"{
            "kind": "books#volumes",
            "totalItems": 1,
            "items": [{
                "id": "zyTCAlFPjgYC",
                "volumeInfo": {
                    "title": "The Google Story",
                    "authors": ["David A. Vise", "Mark Malseed"],
                    "publisher": "Random House",
                    "publishedDate": "2005-11-15",
                    "description": "Here is the story...",
                    "pageCount": 207,
                    "categories": ["Browsers (Computer programs)"],
                    "averageRating": 3.5,
                    "imageLinks": {"thumbnail": "http://books.google.com/thumb.jpg"},
                    "previewLink": "http://books.google.com/preview"
                },
                "saleInfo": {"buyLink": "https://play.google.com/buy"}
            }]
        }"#;

        let books = serde_json::from_str::<VolumesResponse>(json)
            .unwrap()
            .into_books();
        assert_eq!(books.len(), 1);

        let book = &books[0];
        assert_eq!(book.id.as_str(), "zyTCAlFPjgYC");
        assert_eq!(book.authors, "David A. Vise, Mark Malseed");
        assert_eq!(book.page_count, 207);
        assert_eq!(book.average_rating, 3.5);
        assert_eq!(book.category, "Browsers (Computer programs)");
        assert_eq!(book.buy_link.as_deref(), Some("https://play.google.com/buy"));
        assert_eq!(book.preview_link.as_deref(), Some("http://books.google.com/preview"));
        assert_eq!(book.price, None);
    }

    #[test]
    fn test_sparse_volume_gets_defaults() {
        let json = r#"{"items": [{"id": "x1", "volumeInfo": {"authors": []}}]}"#;
        let books = serde_json::from_str::<VolumesResponse>(json)
            .unwrap()
            .into_books();

        let book = &books[0];
        assert_eq!(book.title, DEFAULT_TITLE);
        assert_eq!(book.authors, DEFAULT_AUTHORS);
        assert_eq!(book.description, DEFAULT_DESCRIPTION);
        assert_eq!(book.image, DEFAULT_IMAGE);
        assert_eq!(book.category, DEFAULT_CATEGORY);
        assert_eq!(book.publisher, DEFAULT_PUBLISHER);
        assert_eq!(book.published_date, "");
        assert_eq!(book.page_count, 0);
        assert_eq!(book.average_rating, 0.0);
        assert!(book.buy_link.is_none());
    }

    #[test]
    fn test_missing_items_means_no_books() {
        let response: VolumesResponse = serde_json::from_str(r#"{"totalItems": 0}"#).unwrap();
        assert!(response.into_books().is_empty());
    }
}
