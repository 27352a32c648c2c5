//! "Similar books" suggestions for the cart page.

use haven_commerce::cart::LineItem;
use haven_commerce::catalog::BookRecord;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::{CatalogClient, CatalogQuery, OrderBy};

/// Subject searched when the cart offers no category.
pub const FALLBACK_SUBJECT: &str = "fiction";

/// How many books to fetch and how many to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationConfig {
    /// Books requested from the catalog.
    pub pool: u32,
    /// Books kept after filtering.
    pub count: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { pool: 6, count: 4 }
    }
}

/// Pick the subject to search: a random distinct category among the cart's
/// line items.
pub fn pick_subject<R: Rng>(items: &[LineItem], rng: &mut R) -> String {
    let mut categories: Vec<&str> = Vec::new();
    for item in items {
        let category = item.book.category.as_str();
        if !category.is_empty() && !categories.contains(&category) {
            categories.push(category);
        }
    }

    categories
        .choose(rng)
        .map(|c| c.to_string())
        .unwrap_or_else(|| FALLBACK_SUBJECT.to_string())
}

/// Suggest books related to the cart.
///
/// An empty cart gets no suggestions and triggers no request. Books already
/// in the cart are dropped, and each suggestion carries a placeholder price.
/// Catalog failures yield an empty list.
pub async fn similar_books<R: Rng>(
    client: &CatalogClient,
    items: &[LineItem],
    config: RecommendationConfig,
    rng: &mut R,
) -> Vec<BookRecord> {
    if items.is_empty() {
        return Vec::new();
    }

    let subject = pick_subject(items, rng);
    let query = CatalogQuery::new(subject, config.pool, OrderBy::Relevance);
    let books = client.search_or_empty(&query).await;

    let suggestions: Vec<BookRecord> = books
        .into_iter()
        .filter(|book| !items.iter().any(|item| item.id() == &book.id))
        .take(config.count)
        .map(|book| book.priced_with(rng))
        .collect();

    tracing::debug!(subject = %query.subject, suggestions = suggestions.len(), "similar books");
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::stub::StubSource;
    use haven_commerce::catalog::PLACEHOLDER_PRICE_RANGE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn item(id: &str, category: &str) -> LineItem {
        LineItem::new(BookRecord::new(id, id, "Author").with_category(category), 1)
    }

    #[test]
    fn test_pick_subject_from_cart_categories() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = vec![item("a", "Poetry"), item("b", "Poetry"), item("c", "Drama")];

        for _ in 0..50 {
            let subject = pick_subject(&items, &mut rng);
            assert!(subject == "Poetry" || subject == "Drama");
        }
    }

    #[test]
    fn test_pick_subject_falls_back() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_subject(&[], &mut rng), FALLBACK_SUBJECT);
        assert_eq!(pick_subject(&[item("a", "")], &mut rng), FALLBACK_SUBJECT);
    }

    #[tokio::test]
    async fn test_similar_books_filters_cart_and_prices() {
        let source = Arc::new(
            StubSource::default().with_books("Poetry", vec!["a", "s1", "s2", "s3", "s4", "s5"]),
        );
        let client = CatalogClient::from_arc(source.clone());
        let mut rng = StdRng::seed_from_u64(9);

        let books = similar_books(
            &client,
            &[item("a", "Poetry")],
            RecommendationConfig::default(),
            &mut rng,
        )
        .await;

        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3", "s4"]);
        assert!(books
            .iter()
            .all(|b| b.price.is_some_and(|p| PLACEHOLDER_PRICE_RANGE.contains(&p))));

        let seen = source.seen.lock().unwrap();
        assert_eq!(seen[0].max_results, 6);
        assert_eq!(seen[0].order_by, OrderBy::Relevance);
    }

    #[tokio::test]
    async fn test_empty_cart_makes_no_request() {
        let source = Arc::new(StubSource::default());
        let client = CatalogClient::from_arc(source.clone());
        let mut rng = StdRng::seed_from_u64(3);

        let books = similar_books(&client, &[], RecommendationConfig::default(), &mut rng).await;

        assert!(books.is_empty());
        assert!(source.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_search_yields_nothing() {
        let client = CatalogClient::new(StubSource::default().with_status("Poetry", 500));
        let mut rng = StdRng::seed_from_u64(3);

        let books = similar_books(
            &client,
            &[item("a", "Poetry")],
            RecommendationConfig::default(),
            &mut rng,
        )
        .await;
        assert!(books.is_empty());
    }
}
