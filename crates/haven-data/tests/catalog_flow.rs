//! End-to-end catalog flow over canned volumes responses.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use haven_commerce::cart::CartStore;
use haven_commerce::catalog::{Category, DEFAULT_AUTHORS, DEFAULT_TITLE, PLACEHOLDER_PRICE_RANGE};
use haven_data::{
    load_shelves, similar_books, CatalogClient, CatalogQuery, CatalogSource, FetchError,
    OrderBy, RecommendationConfig, VolumesResponse,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Serves raw JSON bodies per subject; unknown subjects answer 404.
struct JsonSource {
    bodies: HashMap<&'static str, &'static str>,
}

#[async_trait]
impl CatalogSource for JsonSource {
    async fn search(&self, query: &CatalogQuery) -> Result<VolumesResponse, FetchError> {
        match self.bodies.get(query.subject.as_str()) {
            Some(body) => serde_json::from_str(body)
                .map_err(|e| FetchError::Deserialization(e.to_string())),
            None => Err(FetchError::Http {
                status: 404,
                url: format!("test://{}", query.subject),
            }),
        }
    }
}

const ROMANCE: &str = r#"{
    "totalItems": 2,
    "items": [
        {
            "id": "rom-1",
            "volumeInfo": {
                "title": "Persuasion",
                "authors": ["Jane Austen"],
                "categories": ["Fiction"],
                "pageCount": 249,
                "averageRating": 4.5,
                "previewLink": "https://books.example/preview/rom-1"
            }
        },
        { "id": "rom-2" }
    ]
}"#;

const FICTION: &str = r#"{
    "totalItems": 3,
    "items": [
        { "id": "rom-1", "volumeInfo": { "title": "Persuasion" } },
        { "id": "fic-1", "volumeInfo": { "title": "Middlemarch", "categories": ["Fiction"] } },
        { "id": "fic-2", "volumeInfo": { "title": "Emma" } }
    ]
}"#;

fn client() -> CatalogClient {
    let bodies = HashMap::from([
        ("romance", ROMANCE),
        ("Fiction", FICTION),
        ("history", "{ not json"),
        ("business", r#"{ "totalItems": 0 }"#),
    ]);
    CatalogClient::from_arc(Arc::new(JsonSource { bodies }))
}

#[tokio::test]
async fn shelves_normalize_and_isolate_bad_categories() {
    let shelves = load_shelves(&client()).await;

    assert_eq!(shelves.len(), Category::ALL.len());

    let romance = shelves.books(Category::Romance);
    assert_eq!(romance.len(), 2);
    assert_eq!(romance[0].authors, "Jane Austen");
    assert_eq!(romance[0].page_count, 249);
    assert!(romance[0].preview_link.is_some());
    assert_eq!(romance[1].title, DEFAULT_TITLE);
    assert_eq!(romance[1].authors, DEFAULT_AUTHORS);
    assert!(romance.iter().all(|b| b.price.is_none()));

    // malformed body and missing `items` both become empty shelves
    assert!(shelves.books(Category::History).is_empty());
    assert!(shelves.books(Category::Business).is_empty());
    assert!(shelves.books(Category::Thriller).is_empty());
}

#[tokio::test]
async fn strict_search_surfaces_errors() {
    let client = client();
    let query = CatalogQuery::new("history", 5, OrderBy::Newest);

    assert!(matches!(
        client.search(&query).await,
        Err(FetchError::Deserialization(_))
    ));
    assert!(client.search_or_empty(&query).await.is_empty());
}

#[tokio::test]
async fn cart_recommendations_come_from_cart_category() {
    let client = client();
    let mut rng = StdRng::seed_from_u64(7);

    let mut store = CartStore::new();
    let shelves = load_shelves(&client).await;
    let book = shelves.books(Category::Romance)[0].clone();
    store.add_item(book.priced_with(&mut rng));

    let suggestions = similar_books(
        &client,
        store.state().items(),
        RecommendationConfig::default(),
        &mut rng,
    )
    .await;

    let ids: Vec<&str> = suggestions.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["fic-1", "fic-2"]);
    assert!(suggestions
        .iter()
        .all(|b| b.price.is_some_and(|p| PLACEHOLDER_PRICE_RANGE.contains(&p))));
}
