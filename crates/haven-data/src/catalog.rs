//! Category-scoped catalog queries.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use haven_commerce::catalog::{BookRecord, Category};

use crate::client::FetchClient;
use crate::error::FetchError;
use crate::volumes::VolumesResponse;

/// Base URL of the public Google Books API.
pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1";

/// Books requested per home page shelf.
pub const DEFAULT_SHELF_SIZE: u32 = 12;

/// Upper bound the volumes endpoint accepts for `maxResults`.
pub const MAX_RESULTS_LIMIT: u32 = 40;

/// Result ordering understood by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Newest,
    Relevance,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Newest => "newest",
            OrderBy::Relevance => "relevance",
        }
    }
}

/// A subject search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Subject term, sent as `q=subject:<term>`.
    pub subject: String,
    /// Maximum number of hits, clamped to `1..=MAX_RESULTS_LIMIT`.
    pub max_results: u32,
    /// Ordering.
    pub order_by: OrderBy,
}

impl CatalogQuery {
    /// Create a query.
    pub fn new(subject: impl Into<String>, max_results: u32, order_by: OrderBy) -> Self {
        Self {
            subject: subject.into(),
            max_results: max_results.clamp(1, MAX_RESULTS_LIMIT),
            order_by,
        }
    }

    /// Newest books for a home page shelf.
    pub fn for_category(category: Category, max_results: u32) -> Self {
        Self::new(category.subject(), max_results, OrderBy::Newest)
    }

    /// Value of the `q` parameter.
    pub fn q(&self) -> String {
        format!("subject:{}", self.subject)
    }

    /// Query-string parameters.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q()),
            ("maxResults", self.max_results.to_string()),
            ("orderBy", self.order_by.as_str().to_string()),
        ]
    }
}

/// Anything that can answer a subject search.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Run a search and return the raw response.
    async fn search(&self, query: &CatalogQuery) -> Result<VolumesResponse, FetchError>;
}

/// The Google Books `volumes` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleBooksSource {
    client: FetchClient,
    base_url: String,
}

impl GoogleBooksSource {
    /// Create a source against `base_url` (e.g. [`DEFAULT_CATALOG_URL`]).
    pub fn new(client: FetchClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full URL of the volumes endpoint.
    pub fn volumes_url(&self) -> String {
        format!("{}/volumes", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for GoogleBooksSource {
    async fn search(&self, query: &CatalogQuery) -> Result<VolumesResponse, FetchError> {
        let url = self.volumes_url();
        tracing::debug!(url = %url, q = %query.q(), max_results = query.max_results, "catalog search");
        self.client.get_json(&url, &query.params()).await
    }
}

/// Catalog client used by the views.
///
/// The lenient methods never fail: a failed or malformed response becomes an
/// empty list and a warning in the log.
#[derive(Clone)]
pub struct CatalogClient {
    source: Arc<dyn CatalogSource>,
    shelf_size: u32,
}

impl CatalogClient {
    /// Create a client over a source.
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self::from_arc(Arc::new(source))
    }

    /// Create a client over a shared source.
    pub fn from_arc(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            shelf_size: DEFAULT_SHELF_SIZE,
        }
    }

    /// Set the number of books requested per shelf.
    pub fn with_shelf_size(mut self, shelf_size: u32) -> Self {
        self.shelf_size = shelf_size;
        self
    }

    /// Books requested per shelf.
    pub fn shelf_size(&self) -> u32 {
        self.shelf_size
    }

    /// Run a query, surfacing failures.
    pub async fn search(&self, query: &CatalogQuery) -> Result<Vec<BookRecord>, FetchError> {
        let response = self.source.search(query).await?;
        Ok(response.into_books())
    }

    /// Run a query, degrading failures to an empty list.
    pub async fn search_or_empty(&self, query: &CatalogQuery) -> Vec<BookRecord> {
        match self.search(query).await {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!(subject = %query.subject, error = %e, "catalog search failed, showing no books");
                Vec::new()
            }
        }
    }

    /// Newest books for one home page shelf.
    pub async fn books_by_category(&self, category: Category) -> Vec<BookRecord> {
        let query = CatalogQuery::for_category(category, self.shelf_size);
        self.search_or_empty(&query).await
    }
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("shelf_size", &self.shelf_size)
            .finish_non_exhaustive()
    }
}
