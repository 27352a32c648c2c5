//! Concurrent loading of the home page shelves.

use futures::future::{AbortHandle, Abortable, Aborted};
use futures::stream::{FuturesUnordered, StreamExt};
use haven_commerce::catalog::{BookRecord, Category};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::CatalogClient;
use crate::error::LoadError;

/// The books shown for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shelf {
    pub category: Category,
    pub books: Vec<BookRecord>,
}

impl Shelf {
    pub fn new(category: Category, books: Vec<BookRecord>) -> Self {
        Self { category, books }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// A set of shelves kept in home page order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Shelves {
    shelves: Vec<Shelf>,
}

impl Shelves {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the shelf for its category.
    pub fn insert(&mut self, shelf: Shelf) {
        match self
            .shelves
            .binary_search_by_key(&shelf.category, |s| s.category)
        {
            Ok(pos) => self.shelves[pos] = shelf,
            Err(pos) => self.shelves.insert(pos, shelf),
        }
    }

    pub fn get(&self, category: Category) -> Option<&Shelf> {
        self.shelves.iter().find(|s| s.category == category)
    }

    /// Books on a shelf; empty when the category was not loaded.
    pub fn books(&self, category: Category) -> &[BookRecord] {
        self.get(category).map(|s| s.books.as_slice()).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shelf> {
        self.shelves.iter()
    }

    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    /// Books across every shelf.
    pub fn total_books(&self) -> usize {
        self.shelves.iter().map(|s| s.books.len()).sum()
    }

    /// Find a book on any shelf.
    pub fn find_book(&self, id: &str) -> Option<&BookRecord> {
        self.shelves
            .iter()
            .flat_map(|s| s.books.iter())
            .find(|b| b.id.as_str() == id)
    }
}

impl<'a> IntoIterator for &'a Shelves {
    type Item = &'a Shelf;
    type IntoIter = std::slice::Iter<'a, Shelf>;

    fn into_iter(self) -> Self::IntoIter {
        self.shelves.iter()
    }
}

/// Load every category shelf concurrently.
pub async fn load_shelves(client: &CatalogClient) -> Shelves {
    load_categories(client, &Category::ALL, |_| {}).await
}

/// Load the given categories concurrently.
///
/// Requests are independent: each shelf is handed to `on_shelf` as soon as it
/// arrives, and a failing category only yields an empty shelf.
pub async fn load_categories<F>(
    client: &CatalogClient,
    categories: &[Category],
    mut on_shelf: F,
) -> Shelves
where
    F: FnMut(&Shelf),
{
    let mut pending: FuturesUnordered<_> = categories
        .iter()
        .map(|&category| async move {
            Shelf::new(category, client.books_by_category(category).await)
        })
        .collect();

    let mut shelves = Shelves::new();
    while let Some(shelf) = pending.next().await {
        tracing::debug!(category = %shelf.category, books = shelf.books.len(), "shelf loaded");
        on_shelf(&shelf);
        shelves.insert(shelf);
    }

    tracing::info!(
        shelves = shelves.len(),
        books = shelves.total_books(),
        "catalog load complete"
    );
    shelves
}

/// Starts background shelf loads.
#[derive(Debug, Clone)]
pub struct ShelfLoader {
    client: CatalogClient,
}

impl ShelfLoader {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// Start loading every category.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self) -> ShelfLoad {
        self.start_categories(Category::ALL.to_vec())
    }

    /// Start loading the given categories.
    ///
    /// Each shelf is also sent to the returned [`ShelfLoad`] as soon as its
    /// category answers; see [`ShelfLoad::next_shelf`].
    pub fn start_categories(&self, categories: Vec<Category>) -> ShelfLoad {
        let client = self.client.clone();
        let (abort, registration) = AbortHandle::new_pair();
        let (sender, arrivals) = mpsc::unbounded_channel();

        let load = async move {
            load_categories(&client, &categories, |shelf| {
                // Nobody listening is fine; `wait` still has the full set.
                let _ = sender.send(shelf.clone());
            })
            .await
        };
        let handle = tokio::spawn(Abortable::new(load, registration));

        ShelfLoad {
            handle,
            abort,
            arrivals,
        }
    }
}

/// A shelf load running in the background.
#[derive(Debug)]
pub struct ShelfLoad {
    handle: JoinHandle<Result<Shelves, Aborted>>,
    abort: AbortHandle,
    arrivals: mpsc::UnboundedReceiver<Shelf>,
}

impl ShelfLoad {
    /// Next shelf to arrive, in completion order.
    ///
    /// A slow category does not hold back the others. Returns `None` once
    /// every category has answered, or as soon as the load is cancelled:
    /// shelves still buffered at that point are discarded.
    pub async fn next_shelf(&mut self) -> Option<Shelf> {
        if self.abort.is_aborted() {
            return None;
        }
        let shelf = self.arrivals.recv().await?;
        if self.abort.is_aborted() {
            return None;
        }
        Some(shelf)
    }

    /// Abort the load. Its results are never delivered.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }

    /// A handle that can cancel this load from elsewhere.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.abort.clone())
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the load.
    ///
    /// Returns `None` once the load was cancelled, even if it had already
    /// completed.
    pub async fn wait(self) -> Result<Option<Shelves>, LoadError> {
        let cancelled = self.abort.clone();
        match self.handle.await {
            Ok(Ok(_)) if cancelled.is_aborted() => Ok(None),
            Ok(Ok(shelves)) => Ok(Some(shelves)),
            Ok(Err(Aborted)) => {
                tracing::debug!("shelf load cancelled");
                Ok(None)
            }
            Err(e) if e.is_cancelled() => Ok(None),
            Err(e) => Err(LoadError::Task(e.to_string())),
        }
    }
}

/// Cancels a [`ShelfLoad`] without owning it.
#[derive(Debug, Clone)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}
