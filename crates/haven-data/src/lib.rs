//! Catalog access for the MindHaven storefront.
//!
//! This crate provides:
//! - `FetchClient` - JSON GET over reqwest with timeout/retry policy
//! - `RetryPolicy` / `TimeoutConfig` - Per-client fetch policy
//! - `CatalogSource` - Seam over the book-search API (Google Books by default)
//! - `CatalogClient` - Category queries that degrade to empty shelves
//! - `ShelfLoader` - Concurrent, cancellable loading of every category shelf
//! - `similar_books` - Cart-page recommendations

mod catalog;
mod client;
mod error;
mod recommend;
mod retry;
mod shelves;
mod timeout;
mod volumes;

pub use catalog::*;
pub use client::*;
pub use error::*;
pub use recommend::*;
pub use retry::*;
pub use shelves::*;
pub use timeout::*;
pub use volumes::*;
