//! Book catalog records and the in-memory cart store for MindHaven.
//!
//! This crate holds the storefront's domain types:
//!
//! - **Catalog**: normalized book records, the nine browsable categories,
//!   placeholder pricing
//! - **Cart**: line items, the cart reducer, the subscribable store and the
//!   derived price summary
//!
//! The cart store performs no I/O. Catalog data reaches it only as
//! already-normalized [`BookRecord`] values carried by intents.
//!
//! # Example
//!
//! ```rust
//! use haven_commerce::prelude::*;
//!
//! let mut store = CartStore::new();
//! let book = BookRecord::new("zyTCAlFPjgYC", "The Google Story", "David A. Vise")
//!     .with_price(300);
//!
//! store.add_item(book.clone());
//! store.add_item(book);
//!
//! assert_eq!(store.state().total_items(), 2);
//! assert_eq!(store.state().total_price(Currency::INR).amount, 600);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::BookId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::BookId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{placeholder_price, BookRecord, Category};

    // Cart
    pub use crate::cart::{
        CartIntent, CartState, CartStore, CartSummary, LineItem, SubscriptionId,
        MAX_QUANTITY, MIN_QUANTITY,
    };
}
