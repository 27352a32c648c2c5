//! Book catalog module.
//!
//! Contains normalized book records, the browsable categories and the
//! placeholder pricing applied before a book enters the cart.

mod book;
mod category;
mod pricing;

pub use book::{
    encode_uri_component, BookRecord, DEFAULT_AUTHORS, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION,
    DEFAULT_IMAGE, DEFAULT_PUBLISHER, DEFAULT_TITLE,
};
pub use category::Category;
pub use pricing::{placeholder_price, PLACEHOLDER_PRICE_RANGE};
