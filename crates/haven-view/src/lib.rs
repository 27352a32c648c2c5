//! View layer for the MindHaven storefront.
//!
//! Renders the storefront as HTML strings and holds the UI-only state that
//! never reaches the cart:
//! - `sections` - Navbar, category shelves, home page, cart page, suggestions
//! - `Page` - Document shell wrapping rendered sections
//! - `AddedMarkers` - Short-lived "added" highlight per book card
//! - `HomeStatus` - Load state of the home page
//! - `parse_quantity_input` - Quantity field parsing
//!
//! ```
//! use haven_commerce::prelude::*;
//! use haven_view::sections::render_navbar;
//!
//! let mut store = CartStore::new();
//! store.add_item(BookRecord::new("b1", "Dune", "Frank Herbert").with_price(450));
//! assert!(render_navbar(store.state()).contains(r#"<span class="cart-badge">1</span>"#));
//! ```

mod feedback;
mod format;
mod page;
mod quantity;
pub mod sections;
mod status;

pub use feedback::*;
pub use format::*;
pub use page::*;
pub use quantity::*;
pub use status::*;
