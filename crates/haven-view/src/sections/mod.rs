//! Section renderers for the storefront pages.

mod cart;
mod home;
mod navbar;
mod shelf;
mod similar;

pub use cart::*;
pub use home::*;
pub use navbar::*;
pub use shelf::*;
pub use similar::*;

/// Link target of the home page.
pub const HOME_HREF: &str = "index.html";

/// Link target of the cart page.
pub const CART_HREF: &str = "cart.html";
