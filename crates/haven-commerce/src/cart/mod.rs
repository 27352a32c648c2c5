//! Shopping cart module.
//!
//! Contains the cart state and its reducer, the intents that drive it, the
//! subscribable store and the derived price summary.

mod intent;
mod pricing;
mod state;
mod store;

pub use intent::CartIntent;
pub use pricing::{CartSummary, LineItemSummary};
pub use state::{CartState, LineItem};
pub use store::{CartStore, SubscriptionId};

/// Smallest quantity the cart page's quantity control offers.
pub const MIN_QUANTITY: i64 = 1;

/// Largest quantity the cart page's quantity control offers.
///
/// The store does not enforce either bound; callers that accept free-form
/// input clamp it themselves.
pub const MAX_QUANTITY: i64 = 10;
