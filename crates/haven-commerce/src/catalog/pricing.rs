//! Placeholder pricing.
//!
//! The upstream catalog carries no reliable price, so callers stamp a
//! placeholder onto a book before dispatching it to the cart. The cart store
//! never draws random numbers itself.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::catalog::BookRecord;

/// Range of placeholder prices, in whole currency units.
pub const PLACEHOLDER_PRICE_RANGE: RangeInclusive<u32> = 200..=699;

/// Draw a placeholder price.
pub fn placeholder_price<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(PLACEHOLDER_PRICE_RANGE)
}

impl BookRecord {
    /// Return the book stamped with a fresh placeholder price.
    pub fn priced_with<R: Rng>(self, rng: &mut R) -> Self {
        let price = placeholder_price(rng);
        self.with_price(price)
    }
}
