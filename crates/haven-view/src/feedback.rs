//! Short-lived "added to cart" feedback.
//!
//! Markers live entirely in the view. They never read or write cart state,
//! so expiring one has no effect on the cart.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use haven_commerce::BookId;

/// How long a book card shows "Added!".
pub const ADDED_MARKER_TTL: Duration = Duration::from_secs(2);

/// Per-book self-expiring markers.
///
/// Time is passed in explicitly so callers (and tests) control the clock.
#[derive(Debug, Clone)]
pub struct AddedMarkers {
    expires_at: HashMap<BookId, Instant>,
    ttl: Duration,
}

impl Default for AddedMarkers {
    fn default() -> Self {
        Self::new()
    }
}

impl AddedMarkers {
    pub fn new() -> Self {
        Self::with_ttl(ADDED_MARKER_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            expires_at: HashMap::new(),
            ttl,
        }
    }

    /// Mark a book as just added. Re-marking restarts its lifetime.
    pub fn mark(&mut self, id: BookId, now: Instant) {
        self.expires_at.insert(id, now + self.ttl);
    }

    /// Whether the book still shows as added.
    pub fn is_marked(&self, id: &BookId, now: Instant) -> bool {
        self.expires_at.get(id).is_some_and(|&expiry| now < expiry)
    }

    /// Drop expired markers and return how many were removed.
    pub fn purge(&mut self, now: Instant) -> usize {
        let before = self.expires_at.len();
        self.expires_at.retain(|_, expiry| now < *expiry);
        before - self.expires_at.len()
    }

    /// Books currently marked.
    pub fn active(&self, now: Instant) -> HashSet<BookId> {
        self.expires_at
            .iter()
            .filter(|(_, &expiry)| now < expiry)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.expires_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expires_at.is_empty()
    }
}
