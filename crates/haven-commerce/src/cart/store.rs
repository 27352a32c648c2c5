//! Subscribable cart store.

use std::fmt;

use crate::cart::{CartIntent, CartState};
use crate::catalog::BookRecord;
use crate::ids::BookId;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&CartState)>;

/// Single source of truth for the cart.
///
/// Each dispatch runs the reducer to completion and then calls every
/// subscriber, in subscription order, with the new state. Subscribers are
/// called after every dispatch, including ones that leave the state
/// unchanged, and never see a half-applied transition.
pub struct CartStore {
    state: CartState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self {
            state: CartState::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply an intent and notify subscribers. Returns whether the state changed.
    pub fn dispatch(&mut self, intent: CartIntent) -> bool {
        let name = intent.name();
        let target = intent.target().map(|id| id.to_string());

        let changed = self.state.apply(intent);

        tracing::debug!(
            intent = name,
            target = target.as_deref().unwrap_or("-"),
            changed,
            lines = self.state.items().len(),
            total_items = self.state.total_items(),
            "cart intent applied"
        );

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
        changed
    }

    /// Add one copy of a book.
    pub fn add_item(&mut self, book: BookRecord) -> bool {
        self.dispatch(CartIntent::AddItem(book))
    }

    /// Remove a line.
    pub fn remove_item(&mut self, id: impl Into<BookId>) -> bool {
        self.dispatch(CartIntent::RemoveItem(id.into()))
    }

    /// Set a line's quantity; 0 removes it.
    pub fn update_quantity(&mut self, id: impl Into<BookId>, quantity: i64) -> bool {
        self.dispatch(CartIntent::UpdateQuantity {
            id: id.into(),
            quantity,
        })
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> bool {
        self.dispatch(CartIntent::ClearCart)
    }

    /// Register a callback run after every dispatch.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&CartState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() < len_before
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn book(id: &str) -> BookRecord {
        BookRecord::new(id, "Title", "Author").with_price(200)
    }

    #[test]
    fn test_store_operations() {
        let mut store = CartStore::new();
        assert!(store.add_item(book("A")));
        assert!(store.add_item(book("A")));
        assert!(store.add_item(book("B")));
        assert_eq!(store.state().total_items(), 3);

        assert!(store.update_quantity("B", 4));
        assert_eq!(store.state().total_items(), 6);

        assert!(store.remove_item("A"));
        assert_eq!(store.state().total_items(), 4);

        assert!(store.clear_cart());
        assert!(store.state().is_empty());
        assert!(!store.clear_cart());
    }

    #[test]
    fn test_subscribers_see_committed_state() {
        let mut store = CartStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |state: &CartState| {
            let sum: i64 = state.items().iter().map(|i| i.quantity).sum();
            sink.borrow_mut().push((state.total_items(), sum));
        });

        store.add_item(book("A"));
        store.add_item(book("B"));
        store.update_quantity("A", 7);
        store.remove_item("missing");
        store.clear_cart();

        let seen = seen.borrow();
        assert_eq!(*seen, vec![(1, 1), (2, 2), (8, 8), (8, 8), (0, 0)]);
    }

    #[test]
    fn test_subscribers_called_in_order() {
        let mut store = CartStore::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for name in ["navbar", "cart-page"] {
            let log = Rc::clone(&log);
            store.subscribe(move |_: &CartState| log.borrow_mut().push(name));
        }

        store.add_item(book("A"));
        assert_eq!(*log.borrow(), vec!["navbar", "cart-page"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = CartStore::new();
        let count = Rc::new(RefCell::new(0));

        let c = Rc::clone(&count);
        let id = store.subscribe(move |_: &CartState| *c.borrow_mut() += 1);
        store.add_item(book("A"));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_item(book("A"));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }
}
