//! Cart state and its reducer.

use crate::cart::CartIntent;
use crate::catalog::BookRecord;
use crate::ids::BookId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A book in the cart with its quantity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    /// The book as it was first added.
    #[serde(flatten)]
    pub book: BookRecord,
    /// Number of copies. Not bounded by the store.
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item.
    pub fn new(book: BookRecord, quantity: i64) -> Self {
        Self { book, quantity }
    }

    /// Catalog id of the line.
    pub fn id(&self) -> &BookId {
        &self.book.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self, currency: Currency) -> Money {
        Money::new(self.book.unit_price(), currency).multiply(self.quantity)
    }
}

/// The whole cart.
///
/// `items` is unique by book id and kept in first-added order. `total_items`
/// is recomputed from `items` after every transition, so it always equals
/// the sum of the line quantities.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<LineItem>,
    total_items: i64,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in first-added order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by book id.
    pub fn get(&self, id: &BookId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Check whether a book is already in the cart.
    pub fn contains(&self, id: &BookId) -> bool {
        self.get(id).is_some()
    }

    /// Sum of `price * quantity` over all lines, computed on demand.
    pub fn total_price(&self, currency: Currency) -> Money {
        Money::sum(self.items.iter().map(|i| i.line_total(currency)), currency)
    }

    /// Pure transition: consume the state and return the next one.
    pub fn reduce(mut self, intent: CartIntent) -> Self {
        self.apply(intent);
        self
    }

    /// Apply an intent in place. Returns whether the state changed.
    ///
    /// Every intent is total: unknown ids leave the state untouched.
    pub fn apply(&mut self, intent: CartIntent) -> bool {
        let changed = match intent {
            CartIntent::AddItem(book) => self.add_item(book),
            CartIntent::RemoveItem(id) => self.remove_item(&id),
            CartIntent::UpdateQuantity { id, quantity } => self.update_quantity(&id, quantity),
            CartIntent::ClearCart => self.clear(),
        };
        self.recount();
        changed
    }

    /// Transitions whose total would leave `i64` are rejected whole, so
    /// `total_items` is always the exact sum of the quantities.
    fn add_item(&mut self, book: BookRecord) -> bool {
        if self.total_items.checked_add(1).is_none() {
            return false;
        }
        match self.items.iter_mut().find(|item| item.book.id == book.id) {
            // The stored record wins; the incoming payload only bumps the count.
            Some(existing) => match existing.quantity.checked_add(1) {
                Some(quantity) => existing.quantity = quantity,
                None => return false,
            },
            None => self.items.push(LineItem::new(book, 1)),
        }
        true
    }

    fn remove_item(&mut self, id: &BookId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() < len_before
    }

    fn update_quantity(&mut self, id: &BookId, quantity: i64) -> bool {
        if quantity == 0 {
            return self.remove_item(id);
        }
        let total = self.total_items;
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                let next_total =
                    i128::from(total) - i128::from(item.quantity) + i128::from(quantity);
                if i64::try_from(next_total).is_err() {
                    return false;
                }
                let changed = item.quantity != quantity;
                item.quantity = quantity;
                changed
            }
            None => false,
        }
    }

    fn clear(&mut self) -> bool {
        let changed = !self.items.is_empty();
        self.items.clear();
        changed
    }

    fn recount(&mut self) {
        // Summed wide: intermediate sums of mixed-sign quantities may leave
        // `i64` even when the total fits.
        let sum: i128 = self.items.iter().map(|item| i128::from(item.quantity)).sum();
        if let Ok(total) = i64::try_from(sum) {
            self.total_items = total;
        }
    }
}
