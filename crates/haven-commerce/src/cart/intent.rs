//! Cart intents.

use crate::catalog::BookRecord;
use crate::ids::BookId;

/// A named request to change the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
    /// Add one copy of a book, or bump the quantity of an existing line.
    AddItem(BookRecord),
    /// Drop a line entirely.
    RemoveItem(BookId),
    /// Set a line's quantity; 0 removes the line.
    UpdateQuantity { id: BookId, quantity: i64 },
    /// Empty the cart.
    ClearCart,
}

impl CartIntent {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartIntent::AddItem(_) => "add_item",
            CartIntent::RemoveItem(_) => "remove_item",
            CartIntent::UpdateQuantity { .. } => "update_quantity",
            CartIntent::ClearCart => "clear_cart",
        }
    }

    /// The book this intent targets, if any.
    pub fn target(&self) -> Option<&BookId> {
        match self {
            CartIntent::AddItem(book) => Some(&book.id),
            CartIntent::RemoveItem(id) => Some(id),
            CartIntent::UpdateQuantity { id, .. } => Some(id),
            CartIntent::ClearCart => None,
        }
    }
}
