//! Derived cart pricing.
//!
//! Nothing here is stored in [`CartState`]; a summary is rebuilt from the
//! line items whenever a view asks for one.

use crate::cart::CartState;
use crate::ids::BookId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// Order summary shown next to the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSummary {
    /// Sum of line quantities.
    pub total_items: i64,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping is always free.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineItemSummary>,
}

/// Pricing for a single line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItemSummary {
    /// Book id.
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Unit price (0 when unpriced).
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub total: Money,
}

impl CartSummary {
    /// Build a summary for the given state.
    pub fn from_state(state: &CartState, currency: Currency) -> Self {
        let lines: Vec<LineItemSummary> = state
            .items()
            .iter()
            .map(|item| LineItemSummary {
                id: item.id().clone(),
                title: item.book.title.clone(),
                unit_price: Money::new(item.book.unit_price(), currency),
                quantity: item.quantity,
                total: item.line_total(currency),
            })
            .collect();

        let subtotal = state.total_price(currency);
        let shipping = Money::zero(currency);
        let total = Money::sum([subtotal, shipping], currency);

        Self {
            total_items: state.total_items(),
            subtotal,
            shipping,
            total,
            lines,
        }
    }

    /// Whether shipping costs nothing.
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

impl CartState {
    /// Build the order summary for this state.
    pub fn summary(&self, currency: Currency) -> CartSummary {
        CartSummary::from_state(self, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartIntent;
    use crate::catalog::BookRecord;

    #[test]
    fn test_summary() {
        let state = CartState::new()
            .reduce(CartIntent::AddItem(BookRecord::new("A", "Alpha", "X").with_price(300)))
            .reduce(CartIntent::AddItem(BookRecord::new("B", "Beta", "Y").with_price(100)))
            .reduce(CartIntent::UpdateQuantity { id: "A".into(), quantity: 3 });

        let summary = state.summary(Currency::INR);
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.subtotal.amount, 1000);
        assert!(summary.free_shipping());
        assert_eq!(summary.total.amount, 1000);
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].title, "Alpha");
        assert_eq!(summary.lines[0].total.amount, 900);
        assert_eq!(summary.lines[1].unit_price.amount, 100);
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartState::new().summary(Currency::USD);
        assert_eq!(summary.total_items, 0);
        assert!(summary.total.is_zero());
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total.currency, Currency::USD);
    }
}
