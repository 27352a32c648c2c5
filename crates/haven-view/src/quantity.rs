//! Quantity controls on the cart page.

use haven_commerce::cart::{MAX_QUANTITY, MIN_QUANTITY};

/// Parse the quantity field.
///
/// Reads an optional sign and the leading digits, ignoring anything after
/// them. Unparseable input reads as 0 and negatives clamp to 0, so clearing
/// the field removes the line.
pub fn parse_quantity_input(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().unwrap_or(if end > 0 { i64::MAX } else { 0 });

    if negative {
        0
    } else {
        value
    }
}

/// Enabled state of the -/+ buttons for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityControls {
    pub quantity: i64,
    pub can_decrease: bool,
    pub can_increase: bool,
}

impl QuantityControls {
    pub fn for_quantity(quantity: i64) -> Self {
        Self {
            quantity,
            can_decrease: quantity > MIN_QUANTITY,
            can_increase: quantity < MAX_QUANTITY,
        }
    }

    /// Quantity after pressing "-".
    pub fn decreased(&self) -> i64 {
        self.quantity.saturating_sub(1)
    }

    /// Quantity after pressing "+".
    pub fn increased(&self) -> i64 {
        self.quantity.saturating_add(1)
    }
}
