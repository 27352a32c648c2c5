//! Cart page renderer.

use haven_commerce::cart::{CartState, CartSummary, LineItem};
use haven_commerce::catalog::BookRecord;
use haven_commerce::Currency;

use super::{render_similar_books, render_similar_books_loading, HOME_HREF};
use crate::format::{
    escape_html, format_price, item_count_label, star_rating, truncate_description,
};
use crate::quantity::QuantityControls;

/// Render the cart page.
///
/// `similar` is `None` while suggestions are still loading. An empty cart
/// renders the empty state and no suggestions.
pub fn render_cart(state: &CartState, currency: Currency, similar: Option<&[BookRecord]>) -> String {
    if state.is_empty() {
        return render_cart_empty();
    }

    let items: String = state
        .items()
        .iter()
        .map(|item| render_line_item(item, currency))
        .collect();

    let similar = match similar {
        Some(books) => render_similar_books(books, currency),
        None => render_similar_books_loading(),
    };

    format!(
        r#"<main class="cart-container" data-section="cart">
    <div class="cart-header">
        <h2 class="cart-title">🛒 Your Cart ({count})</h2>
        <button class="clear-cart-btn">Clear Cart</button>
    </div>
    <div class="cart-content">
        <div class="cart-items">
            {items}
        </div>
        {summary}
    </div>
    {similar}
</main>"#,
        count = item_count_label(state.total_items()),
        items = items,
        summary = render_order_summary(&state.summary(currency)),
        similar = similar
    )
}

fn render_line_item(item: &LineItem, currency: Currency) -> String {
    let book = &item.book;
    let controls = QuantityControls::for_quantity(item.quantity);
    let id = escape_html(book.id.as_str());

    format!(
        r#"<div class="cart-item" data-book-id="{id}">
        <img src="{image}" alt="{title}" class="cart-item-image">
        <div class="cart-item-details">
            <h3 class="cart-item-title" title="{title}">{title}</h3>
            <p class="cart-item-author">by {authors}</p>
            <p class="cart-item-description">{description}</p>
            <div class="cart-item-rating">{rating}</div>
        </div>
        <div class="cart-item-actions">
            <div class="cart-item-price">{price}</div>
            <div class="quantity-controls">
                <label for="qty-{id}" class="quantity-label">Qty:</label>
                <div class="quantity-input-group">
                    <button class="quantity-btn" aria-label="Decrease quantity"{dec}>-</button>
                    <input id="qty-{id}" type="number" min="1" max="10" value="{quantity}" class="quantity-input" aria-label="Quantity">
                    <button class="quantity-btn" aria-label="Increase quantity"{inc}>+</button>
                </div>
            </div>
            <div class="cart-item-total">Total: {total}</div>
            <button class="remove-item-btn" aria-label="Remove {title} from cart">Remove</button>
        </div>
    </div>"#,
        id = id,
        image = escape_html(&book.image),
        title = escape_html(&book.title),
        authors = escape_html(&book.authors),
        description = escape_html(&truncate_description(&book.description)),
        rating = star_rating(book.average_rating),
        price = format_price(book.unit_price(), currency),
        quantity = item.quantity,
        dec = disabled_attr(!controls.can_decrease),
        inc = disabled_attr(!controls.can_increase),
        total = item.line_total(currency).display()
    )
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}

/// Render the order summary with its dead-end checkout button.
pub fn render_order_summary(summary: &CartSummary) -> String {
    let shipping = if summary.free_shipping() {
        r#"<span class="free-shipping">Free</span>"#.to_string()
    } else {
        format!("<span>{}</span>", summary.shipping.display())
    };

    format!(
        r#"<aside class="cart-summary">
            <h3>Order Summary</h3>
            <div class="summary-row"><span>Total Items:</span><span>{items}</span></div>
            <div class="summary-row"><span>Subtotal:</span><span>{subtotal}</span></div>
            <div class="summary-row"><span>Shipping:</span>{shipping}</div>
            <div class="summary-row total-row"><span>Total:</span><span>{total}</span></div>
            <button class="checkout-btn">Proceed to Checkout</button>
            <a href="{home}" class="continue-shopping-link">Continue Shopping</a>
        </aside>"#,
        items = summary.total_items,
        subtotal = summary.subtotal.display(),
        shipping = shipping,
        total = summary.total.display(),
        home = HOME_HREF
    )
}

pub fn render_cart_empty() -> String {
    format!(
        r#"<main class="cart-empty" data-section="cart">
    <div class="empty-cart-content">
        <div class="empty-cart-icon">🛒</div>
        <h2 class="empty-cart-title">Your Cart is Empty</h2>
        <p class="empty-cart-message">Your cart is currently empty. Browse books and add your favorites!</p>
        <a href="{}" class="continue-shopping-btn">Continue Shopping</a>
    </div>
</main>"#,
        HOME_HREF
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_commerce::cart::CartIntent;
    use pretty_assertions::assert_eq;

    const NO_BOOKS: &[BookRecord] = &[];

    fn scenario() -> CartState {
        CartState::new()
            .reduce(CartIntent::AddItem(BookRecord::new("A", "Alpha", "X").with_price(300)))
            .reduce(CartIntent::AddItem(BookRecord::new("B", "Beta", "Y").with_price(100)))
            .reduce(CartIntent::UpdateQuantity {
                id: "A".into(),
                quantity: 3,
            })
    }

    #[test]
    fn test_empty_cart() {
        let html = render_cart(&CartState::new(), Currency::INR, Some(NO_BOOKS));
        assert_eq!(html, render_cart_empty());
        assert!(html.contains("Continue Shopping"));
        assert!(!html.contains("similar-books"));
    }

    #[test]
    fn test_cart_totals() {
        let html = render_cart(&scenario(), Currency::INR, Some(NO_BOOKS));
        assert!(html.contains("🛒 Your Cart (4 items)"));
        assert!(html.contains("Total: ₹900"));
        assert!(html.contains("<span>Subtotal:</span><span>₹1,000</span>"));
        assert!(html.contains(r#"<span class="free-shipping">Free</span>"#));
        assert!(html.contains("Proceed to Checkout"));
    }

    #[test]
    fn test_quantity_buttons_disabled_at_bounds() {
        let state = scenario().reduce(CartIntent::UpdateQuantity {
            id: "A".into(),
            quantity: 10,
        });
        let html = render_cart(&state, Currency::INR, Some(NO_BOOKS));

        // A is at the upper bound, B at the lower bound.
        assert_eq!(html.matches(r#"aria-label="Increase quantity" disabled"#).count(), 1);
        assert_eq!(html.matches(r#"aria-label="Decrease quantity" disabled"#).count(), 1);
    }

    #[test]
    fn test_similar_section_states() {
        let loading = render_cart(&scenario(), Currency::INR, None);
        assert!(loading.contains("Loading recommendations..."));

        let none = render_cart(&scenario(), Currency::INR, Some(NO_BOOKS));
        assert!(none.contains("No recommendations available"));
    }

    #[test]
    fn test_long_description_truncated() {
        let mut book = BookRecord::new("L", "Long", "Z").with_price(200);
        book.description = "x".repeat(400);
        let state = CartState::new().reduce(CartIntent::AddItem(book));

        let html = render_cart(&state, Currency::INR, Some(NO_BOOKS));
        assert!(html.contains(&format!("{}...", "x".repeat(150))));
        assert!(!html.contains(&"x".repeat(151)));
    }
}
