//! Navbar section renderer.

use haven_commerce::cart::CartState;

use super::{CART_HREF, HOME_HREF};

/// Render the navbar. The cart badge only appears when the cart holds items.
pub fn render_navbar(state: &CartState) -> String {
    let total = state.total_items();
    let badge = if total > 0 {
        format!(r#"<span class="cart-badge">{}</span>"#, total)
    } else {
        String::new()
    };

    format!(
        r#"<nav class="navbar" data-section="navbar">
    <div class="navbar-container">
        <a href="{home}" class="navbar-logo">🧠 MindHaven</a>
        <ul class="navbar-links">
            <li><a href="{home}" class="navbar-link">Home</a></li>
            <li><a href="{cart}" class="navbar-link cart-link">🛒 Cart{badge}</a></li>
        </ul>
    </div>
</nav>"#,
        home = HOME_HREF,
        cart = CART_HREF,
        badge = badge
    )
}
