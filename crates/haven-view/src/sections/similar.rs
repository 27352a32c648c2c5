//! "Similar books" section renderer.

use haven_commerce::catalog::BookRecord;
use haven_commerce::Currency;

use crate::format::{escape_html, format_price};

const TITLE: &str = "📚 Similar Books You Might Like";

/// Render the suggestions, or the "none" message when there are none.
pub fn render_similar_books(books: &[BookRecord], currency: Currency) -> String {
    if books.is_empty() {
        return format!(
            r#"<section class="similar-books-section" data-section="similar">
    <h3 class="similar-books-title">{}</h3>
    <div class="no-recommendations">
        <p>No recommendations available at the moment.</p>
    </div>
</section>"#,
            TITLE
        );
    }

    let cards: String = books
        .iter()
        .map(|book| render_similar_card(book, currency))
        .collect();

    format!(
        r#"<section class="similar-books-section" data-section="similar">
    <h3 class="similar-books-title">{title}</h3>
    <div class="similar-books-grid">
        {cards}
    </div>
</section>"#,
        title = TITLE,
        cards = cards
    )
}

fn render_similar_card(book: &BookRecord, currency: Currency) -> String {
    format!(
        r#"<article class="similar-book-card" data-book-id="{id}">
        <img src="{image}" alt="{title}" class="similar-book-image">
        <div class="similar-book-info">
            <h4 class="similar-book-title" title="{title}">{title}</h4>
            <p class="similar-book-author">by {authors}</p>
            <div class="similar-book-price">{price}</div>
            <button class="similar-book-add-btn" aria-label="Add {title} to cart">Add to Cart</button>
        </div>
    </article>"#,
        id = escape_html(book.id.as_str()),
        image = escape_html(&book.image),
        title = escape_html(&book.title),
        authors = escape_html(&book.authors),
        price = format_price(book.unit_price(), currency)
    )
}

/// Render the section while suggestions load.
pub fn render_similar_books_loading() -> String {
    format!(
        r#"<section class="similar-books-section" data-section="similar">
    <h3 class="similar-books-title">{}</h3>
    <div class="similar-books-loading">
        <div class="loading-spinner"></div>
        <p>Loading recommendations...</p>
    </div>
</section>"#,
        TITLE
    )
}
