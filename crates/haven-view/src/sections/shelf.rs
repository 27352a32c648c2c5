//! Category shelf renderer.
//!
//! One renderer serves every category.

use std::collections::HashSet;

use haven_commerce::catalog::{BookRecord, Category};
use haven_commerce::BookId;

use crate::format::{escape_html, page_count_label, star_rating};

/// Render a category shelf.
///
/// Books in `added` show the disabled "Added!" button.
pub fn render_shelf(category: Category, books: &[BookRecord], added: &HashSet<BookId>) -> String {
    let body = if books.is_empty() {
        r#"<div class="no-books-message">
            <p>No books available in this category</p>
        </div>"#
            .to_string()
    } else {
        let cards: String = books
            .iter()
            .map(|book| render_book_card(book, added.contains(&book.id)))
            .collect();
        format!(r#"<div class="books-grid">{}</div>"#, cards)
    };

    format!(
        r#"<section class="category-section" data-section="shelf" data-category="{subject}">
    <h2 class="category-title">{label}</h2>
    {body}
</section>"#,
        subject = category.subject(),
        label = escape_html(category.label()),
        body = body
    )
}

fn render_book_card(book: &BookRecord, added: bool) -> String {
    let preview = match &book.preview_link {
        Some(link) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="preview-button">Preview</a>"#,
            escape_html(link)
        ),
        None => String::new(),
    };

    let button = if added {
        r#"<button class="add-to-cart-button added" disabled>✓ Added!</button>"#
    } else {
        r#"<button class="add-to-cart-button">🛒 Add to Cart</button>"#
    };

    format!(
        r#"<article class="book-card" data-book-id="{id}">
        <img src="{image}" alt="{title}" class="book-cover">
        <div class="book-info">
            <h3 class="book-title" title="{title}">{title}</h3>
            <p class="book-author">by {authors}</p>
            <div class="book-meta">
                <span class="book-rating">{rating}</span>
                <span class="book-pages">{pages} pages</span>
            </div>
            <div class="book-actions">
                <a href="{buy}" target="_blank" rel="noopener noreferrer" class="buy-button">Buy Now</a>
                {preview}
            </div>
            {button}
        </div>
    </article>"#,
        id = escape_html(book.id.as_str()),
        image = escape_html(&book.image),
        title = escape_html(&book.title),
        authors = escape_html(&book.authors),
        rating = star_rating(book.average_rating),
        pages = page_count_label(book.page_count),
        buy = escape_html(&book.purchase_link()),
        preview = preview,
        button = button
    )
}
