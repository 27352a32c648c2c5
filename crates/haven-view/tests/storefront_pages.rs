//! Pages rendered from a live cart store.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};

use haven_commerce::prelude::*;
use haven_data::{Shelf, Shelves};
use haven_view::sections::{render_cart, render_home, render_navbar};
use haven_view::{parse_quantity_input, AddedMarkers, HomeStatus, Page};

fn book(id: &str, price: u32) -> BookRecord {
    BookRecord::new(id, format!("Book {}", id), "Author").with_price(price)
}

#[test]
fn subscriber_keeps_navbar_in_step_with_cart() {
    let mut store = CartStore::new();
    let navbar = Rc::new(RefCell::new(render_navbar(store.state())));

    let view = Rc::clone(&navbar);
    store.subscribe(move |state: &CartState| *view.borrow_mut() = render_navbar(state));

    assert!(!navbar.borrow().contains("cart-badge"));

    store.add_item(book("A", 300));
    store.add_item(book("A", 300));
    store.add_item(book("B", 100));
    assert!(navbar.borrow().contains(r#"<span class="cart-badge">3</span>"#));

    store.clear_cart();
    assert!(!navbar.borrow().contains("cart-badge"));
}

#[test]
fn cart_page_reflects_quantity_edits() {
    let mut store = CartStore::new();
    store.add_item(book("A", 300));
    store.add_item(book("B", 100));
    store.update_quantity("A", parse_quantity_input("3"));

    let html = render_cart(store.state(), Currency::INR, None);
    assert!(html.contains("₹1,000"));
    assert!(html.contains("Free"));

    store.update_quantity("B", parse_quantity_input(""));
    let html = render_cart(store.state(), Currency::INR, None);
    assert!(!html.contains("Book B"));
    assert_eq!(store.state().total_items(), 3);
}

#[test]
fn home_page_marks_recently_added_books() {
    let mut shelves = Shelves::new();
    shelves.insert(Shelf::new(Category::Fantasy, vec![book("F", 450)]));
    let status = HomeStatus::Success(shelves);

    let start = Instant::now();
    let mut markers = AddedMarkers::new();
    markers.mark(BookId::new("F"), start);

    let fresh = render_home(&status, &markers.active(start));
    assert!(fresh.contains("✓ Added!"));

    let later = start + Duration::from_secs(3);
    let stale = render_home(&status, &markers.active(later));
    assert!(!stale.contains("✓ Added!"));

    let page = Page::default().with_section(render_home(&status, &HashSet::new())).render();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>MindHaven</title>"));
}
