//! Interactive shopping session.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

use anyhow::{bail, Context as _, Result};
use dialoguer::{Confirm, Input, Select};
use haven_commerce::cart::{CartState, CartStore, LineItem};
use haven_commerce::catalog::{BookRecord, Category};
use haven_commerce::{BookId, Currency};
use haven_data::{similar_books, CatalogClient, RecommendationConfig, Shelf, Shelves};
use haven_view::sections::{render_cart, render_home_shelves, render_navbar, CART_HREF, HOME_HREF};
use haven_view::{
    format_price, item_count_label, parse_quantity_input, AddedMarkers, Page, QuantityControls,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::ShopArgs;
use crate::context::Context;
use crate::output::{added_badge, price};

/// Cart state and UI feedback for one shopping session.
///
/// The cart lives in a [`CartStore`]; the session's own subscribers keep the
/// navbar badge current and, with an HTML directory, re-render the cart page
/// after every dispatch.
pub struct ShopSession {
    store: CartStore,
    markers: AddedMarkers,
    shelves: Shelves,
    currency: Currency,
    rng: StdRng,
    badge: Rc<Cell<i64>>,
    html_dir: Option<PathBuf>,
}

impl ShopSession {
    pub fn new(currency: Currency, html_dir: Option<PathBuf>) -> Self {
        Self::with_rng(currency, html_dir, StdRng::from_os_rng())
    }

    pub fn with_rng(currency: Currency, html_dir: Option<PathBuf>, rng: StdRng) -> Self {
        let mut store = CartStore::new();

        let badge = Rc::new(Cell::new(0));
        let badge_view = Rc::clone(&badge);
        store.subscribe(move |state: &CartState| badge_view.set(state.total_items()));

        if let Some(dir) = html_dir.clone() {
            store.subscribe(move |state: &CartState| {
                let html = cart_page(state, currency, None);
                if let Err(e) = write_page(&dir, CART_HREF, &html) {
                    tracing::warn!(error = %e, "failed to re-render cart page");
                }
            });
        }

        Self {
            store,
            markers: AddedMarkers::new(),
            shelves: Shelves::new(),
            currency,
            rng,
            badge,
            html_dir,
        }
    }

    pub fn state(&self) -> &CartState {
        self.store.state()
    }

    /// Item count shown on the navbar badge.
    pub fn badge(&self) -> i64 {
        self.badge.get()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add a shelf book with a fresh placeholder price and mark it as added.
    pub fn add_from_shelf(&mut self, book: BookRecord, now: Instant) -> BookRecord {
        let priced = book.priced_with(&mut self.rng);
        self.markers.purge(now);
        self.markers.mark(priced.id.clone(), now);
        self.store.add_item(priced.clone());
        priced
    }

    /// Add an already priced suggestion.
    pub fn add_suggestion(&mut self, book: BookRecord) {
        self.store.add_item(book);
    }

    pub fn is_added(&self, id: &BookId, now: Instant) -> bool {
        self.markers.is_marked(id, now)
    }

    /// Apply the quantity field's raw input. Returns the quantity dispatched.
    pub fn set_quantity_input(&mut self, id: &BookId, input: &str) -> i64 {
        let quantity = parse_quantity_input(input);
        self.store.update_quantity(id.clone(), quantity);
        quantity
    }

    /// Press "+". Does nothing at the upper bound.
    pub fn increase(&mut self, id: &BookId) -> bool {
        match self.controls(id) {
            Some(controls) if controls.can_increase => {
                self.store.update_quantity(id.clone(), controls.increased())
            }
            _ => false,
        }
    }

    /// Press "-". Does nothing at the lower bound.
    pub fn decrease(&mut self, id: &BookId) -> bool {
        match self.controls(id) {
            Some(controls) if controls.can_decrease => {
                self.store.update_quantity(id.clone(), controls.decreased())
            }
            _ => false,
        }
    }

    fn controls(&self, id: &BookId) -> Option<QuantityControls> {
        self.state()
            .get(id)
            .map(|item| QuantityControls::for_quantity(item.quantity))
    }

    pub fn remove(&mut self, id: &BookId) -> bool {
        self.store.remove_item(id.clone())
    }

    pub fn clear(&mut self) -> bool {
        self.store.clear_cart()
    }

    pub fn shelf(&self, category: Category) -> Option<&Shelf> {
        self.shelves.get(category)
    }

    pub fn keep_shelf(&mut self, shelf: Shelf) {
        self.shelves.insert(shelf);
    }

    /// Fetch cart suggestions.
    pub async fn suggestions(
        &mut self,
        client: &CatalogClient,
        config: RecommendationConfig,
    ) -> Vec<BookRecord> {
        let items: Vec<LineItem> = self.state().items().to_vec();
        similar_books(client, &items, config, &mut self.rng).await
    }

    /// Home page with the shelves browsed so far.
    pub fn home_html(&self, now: Instant) -> String {
        Page::default()
            .with_section(render_navbar(self.state()))
            .with_section(render_home_shelves(&self.shelves, &self.markers.active(now)))
            .render()
    }

    pub fn cart_html(&self, similar: Option<&[BookRecord]>) -> String {
        cart_page(self.state(), self.currency, similar)
    }

    /// Write both pages when an HTML directory is configured.
    pub fn write_pages(&self, similar: Option<&[BookRecord]>, now: Instant) -> Result<()> {
        if let Some(dir) = &self.html_dir {
            write_page(dir, HOME_HREF, &self.home_html(now))?;
            write_page(dir, CART_HREF, &self.cart_html(similar))?;
        }
        Ok(())
    }
}

fn cart_page(state: &CartState, currency: Currency, similar: Option<&[BookRecord]>) -> String {
    Page::new("MindHaven - Cart")
        .with_section(render_navbar(state))
        .with_section(render_cart(state, currency, similar))
        .render()
}

fn write_page(dir: &Path, name: &str, html: &str) -> Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("shop is interactive and does not support --json");
    }

    let currency = ctx.currency()?;
    let client = ctx.config.catalog.client()?;

    let html_dir = args.html_dir.map(|dir| ctx.resolve_path(&dir));
    if let Some(dir) = &html_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        ctx.output.info(&format!("Rendering pages into {}", dir.display()));
    }

    let mut session = ShopSession::new(currency, html_dir);
    session.write_pages(Some(&[] as &[BookRecord]), Instant::now())?;

    ctx.output.header("🧠 MindHaven");
    loop {
        let badge = session.badge();
        let cart_label = if badge > 0 {
            format!("🛒 Cart ({})", badge)
        } else {
            "🛒 Cart".to_string()
        };

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&["Browse a shelf", cart_label.as_str(), "Quit"])
            .default(0)
            .interact()?;

        match choice {
            0 => browse_shelf(&mut session, &client, ctx).await?,
            1 => view_cart(&mut session, &client, ctx).await?,
            _ => break,
        }
    }

    ctx.output.success("Thanks for visiting MindHaven");
    Ok(())
}

async fn browse_shelf(session: &mut ShopSession, client: &CatalogClient, ctx: &Context) -> Result<()> {
    let mut labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    labels.push("Back");

    let choice = Select::new()
        .with_prompt("Choose a shelf")
        .items(&labels)
        .default(0)
        .interact()?;
    let Some(&category) = Category::ALL.get(choice) else {
        return Ok(());
    };

    if session.shelf(category).is_none() {
        let spinner = ctx.output.spinner(&format!("Loading {} books...", category.label()));
        let books = client.books_by_category(category).await;
        spinner.finish_and_clear();
        session.keep_shelf(Shelf::new(category, books));
    }

    loop {
        let now = Instant::now();
        session.write_pages(None, now)?;

        let books: Vec<BookRecord> = session
            .shelf(category)
            .map(|s| s.books.clone())
            .unwrap_or_default();
        if books.is_empty() {
            ctx.output.info("No books available in this category");
            return Ok(());
        }

        let mut items: Vec<String> = books
            .iter()
            .map(|book| {
                let mut label = format!("{} by {}", book.title, book.authors);
                if session.is_added(&book.id, now) {
                    label.push_str("  ");
                    label.push_str(&added_badge());
                }
                label
            })
            .collect();
        items.push("Back".to_string());

        let choice = Select::new()
            .with_prompt(format!("{} (select to add to cart)", category.label()))
            .items(&items)
            .default(0)
            .interact()?;
        let Some(book) = books.get(choice) else {
            return Ok(());
        };

        let added = session.add_from_shelf(book.clone(), Instant::now());
        ctx.output.success(&format!(
            "Added {} for {}",
            added.title,
            price(&format_price(added.unit_price(), session.currency()))
        ));
        ctx.output.kv("Buy", &added.purchase_link());
        if let Some(preview) = &added.preview_link {
            ctx.output.kv("Preview", preview);
        }
    }
}

async fn view_cart(session: &mut ShopSession, client: &CatalogClient, ctx: &Context) -> Result<()> {
    let recommendations = ctx.config.catalog.recommendations();
    let mut suggestions: Option<Vec<BookRecord>> = None;

    loop {
        if session.state().is_empty() {
            ctx.output.header("Your Cart is Empty");
            ctx.output
                .info("Your cart is currently empty. Browse books and add your favorites!");
            return Ok(());
        }

        if suggestions.is_none() {
            session.write_pages(None, Instant::now())?;
            let spinner = ctx.output.spinner("Loading recommendations...");
            suggestions = Some(session.suggestions(client, recommendations).await);
            spinner.finish_and_clear();
        }
        let similar = suggestions.as_deref().unwrap_or_default();
        session.write_pages(Some(similar), Instant::now())?;

        print_cart(session, similar, ctx);

        let choice = Select::new()
            .with_prompt("Cart")
            .items(&[
                "Change quantity",
                "Increase quantity (+)",
                "Decrease quantity (-)",
                "Remove a book",
                "Add a suggested book",
                "Clear cart",
                "Proceed to checkout",
                "Back",
            ])
            .default(7)
            .interact()?;

        let changed = match choice {
            0 => match pick_line(session)? {
                Some(id) => {
                    let input: String = Input::new()
                        .with_prompt("Qty")
                        .allow_empty(true)
                        .interact_text()?;
                    session.set_quantity_input(&id, &input);
                    true
                }
                None => false,
            },
            1 => match pick_line(session)? {
                Some(id) => session.increase(&id),
                None => false,
            },
            2 => match pick_line(session)? {
                Some(id) => session.decrease(&id),
                None => false,
            },
            3 => match pick_line(session)? {
                Some(id) => session.remove(&id),
                None => false,
            },
            4 => match pick_suggestion(similar)? {
                Some(book) => {
                    ctx.output.success(&format!("Added {}", book.title));
                    session.add_suggestion(book);
                    true
                }
                None => false,
            },
            5 => {
                let confirmed = Confirm::new()
                    .with_prompt("Are you sure you want to clear your cart?")
                    .default(false)
                    .interact()?;
                confirmed && session.clear()
            }
            6 => {
                ctx.output.warn("Checkout is not available yet");
                false
            }
            _ => return Ok(()),
        };

        if changed {
            suggestions = None;
        }
    }
}

fn pick_line(session: &ShopSession) -> Result<Option<BookId>> {
    let items = session.state().items();
    let mut labels: Vec<String> = items
        .iter()
        .map(|item| format!("{} (x{})", item.book.title, item.quantity))
        .collect();
    labels.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Which book?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(items.get(choice).map(|item| item.id().clone()))
}

fn pick_suggestion(similar: &[BookRecord]) -> Result<Option<BookRecord>> {
    if similar.is_empty() {
        return Ok(None);
    }

    let mut labels: Vec<String> = similar
        .iter()
        .map(|book| format!("{} by {}", book.title, book.authors))
        .collect();
    labels.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Add which book?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(similar.get(choice).cloned())
}

fn print_cart(session: &ShopSession, similar: &[BookRecord], ctx: &Context) {
    let state = session.state();
    let summary = state.summary(session.currency());

    ctx.output.header(&format!(
        "🛒 Your Cart ({})",
        item_count_label(state.total_items())
    ));
    ctx.output.cart_table(&summary);

    ctx.output.header("Order Summary");
    ctx.output.kv("Total Items", &summary.total_items.to_string());
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    ctx.output.kv("Shipping", "Free");
    ctx.output.kv("Total", &price(&summary.total.display()));

    ctx.output.header("📚 Similar Books You Might Like");
    if similar.is_empty() {
        ctx.output.info("No recommendations available at the moment.");
    }
    for book in similar {
        ctx.output
            .book(book, &price(&format_price(book.unit_price(), session.currency())));
    }
}
