//! Browse the catalog shelves.

use std::collections::HashSet;

use anyhow::{anyhow, Context as _, Result};
use haven_commerce::cart::CartState;
use haven_commerce::catalog::Category;
use haven_data::{Shelf, ShelfLoad, ShelfLoader, Shelves};
use haven_view::sections::{render_home, render_navbar};
use haven_view::{star_rating, HomeStatus, Page};

use super::BrowseArgs;
use crate::context::Context;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let categories = match &args.category {
        Some(name) => vec![Category::from_name(name).ok_or_else(|| {
            anyhow!(
                "Unknown category '{}'. Try one of: {}",
                name,
                Category::ALL.map(|c| c.subject()).join(", ")
            )
        })?],
        None => Category::ALL.to_vec(),
    };

    let client = ctx.config.catalog.client()?;
    let loader = ShelfLoader::new(client);

    let total = categories.len();
    let spinner = ctx.output.spinner(&format!(
        "Loading {} shelf{}...",
        total,
        if total == 1 { "" } else { "s" }
    ));
    let load = loader.start_categories(categories);
    let (status, cancelled) = load_until_interrupted(load, |shelf, loaded| {
        spinner.suspend(|| print_shelf(shelf, ctx));
        spinner.set_message(format!("Loaded {}/{} shelves...", loaded, total));
    })
    .await;
    spinner.finish_and_clear();

    if cancelled {
        let loaded = status.shelves().map_or(0, |s| s.len());
        ctx.output
            .warn(&format!("Load cancelled after {} of {} shelves", loaded, total));
    }

    if let Some(path) = &args.html {
        let path = ctx.resolve_path(path);
        let page = Page::default()
            .with_section(render_navbar(&CartState::new()))
            .with_section(render_home(&status, &HashSet::new()));
        std::fs::write(&path, page.render())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    match status {
        HomeStatus::Success(shelves) => {
            if ctx.output.is_json() {
                ctx.output.json(&shelves);
            }
            Ok(())
        }
        HomeStatus::Error(message) => Err(anyhow!("Failed to load books: {}", message)),
        HomeStatus::Idle | HomeStatus::Loading => Ok(()),
    }
}

/// Drain a load shelf by shelf, cancelling it on Ctrl-C.
///
/// Every shelf is handed to `on_shelf` with the running count as it arrives.
/// The flag is set when the load was cancelled; the status then holds only
/// the shelves that arrived before that.
async fn load_until_interrupted<F>(mut load: ShelfLoad, mut on_shelf: F) -> (HomeStatus, bool)
where
    F: FnMut(&Shelf, usize),
{
    let cancel = load.cancel_handle();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let mut shelves = Shelves::new();
    while let Some(shelf) = load.next_shelf().await {
        on_shelf(&shelf, shelves.len() + 1);
        shelves.insert(shelf);
    }
    watcher.abort();

    let result = if load.is_cancelled() {
        Ok(None)
    } else {
        load.wait().await
    };
    match result {
        Ok(Some(_)) => (HomeStatus::Success(shelves), false),
        Ok(None) => (HomeStatus::Success(shelves), true),
        Err(e) => (HomeStatus::from_load(Err(e)).unwrap_or_default(), false),
    }
}

fn print_shelf(shelf: &Shelf, ctx: &Context) {
    if ctx.output.is_json() {
        return;
    }

    ctx.output.shelf(shelf.category.label(), shelf.books.len());
    if shelf.is_empty() {
        ctx.output.info("No books available in this category");
        return;
    }
    for book in &shelf.books {
        ctx.output.book(book, &star_rating(book.average_rating));
    }
}
