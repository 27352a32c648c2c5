//! Home page renderer.

use std::collections::HashSet;

use haven_commerce::BookId;
use haven_data::Shelves;

use super::render_shelf;
use crate::format::escape_html;
use crate::status::HomeStatus;

/// Render the home page body for the current load state.
///
/// `Idle` renders nothing.
pub fn render_home(status: &HomeStatus, added: &HashSet<BookId>) -> String {
    match status {
        HomeStatus::Idle => String::new(),
        HomeStatus::Loading => render_home_loading(),
        HomeStatus::Error(message) => render_home_error(message),
        HomeStatus::Success(shelves) => render_home_shelves(shelves, added),
    }
}

/// Render every loaded shelf in home page order.
pub fn render_home_shelves(shelves: &Shelves, added: &HashSet<BookId>) -> String {
    let sections: String = shelves
        .iter()
        .map(|shelf| render_shelf(shelf.category, &shelf.books, added))
        .collect();

    format!(
        r#"<main class="home-container" data-section="home">
{}
</main>"#,
        sections
    )
}

pub fn render_home_loading() -> String {
    r#"<main class="loader-container" data-section="home" data-testid="loader">
    <div class="loader">
        <div class="spinner"></div>
        <p>Loading books...</p>
    </div>
</main>"#
        .to_string()
}

/// Error view with the retry affordance.
pub fn render_home_error(message: &str) -> String {
    format!(
        r#"<main class="error-container" data-section="home">
    <h2 class="error-title">Oops! Something Went Wrong</h2>
    <p class="error-message">{}</p>
    <button class="retry-button">Retry</button>
</main>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_commerce::catalog::{BookRecord, Category};
    use haven_data::Shelf;

    #[test]
    fn test_idle_renders_nothing() {
        assert!(render_home(&HomeStatus::Idle, &HashSet::new()).is_empty());
    }

    #[test]
    fn test_loading_and_error_states() {
        let loading = render_home(&HomeStatus::Loading, &HashSet::new());
        assert!(loading.contains("Loading books..."));

        let error = render_home(&HomeStatus::Error("<boom>".into()), &HashSet::new());
        assert!(error.contains("&lt;boom&gt;"));
        assert!(error.contains("Retry"));
    }

    #[test]
    fn test_success_renders_shelves_in_order() {
        let mut shelves = Shelves::new();
        shelves.insert(Shelf::new(
            Category::Health,
            vec![BookRecord::new("h", "Healthy", "A")],
        ));
        shelves.insert(Shelf::new(Category::Romance, Vec::new()));

        let html = render_home(&HomeStatus::Success(shelves), &HashSet::new());
        let romance = html.find(r#"data-category="romance""#).unwrap();
        let health = html.find(r#"data-category="health""#).unwrap();
        assert!(romance < health);
        assert!(html.contains("Healthy"));
    }
}
