//! Terminal output for the storefront.

use console::{style, Term};
use haven_commerce::cart::CartSummary;
use haven_commerce::catalog::BookRecord;
use indicatif::{ProgressBar, ProgressStyle};

/// Widest title column before titles are cut.
const MAX_TITLE_WIDTH: usize = 48;

/// Output handler for CLI messages.
///
/// Human output goes to stdout; with `--json` only machine-readable values are
/// printed there. Diagnostics always go to stderr.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error. In JSON mode this is an `{"error": ...}` object.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Shelf heading with its book count.
    pub fn shelf(&self, label: &str, books: usize) {
        if self.json {
            return;
        }
        println!(
            "\n{} {}",
            style(label).bold().underlined(),
            style(format!("({})", books)).dim()
        );
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize output"),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// One book as a bullet: title, authors, then `detail`.
    pub fn book(&self, book: &BookRecord, detail: &str) {
        if self.json {
            return;
        }
        println!(
            "  {} {} {} {}  {}",
            style("•").dim(),
            style(clip(&book.title, self.title_width())).bold(),
            style("by").dim(),
            book.authors,
            detail
        );
    }

    /// Cart lines as an aligned table.
    pub fn cart_table(&self, summary: &CartSummary) {
        if self.json {
            return;
        }

        let width = summary
            .lines
            .iter()
            .map(|line| line.title.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(5, self.title_width());

        println!(
            "  {}",
            style(format!(
                "{:<width$}  {:>3}  {:>10}  {:>10}",
                "Title",
                "Qty",
                "Price",
                "Total",
                width = width
            ))
            .dim()
        );
        for line in &summary.lines {
            println!(
                "  {:<width$}  {:>3}  {:>10}  {:>10}",
                clip(&line.title, width),
                line.quantity,
                line.unit_price.display(),
                line.total.display(),
                width = width
            );
        }
    }

    /// Spinner shown while catalog requests run. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn title_width(&self) -> usize {
        let (_, cols) = self.term.size();
        (cols as usize / 2).clamp(16, MAX_TITLE_WIDTH)
    }
}

/// Cut `text` to `width` characters, marking the cut with "…".
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

/// Highlight a price.
pub fn price(text: &str) -> String {
    style(text).green().bold().to_string()
}

/// Mark a book just added to the cart.
pub fn added_badge() -> String {
    style("✓ Added!").green().to_string()
}
