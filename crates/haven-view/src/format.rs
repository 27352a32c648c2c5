//! Display formatting shared by the sections.

use haven_commerce::{Currency, Money};

/// Characters of description shown before truncation.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// Shown in place of stars for unrated books.
pub const NO_REVIEWS: &str = "No Reviews";

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Highest rating the catalog reports.
pub const MAX_STARS: f32 = 5.0;

/// One star per rating point, rounded and capped at five; "No Reviews" when
/// unrated.
pub fn star_rating(rating: f32) -> String {
    if rating.is_nan() || rating <= 0.0 {
        return NO_REVIEWS.to_string();
    }
    "★".repeat(rating.round().clamp(0.0, MAX_STARS) as usize)
}

/// First 150 characters of a description, with "..." when cut.
pub fn truncate_description(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Page count, or "N/A" when unknown.
pub fn page_count_label(page_count: u32) -> String {
    if page_count == 0 {
        "N/A".to_string()
    } else {
        page_count.to_string()
    }
}

/// "1 item" / "3 items".
pub fn item_count_label(count: i64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Price with currency symbol and grouped thousands.
pub fn format_price(amount: i64, currency: Currency) -> String {
    Money::new(amount, currency).display()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_star_rating() {
        assert_eq!(star_rating(0.0), NO_REVIEWS);
        assert_eq!(star_rating(f32::NAN), NO_REVIEWS);
        assert_eq!(star_rating(3.5), "★★★★");
        assert_eq!(star_rating(4.4), "★★★★");
        assert_eq!(star_rating(0.4), "");
    }

    #[test]
    fn test_star_rating_out_of_range() {
        assert_eq!(star_rating(1.0e30), "★★★★★");
        assert_eq!(star_rating(f32::INFINITY), "★★★★★");
        assert_eq!(star_rating(7.2), "★★★★★");
        assert_eq!(star_rating(f32::NEG_INFINITY), NO_REVIEWS);
        assert_eq!(star_rating(-3.0), NO_REVIEWS);
    }

    #[test]
    fn test_truncate_description() {
        let exact = "a".repeat(150);
        assert_eq!(truncate_description(&exact), exact);

        let long = "é".repeat(151);
        let cut = truncate_description(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 153);
    }

    #[test]
    fn test_labels() {
        assert_eq!(page_count_label(0), "N/A");
        assert_eq!(page_count_label(320), "320");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(format_price(1000, Currency::INR), "₹1,000");
    }
}
