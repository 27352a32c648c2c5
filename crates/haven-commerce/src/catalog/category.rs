//! Browsable catalog categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the nine shelves shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Romance,
    Thriller,
    Fantasy,
    Motivational,
    ScienceFiction,
    Biography,
    History,
    Business,
    Health,
}

impl Category {
    /// Every category, in home page order.
    pub const ALL: [Category; 9] = [
        Category::Romance,
        Category::Thriller,
        Category::Fantasy,
        Category::Motivational,
        Category::ScienceFiction,
        Category::Biography,
        Category::History,
        Category::Business,
        Category::Health,
    ];

    /// Subject term sent to the catalog (`q=subject:<term>`).
    pub fn subject(&self) -> &'static str {
        match self {
            Category::Romance => "romance",
            Category::Thriller => "thriller",
            Category::Fantasy => "fantasy",
            Category::Motivational => "motivational",
            Category::ScienceFiction => "science_fiction",
            Category::Biography => "biography",
            Category::History => "history",
            Category::Business => "business",
            Category::Health => "health",
        }
    }

    /// Heading shown above the shelf.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Romance => "Romance",
            Category::Thriller => "Thriller",
            Category::Fantasy => "Fantasy",
            Category::Motivational => "Motivational",
            Category::ScienceFiction => "Science Fiction",
            Category::Biography => "Biography",
            Category::History => "History",
            Category::Business => "Business",
            Category::Health => "Health & Wellness",
        }
    }

    /// Look up a category by subject or label, ignoring case and separators.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL.into_iter().find(|c| {
            normalize(c.subject()) == wanted || normalize(c.label()) == wanted
        })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_subjects_unique() {
        let mut subjects: Vec<_> = Category::ALL.iter().map(|c| c.subject()).collect();
        subjects.sort();
        subjects.dedup();
        assert_eq!(subjects.len(), 9);
    }

    #[test]
    fn test_from_name_accepts_subject_and_label() {
        assert_eq!(Category::from_name("science_fiction"), Some(Category::ScienceFiction));
        assert_eq!(Category::from_name("Science Fiction"), Some(Category::ScienceFiction));
        assert_eq!(Category::from_name("science-fiction"), Some(Category::ScienceFiction));
        assert_eq!(Category::from_name("Health & Wellness"), Some(Category::Health));
        assert_eq!(Category::from_name("HEALTH"), Some(Category::Health));
    }

    #[test]
    fn test_unknown_category() {
        let err = "poetry".parse::<Category>().unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("poetry".into()));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::Health.to_string(), "Health & Wellness");
    }
}
