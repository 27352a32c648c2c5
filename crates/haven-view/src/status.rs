//! Home page load state.

use haven_data::{LoadError, Shelves};

/// Where the home page is in loading its shelves.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HomeStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Shelves are loading.
    Loading,
    /// Every shelf has been applied.
    Success(Shelves),
    /// The load as a whole failed; the page offers a retry.
    Error(String),
}

impl HomeStatus {
    /// Status after a finished load.
    ///
    /// A cancelled load yields `None`: its results are discarded and the page
    /// keeps whatever status it had.
    pub fn from_load(result: Result<Option<Shelves>, LoadError>) -> Option<Self> {
        match result {
            Ok(Some(shelves)) => Some(Self::Success(shelves)),
            Ok(None) => None,
            Err(e) => {
                tracing::error!(error = %e, "home page load failed");
                Some(Self::Error(e.to_string()))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn shelves(&self) -> Option<&Shelves> {
        match self {
            Self::Success(shelves) => Some(shelves),
            _ => None,
        }
    }

    /// Whether the retry button is shown.
    pub fn can_retry(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_load() {
        assert_eq!(
            HomeStatus::from_load(Ok(Some(Shelves::new()))),
            Some(HomeStatus::Success(Shelves::new()))
        );
        assert_eq!(HomeStatus::from_load(Ok(None)), None);

        let failed = HomeStatus::from_load(Err(LoadError::Task("panicked".into()))).unwrap();
        assert!(failed.can_retry());
        assert!(failed.shelves().is_none());
    }

    #[test]
    fn test_default_is_idle() {
        let status = HomeStatus::default();
        assert_eq!(status, HomeStatus::Idle);
        assert!(!status.is_loading());
        assert!(!status.can_retry());
    }
}
