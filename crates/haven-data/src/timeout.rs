//! Timeout configuration for catalog fetches.

use std::time::Duration;

/// Timeout configuration for the HTTP client.
///
/// Both limits are off by default: a slow catalog only delays its own shelf.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeoutConfig {
    /// Connection timeout.
    pub connect: Option<Duration>,
    /// Total operation timeout.
    pub total: Option<Duration>,
}

impl TimeoutConfig {
    /// No timeouts.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create from a single total timeout.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: Some(total / 4),
            total: Some(total),
        }
    }
}
