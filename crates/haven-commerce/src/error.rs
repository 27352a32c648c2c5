//! Commerce error types.

use thiserror::Error;

/// Errors raised while interpreting catalog and pricing input.
///
/// The cart store itself never fails: unknown ids are no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Category subject or label not recognized.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Currency code not recognized.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}
