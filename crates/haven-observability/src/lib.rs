//! Logging setup for the MindHaven storefront.
//!
//! This crate provides:
//! - `LoggingConfig` - Level and format, loadable from the config file
//! - `init_logging` - Installs the global `tracing` subscriber (stderr)

mod logging;

pub use logging::*;
