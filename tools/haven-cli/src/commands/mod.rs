//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Load a single category (subject or label, e.g. "science_fiction").
    #[arg(long)]
    pub category: Option<String>,

    /// Write the rendered home page to this file.
    #[arg(long)]
    pub html: Option<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Keep index.html and cart.html rendered in this directory.
    #[arg(long)]
    pub html_dir: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// File to create (`.json` writes JSON). Defaults to haven.toml.
        path: Option<String>,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
