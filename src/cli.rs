//! Command-line interface definitions for the NParks scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which pages to scrape.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceArg {
    Events,
    FloraFauna,
    All,
}

impl SourceArg {
    pub fn includes_events(self) -> bool {
        matches!(self, SourceArg::Events | SourceArg::All)
    }

    pub fn includes_flora_fauna(self) -> bool {
        matches!(self, SourceArg::FloraFauna | SourceArg::All)
    }
}

/// How to print the extracted records.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Command-line arguments for the NParks scraper.
///
/// # Examples
///
/// ```sh
/// # Both pages, human-readable
/// nparks_scraper
///
/// # Events only, as JSON, from the saved snapshots
/// nparks_scraper --source events --format json --offline
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Which pages to scrape
    #[arg(short, long, value_enum, default_value_t = SourceArg::All)]
    pub source: SourceArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Optional path to a YAML file overriding page URLs and snapshot paths
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read the saved snapshots only; never touch the network
    #[arg(long)]
    pub offline: bool,
}
