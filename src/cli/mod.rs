// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the toolsift command-line interface.
//!
//! Four subcommands: `search` to query a catalog, `browse` to list it
//! unfiltered, `explain` to break one item's score into its signals, and
//! `synonyms` to show what a query expands to.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "toolsift",
    about = "Fuzzy, synonym-aware search over a tool catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Result shape for `search`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Matches grouped under their categories
    Grouped,
    /// One ranked list across all categories
    Flat,
    /// Only the best match
    First,
}

#[derive(Args)]
pub struct ConfigArg {
    /// TOML file with weights and synonym settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and display ranked results
    Search {
        /// Path to catalog JSON
        catalog: PathBuf,

        /// Search query
        query: String,

        /// How to shape the results
        #[arg(short, long, value_enum, default_value_t = Mode::Grouped)]
        mode: Mode,

        /// Maximum number of results (flat mode only)
        #[arg(short, long)]
        limit: Option<usize>,

        #[command(flatten)]
        config: ConfigArg,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every category and item in display order
    Browse {
        /// Path to catalog JSON
        catalog: PathBuf,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how one item's score for a query is built up
    Explain {
        /// Path to catalog JSON
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Name of the item to explain
        item: String,

        /// Category holding the item, when the name appears in several
        #[arg(long)]
        category: Option<String>,

        #[command(flatten)]
        config: ConfigArg,
    },

    /// Show the synonym expansion of a query
    Synonyms {
        /// Query to expand
        query: String,

        #[command(flatten)]
        config: ConfigArg,
    },
}
