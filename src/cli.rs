// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the clauseref command-line interface.
//!
//! Three subcommands: `search` to query a dataset, `annotate` to render a
//! section's prose with cross-reference links resolved, and `inspect` to
//! sanity-check a dataset file.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "clauseref",
    about = "Relevance search and cross-reference annotation for legal text",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a dataset and display ranked results
    Search {
        /// Path to the dataset JSON file (parts, sections, videos)
        data: String,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Render a section's content with cross-references resolved
    Annotate {
        /// Path to the dataset JSON file
        data: String,

        /// Section number whose content to render (e.g. "5" or "2.1-2.4")
        section: String,
    },

    /// Inspect a dataset: record counts, orphans, duplicate numbers
    Inspect {
        /// Path to the dataset JSON file
        data: String,
    },
}
