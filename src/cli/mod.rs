// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the palscan command-line interface.
//!
//! Two subcommands: `find` for the longest palindrome of a text (argument or stdin,
//! optionally one input per line), and `at` for the longest palindrome centered at a
//! single position. Logging goes to stderr and is controlled by `-v` or `PALSCAN_LOG`.

pub mod display;
pub mod input;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "palscan",
    about = "Find the longest palindromic substring of a text",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    ///
    /// Ignored when PALSCAN_LOG is set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the longest palindrome in TEXT, or in stdin when TEXT is omitted
    Find {
        /// Text to search (reads stdin if omitted)
        text: Option<String>,

        /// Treat each input line as a separate text
        #[arg(long)]
        lines: bool,

        /// Compare raw bytes instead of characters
        #[arg(long)]
        bytes: bool,

        /// Show the palindrome highlighted inside its input (text format only)
        #[arg(long)]
        highlight: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Find the longest palindrome centered at POSITION (character index)
    At {
        /// Center position; negative and past-the-end positions give an empty result
        #[arg(allow_hyphen_values = true)]
        position: isize,

        /// Text to search
        text: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The palindrome alone, one per line
    Text,
    /// One JSON object per input with text, span and byte offsets
    Json,
}
