// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufWriter, Write};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use palscan::{
    char_range_to_bytes, find_palindromes, longest_palindrome_span, palindrome_at, Palindrome,
    Span,
};

mod cli;
use cli::display::{error_label, highlight, span_label};
use cli::input::{decode_all, read_stdin, split_lines, strip_newline};
use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", error_label(), e);
        std::process::exit(1);
    }
}

/// Log to stderr. `PALSCAN_LOG` (EnvFilter syntax) wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env("PALSCAN_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Find {
            text,
            lines,
            bytes,
            highlight,
            format,
        } => {
            let raw = match text {
                Some(text) => text.into_bytes(),
                None => read_stdin()?,
            };
            let inputs = if lines {
                split_lines(&raw)
            } else {
                vec![strip_newline(&raw)]
            };
            info!(inputs = inputs.len(), bytes, "searching");

            let started = Instant::now();
            let results: Vec<Palindrome> = if bytes {
                inputs.iter().map(|input| locate_bytes(input)).collect()
            } else {
                find_palindromes(&decode_all(&inputs)?)
            };
            debug!(elapsed_us = started.elapsed().as_micros() as u64, "search done");

            let sources: Vec<String> = inputs
                .iter()
                .map(|input| String::from_utf8_lossy(input).into_owned())
                .collect();
            write_results(&results, &sources, format, highlight && !bytes)
        }
        Commands::At {
            position,
            text,
            format,
        } => {
            let chars: Vec<char> = text.chars().collect();
            let span = palindrome_at(position, &chars);
            debug!(position, %span, "palindrome at position");
            let found = locate_chars(&text, &chars, span);
            write_results(&[found], &[text], format, false)
        }
    }
}

/// Byte-level search: span and byte offsets coincide.
fn locate_bytes(input: &[u8]) -> Palindrome {
    let span = longest_palindrome_span(input);
    let range = span.range(input.len()).unwrap_or(0..0);
    debug!(len = input.len(), %span, "byte search");
    Palindrome {
        text: String::from_utf8_lossy(&input[range.clone()]).into_owned(),
        span,
        byte_start: range.start,
        byte_end: range.end,
    }
}

/// Build a `Palindrome` for a character span of `text`.
fn locate_chars(text: &str, chars: &[char], span: Span) -> Palindrome {
    let bytes = span
        .range(chars.len())
        .map_or(0..0, |range| char_range_to_bytes(text, range));
    Palindrome {
        text: text[bytes.clone()].to_owned(),
        span,
        byte_start: bytes.start,
        byte_end: bytes.end,
    }
}

fn write_results(
    results: &[Palindrome],
    sources: &[String],
    format: OutputFormat,
    show_highlight: bool,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (found, source) in results.iter().zip(sources) {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, found).context("failed to serialize result")?;
                writeln!(out)?;
            }
            OutputFormat::Text if show_highlight => {
                writeln!(
                    out,
                    "{}  ({})",
                    highlight(source, found.byte_start..found.byte_end),
                    span_label(&found.span)
                )?;
            }
            OutputFormat::Text => writeln!(out, "{}", found.text)?,
        }
    }

    out.flush().context("failed to write stdout")
}
