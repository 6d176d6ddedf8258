// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning raw CLI input into the texts to search.

use anyhow::{Context, Result};
use std::io::Read;

/// Read all of stdin as bytes.
pub fn read_stdin() -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    std::io::stdin()
        .read_to_end(&mut raw)
        .context("failed to read stdin")?;
    Ok(raw)
}

/// Drop one trailing `\n` or `\r\n`, the newline a shell pipe adds.
pub fn strip_newline(input: &[u8]) -> &[u8] {
    let input = input.strip_suffix(b"\n").unwrap_or(input);
    input.strip_suffix(b"\r").unwrap_or(input)
}

/// Split input into lines (`\n` or `\r\n`). A final newline does not start a new line.
pub fn split_lines(input: &[u8]) -> Vec<&[u8]> {
    if input.is_empty() {
        return Vec::new();
    }
    let body = input.strip_suffix(b"\n").unwrap_or(input);
    body.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}

/// Decode every input as UTF-8, naming the first line that isn't.
pub fn decode_all<'a>(inputs: &[&'a [u8]]) -> Result<Vec<&'a str>> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, bytes)| {
            std::str::from_utf8(bytes)
                .with_context(|| format!("input {} is not valid UTF-8 (try --bytes)", i + 1))
        })
        .collect()
}
