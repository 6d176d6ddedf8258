// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use palscan::is_palindrome;

// Re-export canonical fixtures from palscan::testing
pub use palscan::testing::{no_short_palindromes, repeated, KNOWN_CASES};

/// Collect a string into characters for the slice-based APIs.
pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Text covered by the longest palindrome centered at `position`.
pub fn text_at(position: isize, text: &str) -> String {
    let seq = chars(text);
    palindrome_at_text(position, &seq)
}

fn palindrome_at_text(position: isize, seq: &[char]) -> String {
    palscan::palindrome_at(position, seq)
        .slice(seq)
        .iter()
        .collect()
}

/// Assert the properties every result must have: a contiguous substring of the
/// input that reads the same in both directions.
pub fn assert_result_well_formed(input: &str, result: &str) {
    assert!(
        input.contains(result),
        "result {:?} is not a substring of {:?}",
        result,
        input
    );
    assert!(
        is_palindrome(&chars(result)),
        "result {:?} is not a palindrome",
        result
    );
}
