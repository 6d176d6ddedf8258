// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for sequence and string processing.

use std::ops::Range;

/// Does `sequence` read the same forwards and backwards?
///
/// Direct element equality: no case-folding, no whitespace or Unicode normalization.
/// The empty sequence is a palindrome.
pub fn is_palindrome<T: PartialEq>(sequence: &[T]) -> bool {
    sequence
        .iter()
        .zip(sequence.iter().rev())
        .take(sequence.len() / 2)
        .all(|(a, b)| a == b)
}

/// Convert a half-open range of character indices into UTF-8 byte offsets of `text`.
///
/// Indices at or past the last character map to `text.len()`. Walks the string once
/// up to `chars.end`.
pub fn char_range_to_bytes(text: &str, chars: Range<usize>) -> Range<usize> {
    let mut start = text.len();
    let mut end = text.len();
    for (i, (offset, _)) in text.char_indices().enumerate() {
        if i == chars.start {
            start = offset;
        }
        if i == chars.end {
            end = offset;
            break;
        }
    }
    start.min(end)..end
}
