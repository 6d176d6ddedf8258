// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest palindrome anywhere in a sequence.
//!
//! Every position is a center twice over: once as an odd center (a character) and
//! once as an even center (the gap after it). The scanner expands each, and a running
//! best keeps the longest span seen.
//!
//! # Tie-breaking
//!
//! The best span is replaced only by a *strictly* longer one. Scanning runs left to
//! right with odd before even at each position, so among equal-length maxima the
//! earliest found wins:
//!
//! ```text
//! "ab"   → "a"    (the 'b' at 1 ties, never replaces)
//! "abb"  → "bb"   (length 2 beats the length-1 'a')
//! ```
//!
//! # Complexity
//!
//! - Worst case O(n²): a single repeated character, every center expands to the edge.
//! - Best case O(n): no two neighbours (at distance 1 or 2) are equal, every scan stops
//!   after one comparison.

use crate::scanner::{scan_from_center, scan_text_from_center};
use crate::types::{Convention, Palindrome, Span};
use crate::verify::contracts::{
    check_span_is_palindrome, check_span_within, check_text_is_palindrome,
};
use std::ops::Range;

/// Span of the longest palindrome in `sequence`; empty (anchored at 0) for an empty
/// sequence.
pub fn longest_palindrome_span<T: PartialEq>(sequence: &[T]) -> Span {
    let mut best = Span::empty_at(0);

    for position in 0..sequence.len() as isize {
        for convention in Convention::ALL {
            let (lower, upper) = convention.pointers(position);
            let candidate = scan_from_center(lower, upper, sequence);
            if candidate.len() > best.len() {
                best = candidate;
            }
        }
    }

    check_span_within(&best, sequence.len());
    check_span_is_palindrome(&best, sequence);
    best
}

/// Character span and byte range of the longest palindrome in `text`.
///
/// Same centers, order and tie-break as `longest_palindrome_span` over the text's
/// chars, but walks byte offsets so the text is never copied into an indexed buffer.
fn locate(text: &str) -> (Span, Range<usize>) {
    let mut best = (Span::empty_at(0), 0..0);
    let mut char_count = 0;

    for (position, (offset, c)) in text.char_indices().enumerate() {
        let after = offset + c.len_utf8();
        for convention in Convention::ALL {
            let start = match convention {
                Convention::Odd => offset,
                Convention::Even => after,
            };
            let (bytes, steps) = scan_text_from_center(text, start, after);
            let candidate = convention.expanded(position as isize, steps);
            if candidate.len() > best.0.len() {
                best = (candidate, bytes);
            }
        }
        char_count = position + 1;
    }

    check_span_within(&best.0, char_count);
    check_text_is_palindrome(&text[best.1.clone()]);
    best
}

/// The longest palindromic substring of `text`, borrowed from it.
///
/// Palindromes are compared by `char`, so a multi-byte character is never split.
pub fn longest_palindrome(text: &str) -> &str {
    let (_, bytes) = locate(text);
    &text[bytes]
}

/// The longest palindromic substring of `text` as an owned `String`.
///
/// ```
/// use palscan::find_longest_palindrome;
///
/// assert_eq!(find_longest_palindrome("Very fast racecar."), "racecar");
/// assert_eq!(find_longest_palindrome("ab"), "a");
/// assert_eq!(find_longest_palindrome(""), "");
/// ```
pub fn find_longest_palindrome(text: &str) -> String {
    longest_palindrome(text).to_owned()
}

/// The longest palindrome of `text` together with where it was found.
pub fn find_palindrome(text: &str) -> Palindrome {
    let (span, bytes) = locate(text);
    Palindrome {
        text: text[bytes.clone()].to_owned(),
        span,
        byte_start: bytes.start,
        byte_end: bytes.end,
    }
}

/// Byte-level variant: compares raw bytes, so multi-byte UTF-8 is not respected.
pub fn longest_palindrome_bytes(bytes: &[u8]) -> &[u8] {
    longest_palindrome_span(bytes).slice(bytes)
}
