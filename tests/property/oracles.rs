// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations used as ground truth for the
//! expand-around-center finder. Slow, but there is nothing to get wrong.

use super::common::chars;
use palscan::{find_longest_palindrome, is_palindrome, palindrome_at, Span};
use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Leftmost longest palindromic substring by trying every substring.
///
/// O(n³): lengths from longest to shortest, starts left to right, first hit wins.
/// Leftmost-first among equal lengths is the same order the finder's
/// left-to-right center scan produces.
pub fn oracle_longest_palindrome(text: &str) -> String {
    let seq = chars(text);
    for len in (1..=seq.len()).rev() {
        for start in 0..=seq.len() - len {
            let candidate = &seq[start..start + len];
            if candidate
                .iter()
                .zip(candidate.iter().rev())
                .all(|(a, b)| a == b)
            {
                return candidate.iter().collect();
            }
        }
    }
    String::new()
}

/// Longest palindrome whose center is exactly `position` (odd) or the gap after it
/// (even), by growing a radius until it stops matching.
pub fn oracle_palindrome_at(position: isize, text: &str) -> String {
    let seq = chars(text);
    if position < 0 || position as usize >= seq.len() {
        return String::new();
    }
    let p = position as usize;
    let mut best: &[char] = &seq[p..=p];

    // Odd: radius r covers p-r..=p+r
    let mut r = 1;
    while r <= p && p + r < seq.len() && is_palindrome(&seq[p - r..=p + r]) {
        if 2 * r + 1 > best.len() {
            best = &seq[p - r..=p + r];
        }
        r += 1;
    }

    // Even: radius r covers p+1-r..=p+r
    let mut r = 1;
    while r <= p + 1 && p + r < seq.len() && is_palindrome(&seq[p + 1 - r..=p + r]) {
        if 2 * r > best.len() {
            best = &seq[p + 1 - r..=p + r];
        }
        r += 1;
    }

    best.iter().collect()
}

// =============================================================================
// DIFFERENTIAL PROPERTY TESTS
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Small alphabet: lots of palindromes and lots of ties.
    #[test]
    fn diff_longest_small_alphabet(text in "[ab]{0,30}") {
        prop_assert_eq!(find_longest_palindrome(&text), oracle_longest_palindrome(&text));
    }

    #[test]
    fn diff_longest_with_spaces(text in "[abc ]{0,40}") {
        prop_assert_eq!(find_longest_palindrome(&text), oracle_longest_palindrome(&text));
    }

    #[test]
    fn diff_longest_unicode(text in "[aé日 ]{0,20}") {
        prop_assert_eq!(find_longest_palindrome(&text), oracle_longest_palindrome(&text));
    }

    #[test]
    fn diff_palindrome_at(text in "[ab]{0,20}", position in -3isize..24) {
        let seq = chars(&text);
        let found: String = palindrome_at(position, &seq).slice(&seq).iter().collect();
        prop_assert_eq!(found, oracle_palindrome_at(position, &text));
    }
}

// =============================================================================
// ORACLE SANITY
// =============================================================================

#[test]
fn oracles_agree_on_fixtures() {
    for &(input, expected) in super::common::KNOWN_CASES {
        assert_eq!(oracle_longest_palindrome(input), expected, "input: {:?}", input);
    }
    assert_eq!(oracle_palindrome_at(1, "aba"), "aba");
    assert_eq!(oracle_palindrome_at(1, "abb"), "bb");
    assert_eq!(oracle_palindrome_at(7, "racecar"), "");
    assert_eq!(oracle_palindrome_at(-1, "racecar"), "");
}

#[test]
fn empty_span_anchor_does_not_leak_into_oracle_comparison() {
    let seq = chars("abc");
    let span = palindrome_at(5, &seq);
    assert_eq!(span, Span::empty_at(5));
    assert_eq!(oracle_palindrome_at(5, "abc"), "");
}
