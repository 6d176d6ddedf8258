// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, and benchmarks.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and input generators to avoid duplication.

#![doc(hidden)]

/// Inputs with their expected longest palindrome, covering the boundary cases and
/// the tie-break rule.
pub const KNOWN_CASES: &[(&str, &str)] = &[
    ("", ""),
    ("a", "a"),
    ("ab", "a"),
    ("aa", "aa"),
    ("bba", "bb"),
    ("abb", "bb"),
    ("aba", "aba"),
    ("Very fast racecar.", "racecar"),
    (
        "James Joyce said tattarrattat in Ulysses",
        " tattarrattat ",
    ),
    ("a bb aba abba abcba cddc cdc dd c", "ba abba ab"),
];

/// Worst case input: one character repeated, every center expands to an edge.
pub fn repeated(c: char, len: usize) -> String {
    c.to_string().repeat(len)
}

/// Best case input: no character equals either of the next two, so every scan
/// stops after its first comparison.
pub fn no_short_palindromes(len: usize) -> String {
    const CYCLE: [char; 3] = ['a', 'b', 'c'];
    (0..len).map(|i| CYCLE[i % CYCLE.len()]).collect()
}

/// Prose-like input with a single planted palindrome in the middle.
pub fn prose_with_palindrome(words: usize, palindrome: &str) -> String {
    const WORDS: &[&str] = &[
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "search", "index",
    ];
    let mut out: Vec<&str> = (0..words).map(|i| WORDS[(i * 7) % WORDS.len()]).collect();
    out.insert(words / 2, palindrome);
    out.join(" ")
}
