// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the whole-text finder.
//!
//! Checks the result on arbitrary input: offsets agree with the text, the text is a
//! palindrome, and no center holds anything longer than what was reported at its own.

#![no_main]

use libfuzzer_sys::fuzz_target;
use palscan::{find_palindrome, is_palindrome, longest_palindrome_bytes, palindrome_at};

fuzz_target!(|data: &[u8]| {
    // Cap length: worst case is quadratic
    let data = &data[..data.len().min(4096)];

    // INVARIANT 1: byte search returns a palindrome for any bytes
    assert!(is_palindrome(longest_palindrome_bytes(data)));

    let text = String::from_utf8_lossy(data);
    let found = find_palindrome(&text);

    // INVARIANT 2: offsets point at the reported text
    assert_eq!(&text[found.byte_start..found.byte_end], found.text);

    // INVARIANT 3: result is a palindrome by character
    let chars: Vec<char> = found.text.chars().collect();
    assert!(is_palindrome(&chars));

    // INVARIANT 4: non-empty input has a non-empty result
    assert_eq!(text.is_empty(), found.text.is_empty());

    // INVARIANT 5: the result is the best palindrome at its own center
    if !found.span.is_empty() {
        let all: Vec<char> = text.chars().collect();
        let center = (found.span.lower() + found.span.upper()) / 2;
        assert_eq!(palindrome_at(center, &all).len(), found.span.len());
    }
});
