// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! Exposes the finder to JavaScript under its camelCase name. Strings cross the
//! boundary as UTF-8, so character semantics match the native build.

use wasm_bindgen::prelude::*;

/// Longest palindromic substring of `text`.
#[wasm_bindgen(js_name = findLongestPalindrome)]
pub fn find_longest_palindrome_js(text: &str) -> String {
    crate::find_longest_palindrome(text)
}

/// Longest palindrome centered at `position` (character index, may be negative).
#[wasm_bindgen(js_name = palindromeAt)]
pub fn palindrome_at_js(position: i32, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    crate::palindrome_at(position as isize, &chars)
        .slice(&chars)
        .iter()
        .collect()
}
