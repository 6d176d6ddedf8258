// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for palindrome spans.
//!
//! Debug-mode assertions on the properties every search result must have. They
//! compile to nothing in release builds (`debug_assert!` never evaluates its
//! argument there), so the finder can call them on every result.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                       |
//! |------------------------------|------------------------------------------------|
//! | `check_span_within`          | Non-empty result lies inside `[0, len - 1]`    |
//! | `check_span_is_palindrome`   | Result reads the same in both directions       |
//! | `check_text_is_palindrome`   | Same, for a `&str` result, compared by `char`  |

use crate::types::Span;
use crate::utils::is_palindrome;

// ============================================================================
// SPAN CONTRACTS
// ============================================================================

/// Check that a span fits in a sequence of length `len`.
///
/// # Panics (debug builds only)
/// Panics if the span is non-empty and either bound is outside the sequence.
#[inline]
pub fn check_span_within(span: &Span, len: usize) {
    debug_assert!(
        span.within(len),
        "Contract violation: span {} outside sequence of length {}",
        span,
        len
    );
}

/// Check that the elements covered by a span form a palindrome.
///
/// # Panics (debug builds only)
/// Panics if the covered elements differ from their reverse.
#[inline]
pub fn check_span_is_palindrome<T: PartialEq>(span: &Span, sequence: &[T]) {
    debug_assert!(
        is_palindrome(span.slice(sequence)),
        "Contract violation: span {} is not a palindrome",
        span
    );
}

/// Check that a text result reads the same forwards and backwards, by `char`.
///
/// # Panics (debug builds only)
/// Panics if the characters of `text` differ from their reverse.
#[inline]
pub fn check_text_is_palindrome(text: &str) {
    debug_assert!(
        text.chars().eq(text.chars().rev()),
        "Contract violation: {:?} is not a palindrome",
        text
    );
}
