// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Expand-around-center: the leaf of the palindrome search.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "racecar", odd center at 3 ('e')
//!
//!   start      r a c e c a r        lower=2 upper=4   c == c  → expand
//!                  ^   ^
//!   step 1     r a c e c a r        lower=1 upper=5   a == a  → expand
//!                ^       ^
//!   step 2     r a c e c a r        lower=0 upper=6   r == r  → expand
//!              ^           ^
//!   step 3   · r a c e c a r ·      lower=-1 upper=7  out of bounds → stop
//!
//! Result: (lower + 1, upper - 1) = (0, 6) = "racecar"
//! ```
//!
//! Both pointers are bounds-checked before every comparison, so a start position that
//! is already outside the sequence (negative, or at/after the end) stops immediately
//! and never indexes.
//!
//! # Complexity
//!
//! - Time: O(k) where k is the length of the palindrome found
//! - Space: O(1)

use crate::types::{Convention, Span};
use std::ops::Range;

/// Longest palindrome anchored at the center described by `(lower, upper)`.
///
/// The caller picks the convention: `(p - 1, p + 1)` for an odd center at `p`,
/// `(p, p + 1)` for the even gap after `p`. Whatever lies strictly between the two
/// starting pointers is assumed to already be a palindrome; the scanner only checks
/// outward from there.
///
/// Returns `(lower + 1, upper - 1)` for the last pointers at which the sequence still
/// matched. A result that would fall outside the sequence (the start was out of range)
/// is replaced by an empty span anchored at `lower + 1`.
pub fn scan_from_center<T: PartialEq>(lower: isize, upper: isize, sequence: &[T]) -> Span {
    let len = sequence.len() as isize;
    let (mut lower, mut upper) = (lower, upper);

    // Both pointers must index the sequence; malformed starts stop immediately.
    while (0..len).contains(&lower)
        && (0..len).contains(&upper)
        && sequence[lower as usize] == sequence[upper as usize]
    {
        lower -= 1;
        upper += 1;
    }

    let anchor = lower.saturating_add(1);
    match Span::new(anchor, upper.saturating_sub(1)) {
        Ok(span) if span.within(sequence.len()) => span,
        _ => Span::empty_at(anchor),
    }
}

/// Expand-around-center over UTF-8 text, one `char` per side per step.
///
/// `start..end` is a byte range on char boundaries whose contents are taken to be a
/// palindrome already: one character for an odd center, empty for an even gap. The
/// neighbours are decoded in place, so nothing is copied. Returns the widened byte
/// range and the number of matching steps taken.
///
/// # Panics
///
/// If `start` or `end` is not a char boundary of `text`.
pub fn scan_text_from_center(text: &str, start: usize, end: usize) -> (Range<usize>, usize) {
    let (mut start, mut end, mut steps) = (start, end, 0);

    while let (Some(left), Some(right)) =
        (text[..start].chars().next_back(), text[end..].chars().next())
    {
        if left != right {
            break;
        }
        start -= left.len_utf8();
        end += right.len_utf8();
        steps += 1;
    }

    (start..end, steps)
}

/// Longest palindrome centered at `position`, trying the odd center then the even gap.
///
/// Starts from the single character at `position` and only switches to a scan result
/// that is strictly longer, so the odd result wins a tie with the even one. Positions
/// outside `[0, len - 1]` give an empty span.
pub fn palindrome_at<T: PartialEq>(position: isize, sequence: &[T]) -> Span {
    if position < 0 || position >= sequence.len() as isize {
        return Span::empty_at(position);
    }

    let mut best = Span::single(position);
    for convention in Convention::ALL {
        let (lower, upper) = convention.pointers(position);
        let candidate = scan_from_center(lower, upper, sequence);
        if candidate.len() > best.len() {
            best = candidate;
        }
    }
    best
}


#[cfg(kani)]
mod proofs {
    use super::*;

    /// No start pointers, however wild, make the scanner index out of bounds,
    /// and whatever comes back fits inside the sequence.
    #[kani::proof]
    #[kani::unwind(6)]
    fn scan_from_center_never_panics() {
        let sequence: [u8; 4] = kani::any();
        let lower: isize = kani::any();
        let upper: isize = kani::any();

        let span = scan_from_center(lower, upper, &sequence);
        assert!(span.within(sequence.len()));
        assert!(span.len() <= sequence.len());
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn palindrome_at_never_panics() {
        let sequence: [u8; 4] = kani::any();
        let position: isize = kani::any();

        let span = palindrome_at(position, &sequence);
        assert!(span.within(sequence.len()));
    }
}
