// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types a palindrome search passes around.
//!
//! Everything here is transient: a `Span` lives for one scan, a `Palindrome` for one
//! call. Positions are signed (`isize`) because the scanner walks one step past either
//! end of the sequence before it notices it has left the bounds.
//!
//! # Invariants
//!
//! - **Span**: `lower <= upper + 1`. A span with `lower == upper + 1` is empty and is
//!   "anchored" at `lower`. Non-empty spans produced by the scanner always satisfy
//!   `0 <= lower <= upper < len`.
//!
//! - **Palindrome**: `text` is exactly the characters covered by `span`, and
//!   `byte_start..byte_end` is the same region in UTF-8 byte offsets.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

// =============================================================================
// ERRORS
// =============================================================================

/// Error type for span construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// `lower` is more than one past `upper`, so the span has negative length.
    Inverted { lower: isize, upper: isize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::Inverted { lower, upper } => {
                write!(f, "span lower {} > upper {} + 1", lower, upper)
            }
        }
    }
}

impl std::error::Error for SpanError {}

// =============================================================================
// SPAN
// =============================================================================

/// Inclusive `(lower, upper)` bounds of a candidate palindrome.
///
/// Fields are private so the `lower <= upper + 1` invariant can't be broken after
/// construction. `len()` is therefore never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    lower: isize,
    upper: isize,
}

impl Span {
    /// Create a span, rejecting bounds with negative length.
    pub fn new(lower: isize, upper: isize) -> Result<Self, SpanError> {
        match upper.checked_add(1) {
            Some(end) if lower <= end => Ok(Span { lower, upper }),
            // upper == isize::MAX: any lower is at most upper + 1
            None => Ok(Span { lower, upper }),
            Some(_) => Err(SpanError::Inverted { lower, upper }),
        }
    }

    /// Zero-length span anchored at `anchor`: `(anchor, anchor - 1)`.
    ///
    /// `isize::MIN` has no predecessor, so its empty span is anchored one higher.
    #[inline]
    pub const fn empty_at(anchor: isize) -> Self {
        match anchor.checked_sub(1) {
            Some(upper) => Span {
                lower: anchor,
                upper,
            },
            None => Span {
                lower: anchor + 1,
                upper: anchor,
            },
        }
    }

    /// Single-character span `(position, position)`.
    #[inline]
    pub const fn single(position: isize) -> Self {
        Span {
            lower: position,
            upper: position,
        }
    }

    #[inline]
    pub const fn lower(&self) -> isize {
        self.lower
    }

    #[inline]
    pub const fn upper(&self) -> isize {
        self.upper
    }

    /// Number of elements covered, saturating at `usize::MAX` for `(MIN, MAX)`.
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.upper.abs_diff(self.lower).saturating_add(1)
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.upper < self.lower
    }

    /// Does this span lie inside a sequence of length `len`?
    ///
    /// Empty spans are always "within": they cover nothing, whatever their anchor.
    pub fn within(&self, len: usize) -> bool {
        self.is_empty() || (self.lower >= 0 && (self.upper as usize) < len)
    }

    /// Half-open index range for slicing, or `None` when the span is out of bounds.
    ///
    /// Empty spans map to an empty range (clamped to `0..0` when the anchor is negative).
    pub fn range(&self, len: usize) -> Option<Range<usize>> {
        if self.is_empty() {
            let anchor = self.lower.clamp(0, len as isize) as usize;
            return Some(anchor..anchor);
        }
        if self.within(len) {
            Some(self.lower as usize..self.upper as usize + 1)
        } else {
            None
        }
    }

    /// The elements of `sequence` covered by this span, empty if out of bounds.
    pub fn slice<'a, T>(&self, sequence: &'a [T]) -> &'a [T] {
        match self.range(sequence.len()) {
            Some(range) => &sequence[range],
            None => &[],
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

// =============================================================================
// CENTER CONVENTIONS
// =============================================================================

/// Which kind of center a scan starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Center is a single character at `p`; scanning starts at `(p - 1, p + 1)`.
    Odd,
    /// Center is the gap between `p` and `p + 1`; scanning starts at `(p, p + 1)`.
    Even,
}

impl Convention {
    /// Scan order at each position. Odd comes first, which decides ties.
    pub const ALL: [Convention; 2] = [Convention::Odd, Convention::Even];

    /// Starting `(lower, upper)` pointers for a center at `position`.
    #[inline]
    pub fn pointers(self, position: isize) -> (isize, isize) {
        match self {
            Convention::Odd => (position.saturating_sub(1), position.saturating_add(1)),
            Convention::Even => (position, position.saturating_add(1)),
        }
    }

    /// Span covered after `steps` matching comparisons outward from the center at
    /// `position`: `(p - k, p + k)` for odd, `(p + 1 - k, p + k)` for even.
    ///
    /// This is what `scan_from_center` returns for an in-range center that stopped
    /// after `steps` matches. With `steps == 0` an even center is empty, anchored at
    /// `position + 1`.
    #[inline]
    pub fn expanded(self, position: isize, steps: usize) -> Span {
        let steps = steps as isize;
        let (lower, upper) = self.pointers(position);
        Span {
            lower: lower + 1 - steps,
            upper: upper - 1 + steps,
        }
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// A located palindrome: its text plus where it sits in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palindrome {
    /// The palindromic substring itself.
    pub text: String,
    /// Character-index span (inclusive).
    pub span: Span,
    /// Start of the substring as a UTF-8 byte offset.
    pub byte_start: usize,
    /// End (exclusive) of the substring as a UTF-8 byte offset.
    pub byte_end: usize,
}

impl Palindrome {
    /// Length in characters.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.span.len()
    }
}
