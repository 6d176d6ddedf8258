// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest palindromic substring by expand-around-center.
//!
//! Given a text, find the longest contiguous run that reads the same forwards and
//! backwards. Equal-length candidates are broken deterministically: the earliest one
//! found wins (left to right, odd center before even gap).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │  types.rs    │────▶│   scanner.rs     │────▶│  finder.rs   │
//! │ (Span,       │     │ (scan_from_center│     │ (longest_    │
//! │  Convention) │     │  palindrome_at)  │     │  palindrome) │
//! └──────────────┘     └──────────────────┘     └──────────────┘
//!        │                     │                       │
//!        ▼                     ▼                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    verify/contracts.rs                       │
//! │   (span in bounds, span or text result is a palindrome)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! `batch.rs` maps the finder over many inputs (rayon with the `parallel` feature).
//!
//! # Usage
//!
//! ```
//! use palscan::{find_longest_palindrome, find_palindrome};
//!
//! assert_eq!(
//!     find_longest_palindrome("James Joyce said tattarrattat in Ulysses"),
//!     " tattarrattat "
//! );
//!
//! let found = find_palindrome("Very fast racecar.");
//! assert_eq!((found.byte_start, found.byte_end), (10, 17));
//! ```

// Module declarations
mod batch;
mod finder;
mod scanner;
mod types;
mod utils;
pub mod verify;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use batch::{find_longest_palindromes, find_palindromes};
pub use finder::{
    find_longest_palindrome, find_palindrome, longest_palindrome, longest_palindrome_bytes,
    longest_palindrome_span,
};
pub use scanner::{palindrome_at, scan_from_center, scan_text_from_center};
pub use types::{Convention, Palindrome, Span, SpanError};
pub use utils::{char_range_to_bytes, is_palindrome};
