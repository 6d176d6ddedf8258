// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest palindromes for many inputs at once.
//!
//! Each input is searched independently, so with the `parallel` feature the work is
//! spread over rayon's thread pool. Output order always matches input order, and the
//! results are identical to calling the finder one input at a time.

use crate::finder::{find_longest_palindrome, find_palindrome};
use crate::types::Palindrome;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Longest palindrome of every input, in input order.
pub fn find_longest_palindromes<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<String> {
    #[cfg(feature = "parallel")]
    {
        texts
            .par_iter()
            .map(|text| find_longest_palindrome(text.as_ref()))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        texts
            .iter()
            .map(|text| find_longest_palindrome(text.as_ref()))
            .collect()
    }
}

/// Located palindrome of every input, in input order.
pub fn find_palindromes<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Palindrome> {
    #[cfg(feature = "parallel")]
    {
        texts
            .par_iter()
            .map(|text| find_palindrome(text.as_ref()))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        texts
            .iter()
            .map(|text| find_palindrome(text.as_ref()))
            .collect()
    }
}
