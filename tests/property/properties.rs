// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! General properties of the finder over random inputs.

use super::common::{assert_result_well_formed, chars};
use palscan::{
    find_longest_palindrome, find_palindrome, is_palindrome, longest_palindrome_bytes,
    longest_palindrome_span,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Words that read the same backwards, to plant in generated text.
fn palindrome_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{0,6}")
        .unwrap()
        .prop_flat_map(|half| {
            prop::option::of(prop::char::range('x', 'z')).prop_map(move |middle| {
                let mut word = half.clone();
                word.extend(middle);
                word.extend(half.chars().rev());
                word
            })
        })
}

/// Text with a palindrome planted between two random runs.
fn planted_strategy() -> impl Strategy<Value = (String, String)> {
    let run = || prop::string::string_regex("[a-z ]{0,20}").unwrap();
    (run(), palindrome_strategy(), run())
        .prop_map(|(before, word, after)| (format!("{}{}{}", before, word, after), word))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Result is a contiguous substring and a palindrome.
    #[test]
    fn prop_result_is_palindromic_substring(text in ".{0,40}") {
        let result = find_longest_palindrome(&text);
        assert_result_well_formed(&text, &result);
    }

    /// Non-empty input always has at least a one-character palindrome.
    #[test]
    fn prop_non_empty_input_non_empty_result(text in ".{1,40}") {
        prop_assert!(!find_longest_palindrome(&text).is_empty());
    }

    /// No palindromic substring is strictly longer than the result.
    #[test]
    fn prop_nothing_longer_exists(text in "[ab ]{0,24}") {
        let best = find_longest_palindrome(&text).chars().count();
        let seq = chars(&text);
        for start in 0..seq.len() {
            for end in (start + best + 1)..=seq.len() {
                prop_assert!(!is_palindrome(&seq[start..end]));
            }
        }
    }

    /// A planted palindrome is never longer than what is found.
    #[test]
    fn prop_planted_palindrome_is_lower_bound((text, word) in planted_strategy()) {
        let found = find_longest_palindrome(&text);
        prop_assert!(found.chars().count() >= word.chars().count());
    }

    /// Same input, same answer.
    #[test]
    fn prop_deterministic(text in ".{0,40}") {
        prop_assert_eq!(find_palindrome(&text), find_palindrome(&text));
    }

    /// Reported offsets point at the reported text.
    #[test]
    fn prop_offsets_consistent(text in ".{0,40}") {
        let found = find_palindrome(&text);
        prop_assert_eq!(&text[found.byte_start..found.byte_end], found.text.as_str());
        prop_assert_eq!(found.span.len(), found.text.chars().count());
        prop_assert!(found.span.within(text.chars().count()));
    }

    /// The `&str` search picks exactly the span the indexed search picks over chars.
    #[test]
    fn prop_text_search_matches_indexed_search(text in "[aé日 ]{0,30}") {
        let found = find_palindrome(&text);
        prop_assert_eq!(found.span, longest_palindrome_span(&chars(&text)));
    }

    /// Byte slices go through the same scanner as characters.
    #[test]
    fn prop_byte_result_is_palindrome(bytes in prop::collection::vec(0u8..4, 0..64)) {
        let found = longest_palindrome_bytes(&bytes);
        prop_assert!(is_palindrome(found));
        prop_assert!(longest_palindrome_span(&bytes).within(bytes.len()));
    }

    /// Reversing the input can change which palindrome wins a tie, but not its length.
    #[test]
    fn prop_reverse_preserves_length(text in "[abc]{0,30}") {
        let reversed: String = text.chars().rev().collect();
        prop_assert_eq!(
            find_longest_palindrome(&text).chars().count(),
            find_longest_palindrome(&reversed).chars().count()
        );
    }
}
