// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the center scanner with arbitrary start pointers.
//!
//! Any `(lower, upper)` pair, negative or huge, must be tolerated without indexing
//! out of bounds, and the returned span must stay inside the sequence.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use palscan::scan_from_center;

#[derive(Debug, Arbitrary)]
struct ScanInput {
    lower: isize,
    upper: isize,
    sequence: Vec<u8>,
}

fuzz_target!(|input: ScanInput| {
    let span = scan_from_center(input.lower, input.upper, &input.sequence);

    // INVARIANT 1: result fits the sequence
    assert!(span.within(input.sequence.len()));

    // INVARIANT 2: slicing never panics and agrees with len()
    assert_eq!(span.slice(&input.sequence).len(), span.len());
});
