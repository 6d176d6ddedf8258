// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level invariants**: `Span` can't be constructed with negative length,
//!    see `types`.
//!
//! 2. **Runtime contracts** that panic in debug builds when a search result is out of
//!    bounds or does not read the same in both directions. Zero-cost in release.

pub mod contracts;
