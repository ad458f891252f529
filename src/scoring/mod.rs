// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search hits get their numbers.
//!
//! Embedding distance dominates everything near zero. The secondary signal
//! (bookmarks or date offset) only reorders hits whose distances are already
//! close, and how early it starts to matter is what the heatmaps visualize.

mod core;
pub mod ranking;

pub use core::*;
