// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! State Transition Generator.
//!
//! One mixing step merges two channels: both end up holding the mean of
//! their previous values, every other channel is untouched.

use crate::config::MixConfig;
use crate::fixed::{mix, Value};

/// Mix channels `i` and `j` of `values`, returning the new vector.
///
/// The input is not modified and the result is not canonicalized.
///
/// # Panics
///
/// Panics if `i == j` or either index is out of bounds.
pub fn apply_mix(values: &[Value], i: usize, j: usize, config: &MixConfig) -> Vec<Value> {
    assert_ne!(i, j, "Cannot mix channel {} with itself", i);
    assert!(
        i < values.len() && j < values.len(),
        "Channel pair ({}, {}) out of bounds for {} channels",
        i,
        j,
        values.len()
    );

    let mixed = mix(values[i], values[j], config);
    let mut next = values.to_vec();
    next[i] = mixed;
    next[j] = mixed;
    next
}
