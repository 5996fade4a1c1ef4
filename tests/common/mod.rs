// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use mixing_search::{explore, Exploration, ExplorePolicy, MixConfig, State};
use std::collections::{BTreeMap, BTreeSet};

/// Explore from `num_zeros` zeros and `num_ones` ones, with the mantissa
/// width equal to the depth.
pub fn run(num_zeros: usize, num_ones: usize, depth: usize, policy: ExplorePolicy) -> Exploration {
    let config = MixConfig::from_depth(depth).expect("depth fits");
    run_with(num_zeros, num_ones, config, policy)
}

/// Explore with an explicit configuration.
pub fn run_with(
    num_zeros: usize,
    num_ones: usize,
    config: MixConfig,
    policy: ExplorePolicy,
) -> Exploration {
    let initial = State::from_counts(num_zeros, num_ones, &config);
    explore(config, policy, initial).expect("exploration succeeds")
}

/// Canonical state from raw values.
pub fn state(values: &[u64]) -> State {
    State::canonical(values.to_vec())
}

/// All memo keys, ordered.
pub fn memo_keys(exploration: &Exploration) -> BTreeSet<State> {
    exploration.memo.iter().map(|(s, _)| s.clone()).collect()
}

/// Independent breadth-first search with an explicit step counter.
///
/// Works on plain sorted vectors and its own averaging, and returns the
/// fewest mixing steps needed to reach every state within `max_steps`.
pub fn reference_distances(
    initial: &[u64],
    one: u64,
    max_steps: usize,
) -> BTreeMap<Vec<u64>, usize> {
    let mut start = initial.to_vec();
    start.sort();

    let mut distances = BTreeMap::new();
    distances.insert(start.clone(), 0);
    let mut layer = vec![start];

    for step in 1..=max_steps {
        let mut next_layer = Vec::new();
        for values in &layer {
            for a in 0..values.len() {
                for b in (a + 1)..values.len() {
                    let mean = (values[a].min(one) + values[b].min(one)) / 2;
                    let mut mixed = values.clone();
                    mixed[a] = mean;
                    mixed[b] = mean;
                    mixed.sort();
                    if !distances.contains_key(&mixed) {
                        distances.insert(mixed.clone(), step);
                        next_layer.push(mixed);
                    }
                }
            }
        }
        layer = next_layer;
    }
    distances
}
