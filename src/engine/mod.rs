// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Breadth-first exploration of the mixing graph.
//!
//! The [`Explorer`] owns the result memo and two frontiers. Each round it
//! expands every state of the current frontier: for every channel pair it
//! mixes the pair, canonicalizes the successor, computes the discovery
//! metric and offers the discovery to the memo. New states (and, under
//! [`FrontierPolicy::Requeue`], improved ones) form the next frontier.
//!
//! Exploration stops after `depth` rounds or as soon as a frontier is empty.
//!
//! # Example
//!
//! ```
//! use mixing_search::config::MixConfig;
//! use mixing_search::engine::{explore, ExplorePolicy};
//! use mixing_search::state::State;
//!
//! let config = MixConfig::from_depth(1).unwrap();
//! let initial = State::from_counts(3, 1, &config);
//! let exploration = explore(config, ExplorePolicy::default(), initial).unwrap();
//!
//! assert_eq!(exploration.memo.len(), 2);
//! ```

pub mod policy;

pub use policy::{DiscoveryMetric, ExplorePolicy, FrontierPolicy};

use crate::config::MixConfig;
use crate::errors::{ExploreError, InternalError};
use crate::memo::{Exceptional, Offer, ResultMemo, INITIAL_METRIC};
use crate::state::statistics::{Counters, Statistics};
use crate::state::State;
use std::collections::BTreeSet;
use tracing::{debug, info, trace};

/// Result of a finished exploration.
#[derive(Debug, Clone)]
pub struct Exploration {
    pub config: MixConfig,
    pub initial: State,
    pub memo: ResultMemo,
    pub statistics: Statistics,
}

impl Exploration {
    /// States whose recorded metric exceeds their intrinsic one.
    pub fn exceptional(&self) -> Result<Vec<Exceptional>, InternalError> {
        self.memo.exceptional(&self.config)
    }
}

/// Breadth-first driver over canonical states.
#[derive(Debug)]
pub struct Explorer {
    config: MixConfig,
    policy: ExplorePolicy,
    initial: State,
    memo: ResultMemo,

    /// States to expand this round. Ordered so traversal is reproducible.
    frontier: BTreeSet<State>,

    /// States staged for the next round.
    next: BTreeSet<State>,

    /// Rounds completed so far.
    round: usize,

    statistics: Statistics,
}

impl Explorer {
    /// Create an explorer seeded with `initial`.
    ///
    /// Fails if `initial` holds a value outside `[0, ONE]`.
    pub fn new(
        config: MixConfig,
        policy: ExplorePolicy,
        initial: State,
    ) -> Result<Self, ExploreError> {
        initial.validate(&config)?;

        let memo = ResultMemo::seeded(initial.clone());
        let mut frontier = BTreeSet::new();
        frontier.insert(initial.clone());

        Ok(Self {
            config,
            policy,
            initial,
            memo,
            frontier,
            next: BTreeSet::new(),
            round: 0,
            statistics: Statistics::new(),
        })
    }

    /// Run one round.
    ///
    /// Returns `Ok(false)` without doing anything if all `depth` rounds have
    /// been run or the frontier is empty.
    pub fn step(&mut self) -> Result<bool, InternalError> {
        if self.is_finished() {
            return Ok(false);
        }

        self.round += 1;
        let frontier = std::mem::take(&mut self.frontier);
        for state in &frontier {
            self.expand(state)?;
        }
        self.frontier = std::mem::take(&mut self.next);
        self.statistics.increment_counter(Counters::RoundsRun);

        debug!(
            round = self.round,
            expanded = frontier.len(),
            next_frontier = self.frontier.len(),
            memo = self.memo.len(),
            "round complete"
        );
        Ok(true)
    }

    /// Run rounds until finished, then hand out the results.
    pub fn run(mut self) -> Result<Exploration, InternalError> {
        info!(
            channels = self.initial.len(),
            mantissa_bits = self.config.mantissa_bits(),
            depth = self.config.depth(),
            policy = ?self.policy,
            "starting exploration"
        );

        while self.step()? {}

        info!(
            rounds = self.round,
            states = self.memo.len(),
            "exploration finished"
        );
        for (name, value) in self.statistics.entries() {
            debug!(counter = name, value, "statistics");
        }

        Ok(Exploration {
            config: self.config,
            initial: self.initial,
            memo: self.memo,
            statistics: self.statistics,
        })
    }

    /// Whether no further round will run.
    pub fn is_finished(&self) -> bool {
        self.round >= self.config.depth() || self.frontier.is_empty()
    }

    /// Rounds completed so far.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn memo(&self) -> &ResultMemo {
        &self.memo
    }

    /// States that the next round will expand.
    pub fn frontier(&self) -> &BTreeSet<State> {
        &self.frontier
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Offer every one-step successor of `state` to the memo.
    fn expand(&mut self, state: &State) -> Result<(), InternalError> {
        self.statistics.increment_counter(Counters::StatesExpanded);

        let producer_intrinsic = state.max_denominator(&self.config)?;
        // Read once: if `state` itself improves during this round, the new
        // value applies from the next round on.
        let producer_recorded = self
            .memo
            .get(state)
            .map_or(INITIAL_METRIC, |record| record.best_metric);

        for (i, j) in state.pairs() {
            let successor = state.mix_pair(i, j, &self.config);
            self.statistics.increment_counter(Counters::SuccessorsGenerated);

            let successor_intrinsic = successor.max_denominator(&self.config)?;
            let metric = self.policy.metric.combine(
                producer_intrinsic,
                producer_recorded,
                successor_intrinsic,
            );

            match self.memo.offer(successor.clone(), state, metric, self.round) {
                Offer::Discovered => {
                    self.statistics.increment_counter(Counters::StatesDiscovered);
                    self.next.insert(successor);
                }
                Offer::Improved => {
                    self.statistics.increment_counter(Counters::MetricImprovements);
                    trace!(state = %successor, from = %state, metric, "metric improved");
                    // Already staged if first found earlier this round.
                    if self.policy.frontier == FrontierPolicy::Requeue
                        && self.next.insert(successor)
                    {
                        self.statistics.increment_counter(Counters::FrontierRequeues);
                    }
                }
                Offer::Kept => {}
            }
        }
        Ok(())
    }
}

/// Explore from `initial` for `config.depth()` rounds.
pub fn explore(
    config: MixConfig,
    policy: ExplorePolicy,
    initial: State,
) -> Result<Exploration, ExploreError> {
    let explorer = Explorer::new(config, policy, initial)?;
    Ok(explorer.run()?)
}
