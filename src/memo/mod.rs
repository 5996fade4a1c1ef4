// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Result memo.
//!
//! Every canonical state discovered by the explorer has exactly one
//! [`Record`]: the state it was (last) reached from and the best metric
//! seen for it. The memo only grows, and a record is only replaced by one
//! with a strictly smaller metric. Once exploration ends the memo is
//! handed out read-only.

use crate::config::MixConfig;
use crate::errors::InternalError;
use crate::state::State;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Metric recorded for the initial state.
pub const INITIAL_METRIC: u64 = 1;

/// How a state was reached, and at what cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Canonical state that produced this one in a single mixing step.
    pub predecessor: State,
    /// Smallest discovery metric seen so far.
    pub best_metric: u64,
    /// Exploration round that wrote this record (0 for the initial state).
    pub round: usize,
}

/// Outcome of offering a discovery to the memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// First time this state was seen.
    Discovered,
    /// Known state, and the record was replaced by a better one.
    Improved,
    /// Known state, existing record kept.
    Kept,
}

/// A state whose recorded metric is worse than its own values require.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exceptional {
    pub state: State,
    /// Metric stored in the memo.
    pub recorded: u64,
    /// Max denominator of the state's own values.
    pub intrinsic: u64,
}

/// Map from canonical state to its [`Record`].
#[derive(Debug, Clone)]
pub struct ResultMemo {
    records: HashMap<State, Record>,
}

impl ResultMemo {
    /// Create a memo holding only `initial`, its own predecessor.
    pub fn seeded(initial: State) -> Self {
        let record = Record {
            predecessor: initial.clone(),
            best_metric: INITIAL_METRIC,
            round: 0,
        };
        let mut records = HashMap::new();
        records.insert(initial, record);
        Self { records }
    }

    /// Record that `state` was reached from `predecessor` with `metric`.
    ///
    /// Unknown states are inserted. Known states are overwritten only when
    /// `metric` is strictly smaller than the stored one.
    pub fn offer(&mut self, state: State, predecessor: &State, metric: u64, round: usize) -> Offer {
        match self.records.entry(state) {
            Entry::Vacant(slot) => {
                slot.insert(Record {
                    predecessor: predecessor.clone(),
                    best_metric: metric,
                    round,
                });
                Offer::Discovered
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if metric < existing.best_metric {
                    existing.predecessor = predecessor.clone();
                    existing.best_metric = metric;
                    existing.round = round;
                    Offer::Improved
                } else {
                    Offer::Kept
                }
            }
        }
    }

    pub fn get(&self, state: &State) -> Option<&Record> {
        self.records.get(state)
    }

    pub fn contains(&self, state: &State) -> bool {
        self.records.contains_key(state)
    }

    /// Number of discovered states.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&State, &Record)> {
        self.records.iter()
    }

    /// All entries ordered by round, then by canonical state.
    pub fn in_report_order(&self) -> Vec<(&State, &Record)> {
        let mut entries: Vec<_> = self.records.iter().collect();
        entries.sort_by(|(sa, ra), (sb, rb)| ra.round.cmp(&rb.round).then_with(|| sa.cmp(sb)));
        entries
    }

    /// Intrinsic metric of `state`: the max denominator of its values.
    pub fn intrinsic_metric(state: &State, config: &MixConfig) -> Result<u64, InternalError> {
        state.max_denominator(config)
    }

    /// States whose recorded metric exceeds their intrinsic metric,
    /// in report order.
    pub fn exceptional(&self, config: &MixConfig) -> Result<Vec<Exceptional>, InternalError> {
        let mut found = Vec::new();
        for (state, record) in self.in_report_order() {
            let intrinsic = Self::intrinsic_metric(state, config)?;
            if record.best_metric > intrinsic {
                found.push(Exceptional {
                    state: state.clone(),
                    recorded: record.best_metric,
                    intrinsic,
                });
            }
        }
        Ok(found)
    }
}
