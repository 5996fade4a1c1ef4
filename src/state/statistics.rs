// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the explorer over one run, and read back by callers
//! and tests once exploration has finished.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Rounds actually run (at most the configured depth).
    RoundsRun,
    /// Frontier states whose pairs were enumerated.
    StatesExpanded,
    /// Successor states computed, duplicates included.
    SuccessorsGenerated,
    /// States inserted into the memo for the first time.
    StatesDiscovered,
    /// Existing records overwritten with a smaller metric.
    MetricImprovements,
    /// Improved states added to a next frontier that did not yet hold them.
    FrontierRequeues,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their snake_case names, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(move |counter| {
            let name: &'static str = counter.into();
            (name, self.get(counter))
        })
    }
}
