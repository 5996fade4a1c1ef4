// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exploration policy.
//!
//! Two details of the exploration are left as choices:
//!
//! - whether a known state whose record improves goes back on the next
//!   frontier ([`FrontierPolicy`]);
//! - which quantity is recorded as the metric of a discovery
//!   ([`DiscoveryMetric`]).
//!
//! The defaults requeue improved states and use the successor's own max
//! denominator.

use strum_macros::{Display, EnumString};

/// What happens to a known state whose record was improved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierPolicy {
    /// Put it on the next frontier so exploration continues from the
    /// better path.
    #[default]
    Requeue,
    /// Update the record only. Exploration from the improved state stops.
    Legacy,
}

/// The metric attached to a discovery of `successor` from `producer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DiscoveryMetric {
    /// Max denominator of the successor's own values.
    #[default]
    Successor,
    /// Max denominator of the producer's values.
    Producer,
    /// Worst denominator along the recorded path: the larger of the
    /// producer's recorded metric and the successor's own.
    ///
    /// Under breadth-first order records do not improve with this metric,
    /// so the frontier policy makes no difference to it.
    Path,
}

impl DiscoveryMetric {
    /// Combine the metrics known at discovery time.
    pub fn combine(
        self,
        producer_intrinsic: u64,
        producer_recorded: u64,
        successor_intrinsic: u64,
    ) -> u64 {
        match self {
            DiscoveryMetric::Successor => successor_intrinsic,
            DiscoveryMetric::Producer => producer_intrinsic,
            DiscoveryMetric::Path => producer_recorded.max(successor_intrinsic),
        }
    }
}

/// Policy knobs for one exploration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExplorePolicy {
    pub frontier: FrontierPolicy,
    pub metric: DiscoveryMetric,
}

impl ExplorePolicy {
    /// Reproduce the reference tool: successor metric, no requeue.
    pub fn legacy() -> Self {
        Self {
            frontier: FrontierPolicy::Legacy,
            metric: DiscoveryMetric::Successor,
        }
    }
}
