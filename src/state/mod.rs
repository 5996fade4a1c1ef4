// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical channel states.
//!
//! A [`State`] is the multiset of channel values of the mixing graph. It is
//! always held sorted ascending, so channel order carries no meaning and two
//! vectors with the same values compare, hash and order identically.
//!
//! # Example
//!
//! ```
//! use mixing_search::config::MixConfig;
//! use mixing_search::state::State;
//!
//! let config = MixConfig::from_depth(1).unwrap();
//! let initial = State::from_counts(3, 1, &config);
//! assert_eq!(initial.values(), &[0, 0, 0, 2]);
//!
//! let next = initial.mix_pair(3, 0, &config);
//! assert_eq!(next.values(), &[0, 0, 1, 1]);
//! ```

pub mod pairs;
pub mod statistics;
pub mod transition;

pub use pairs::PairIter;
pub use transition::apply_mix;

use crate::config::MixConfig;
use crate::errors::{ConfigError, InternalError};
use crate::fixed::{to_fraction, Fraction, Value};
use std::fmt;

/// A canonical (ascending-sorted) vector of channel values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(Vec<Value>);

impl State {
    /// Canonicalize raw channel values without range checks.
    ///
    /// Used for vectors produced by mixing, which are in range by
    /// construction. Range is verified later by [`State::max_denominator`].
    pub fn canonical(mut values: Vec<Value>) -> Self {
        values.sort_unstable();
        Self(values)
    }

    /// Build a state from user-supplied values, rejecting any above ONE.
    pub fn new(values: Vec<Value>, config: &MixConfig) -> Result<Self, ConfigError> {
        let state = Self::canonical(values);
        state.validate(config)?;
        Ok(state)
    }

    /// Check that every value lies in `[0, ONE]`.
    pub fn validate(&self, config: &MixConfig) -> Result<(), ConfigError> {
        let one = config.one();
        match self.0.iter().find(|&&v| v > one) {
            Some(&value) => Err(ConfigError::ChannelValueOutOfRange { value, one }),
            None => Ok(()),
        }
    }

    /// The initial state: `num_zeros` zeros followed by `num_ones` copies of ONE.
    pub fn from_counts(num_zeros: usize, num_ones: usize, config: &MixConfig) -> Self {
        let mut values = vec![0; num_zeros];
        values.resize(num_zeros + num_ones, config.one());
        Self(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every unordered channel pair, in Pair Enumerator order.
    pub fn pairs(&self) -> PairIter {
        PairIter::new(self.0.len())
    }

    /// Mix channels `i` and `j`, returning the canonical successor.
    pub fn mix_pair(&self, i: usize, j: usize, config: &MixConfig) -> State {
        State::canonical(apply_mix(&self.0, i, j, config))
    }

    /// Reduced fraction of every channel, in order.
    pub fn fractions(&self, config: &MixConfig) -> Result<Vec<Fraction>, InternalError> {
        self.0.iter().map(|&v| to_fraction(v, config)).collect()
    }

    /// Largest reduced denominator among the channel values.
    ///
    /// This is the intrinsic metric of the state. An empty state has
    /// metric 1, the denominator of every integer.
    ///
    /// # Errors
    ///
    /// Any value outside `[0, ONE]` is an [`InternalError::ValueOutOfRange`].
    pub fn max_denominator(&self, config: &MixConfig) -> Result<u64, InternalError> {
        let one = config.one();
        let mut max = 1;
        for &value in &self.0 {
            if value > one {
                return Err(InternalError::ValueOutOfRange { value, one });
            }
            max = max.max(to_fraction(value, config)?.denominator());
        }
        Ok(max)
    }
}

impl fmt::Display for State {
    /// Format as "(v0, v1, ...)" using raw fixed-point values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, value) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}
