// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Breadth-first search over the states of a microfluidic mixing graph.
//!
//! A state is a fixed-length vector of channel compositions, each a
//! fixed-point fraction in `[0, 1]`. A mixing step replaces two channels
//! with their mean. Starting from a vector of zeros and ones, the search
//! enumerates every distinct multiset of channel values reachable within a
//! given number of steps, and records for each one a predecessor and a
//! quality metric based on the reduced denominators of the values.
//!
//! # Architecture
//!
//! ## Arithmetic
//!
//! - [`config`]: the immutable precision and depth of a run
//! - [`fixed`]: clamping, mixing, and reduction of values to fractions
//!
//! ## Search
//!
//! - [`state`]: canonical (sorted) states, the pair enumerator, the
//!   transition generator, and run statistics
//! - [`memo`]: the result memo, one record per discovered state
//! - [`engine`]: the breadth-first explorer and its policy
//!
//! ## Output
//!
//! - [`report`]: the text table and the exceptional-state listing
//!
//! All configuration is passed explicitly. There is no global state, and a
//! run is single-threaded and synchronous from start to finish.
//!
//! # Example
//!
//! ```
//! use mixing_search::{explore, ExplorePolicy, MixConfig, State};
//!
//! let config = MixConfig::from_depth(2).unwrap();
//! let initial = State::from_counts(2, 2, &config);
//! let exploration = explore(config, ExplorePolicy::default(), initial).unwrap();
//!
//! assert!(exploration.memo.len() > 1);
//! assert!(exploration.exceptional().unwrap().is_empty());
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod fixed;
pub mod memo;
pub mod report;
pub mod state;

// Re-export commonly used types
pub use config::MixConfig;
pub use engine::{explore, Exploration, ExplorePolicy, Explorer};
pub use memo::{Record, ResultMemo};
pub use report::Reporter;
pub use state::State;
