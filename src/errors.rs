// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuration, exploration and reporting.

use thiserror::Error;

/// Errors in the requested configuration or initial state.
///
/// These are user errors: the binary reports them and exits nonzero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The mantissa would not leave headroom for `x + y` in a `u64`.
    #[error("mantissa of {requested} bits exceeds the supported maximum of {max}")]
    MantissaTooWide { requested: u32, max: u32 },

    /// The depth was used as the mantissa width and is too large for it.
    #[error("depth {requested} exceeds the supported maximum of {max}")]
    DepthTooLarge { requested: usize, max: u32 },

    /// A hand-built initial state holds a value above ONE.
    #[error("channel value {value} is outside [0, {one}]")]
    ChannelValueOutOfRange { value: u64, one: u64 },
}

/// Internal consistency failures.
///
/// These indicate a defect in state generation, never a user error.
/// Exploration aborts as soon as one is seen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    /// A stored channel value escaped `[0, ONE]`.
    #[error("internal error: channel value {value} is outside [0, {one}]")]
    ValueOutOfRange { value: u64, one: u64 },

    /// The lowest-set-bit scan ran past the mantissa.
    #[error("internal error: no set bit of {value} within {mantissa_bits} mantissa bits")]
    MissingLowBit { value: u64, mantissa_bits: u32 },
}

/// Any failure of an exploration run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExploreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Failure while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Internal(#[from] InternalError),
}
