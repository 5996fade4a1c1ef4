// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable run configuration.
//!
//! A [`MixConfig`] fixes the fixed-point precision and the number of
//! exploration rounds. It is built once and passed by reference to every
//! arithmetic and exploration routine.
//!
//! # Fixed-point width
//!
//! Channel values are `u64`. Mixing adds two clamped values before halving,
//! so `2 * ONE` has to fit in a `u64`, which limits the mantissa to
//! [`MAX_MANTISSA_BITS`] bits.
//!
//! # Example
//!
//! ```
//! use mixing_search::config::MixConfig;
//!
//! let config = MixConfig::from_depth(3).unwrap();
//! assert_eq!(config.mantissa_bits(), 3);
//! assert_eq!(config.one(), 8);
//! ```

use crate::errors::ConfigError;

/// Largest supported mantissa width.
pub const MAX_MANTISSA_BITS: u32 = 62;

/// Fixed-point precision and exploration depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixConfig {
    mantissa_bits: u32,
    depth: usize,
    one: u64,
}

impl MixConfig {
    /// Create a configuration with an explicit mantissa width.
    pub fn new(mantissa_bits: u32, depth: usize) -> Result<Self, ConfigError> {
        if mantissa_bits > MAX_MANTISSA_BITS {
            return Err(ConfigError::MantissaTooWide {
                requested: mantissa_bits,
                max: MAX_MANTISSA_BITS,
            });
        }
        Ok(Self {
            mantissa_bits,
            depth,
            one: 1u64 << mantissa_bits,
        })
    }

    /// Create a configuration whose mantissa is exactly `depth` bits wide.
    ///
    /// With `depth` mixing rounds no value can need more than `depth`
    /// fractional bits, so this precision never truncates.
    pub fn from_depth(depth: usize) -> Result<Self, ConfigError> {
        match u32::try_from(depth) {
            Ok(bits) if bits <= MAX_MANTISSA_BITS => Self::new(bits, depth),
            _ => Err(ConfigError::DepthTooLarge {
                requested: depth,
                max: MAX_MANTISSA_BITS,
            }),
        }
    }

    /// Number of fractional bits.
    pub fn mantissa_bits(&self) -> u32 {
        self.mantissa_bits
    }

    /// Number of exploration rounds.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Fixed-point representation of 1.0 (`2^mantissa_bits`).
    pub fn one(&self) -> u64 {
        self.one
    }
}
