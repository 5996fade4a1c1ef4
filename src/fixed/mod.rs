// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-point channel arithmetic.
//!
//! A channel value is an integer in `[0, ONE]` standing for the rational
//! `value / ONE`, where `ONE = 2^mantissa_bits` comes from the
//! [`MixConfig`]. Mixing two channels replaces both with their mean.
//!
//! # Example
//!
//! ```
//! use mixing_search::config::MixConfig;
//! use mixing_search::fixed::{mix, to_fraction};
//!
//! let config = MixConfig::new(2, 0).unwrap();
//! let half = mix(0, config.one(), &config);
//! assert_eq!(half, 2);
//! assert_eq!(to_fraction(half, &config).unwrap().to_string(), "1/2");
//! ```

pub mod fraction;

pub use fraction::{to_fraction, Fraction};

use crate::config::MixConfig;

/// Fixed-point channel value.
pub type Value = u64;

/// Saturate `x` at ONE.
pub fn clamp(x: Value, config: &MixConfig) -> Value {
    x.min(config.one())
}

/// Average two channel values, rounding down.
///
/// Both inputs are clamped first, so the sum is at most `2 * ONE` and
/// cannot overflow for any supported mantissa width.
pub fn mix(x: Value, y: Value, config: &MixConfig) -> Value {
    let x = clamp(x, config);
    let y = clamp(y, config);
    (x + y) >> 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(bits: u32) -> MixConfig {
        MixConfig::new(bits, 0).unwrap()
    }

    #[test]
    fn test_clamp() {
        let c = config(3);
        assert_eq!(clamp(0, &c), 0);
        assert_eq!(clamp(5, &c), 5);
        assert_eq!(clamp(8, &c), 8);
        assert_eq!(clamp(9, &c), 8);
        assert_eq!(clamp(u64::MAX, &c), 8);
    }

    #[test]
    fn test_mix_fixed_points() {
        let c = config(4);
        let one = c.one();
        assert_eq!(mix(one, one, &c), one);
        assert_eq!(mix(0, 0, &c), 0);
        assert_eq!(mix(0, one, &c), one / 2);
        assert_eq!(mix(3, 4, &c), 3);
    }

    #[test]
    fn test_mix_saturates_inputs() {
        let c = config(2);
        assert_eq!(mix(100, 0, &c), 2);
        assert_eq!(mix(u64::MAX, u64::MAX, &c), 4);
    }

    #[test]
    fn test_mix_widest_mantissa() {
        let c = config(crate::config::MAX_MANTISSA_BITS);
        let one = c.one();
        assert_eq!(mix(one, one, &c), one);
        assert_eq!(mix(one, one - 2, &c), one - 1);
    }

    #[test]
    fn test_mix_zero_mantissa() {
        // ONE == 1, so a 0/1 mix rounds down to 0.
        let c = config(0);
        assert_eq!(mix(0, 1, &c), 0);
        assert_eq!(mix(1, 1, &c), 1);
    }

    proptest! {
        #[test]
        fn prop_clamp_is_min(bits in 0u32..=62, x in any::<u64>()) {
            let c = config(bits);
            prop_assert_eq!(clamp(x, &c), x.min(c.one()));
        }

        #[test]
        fn prop_clamp_identity_in_range(bits in 0u32..=62, seed in any::<u64>()) {
            let c = config(bits);
            let x = seed % (c.one() + 1);
            prop_assert_eq!(clamp(x, &c), x);
        }

        #[test]
        fn prop_mix_commutative(bits in 0u32..=62, a in any::<u64>(), b in any::<u64>()) {
            let c = config(bits);
            let (x, y) = (a % (c.one() + 1), b % (c.one() + 1));
            prop_assert_eq!(mix(x, y, &c), mix(y, x, &c));
        }

        #[test]
        fn prop_mix_stays_between_inputs(bits in 0u32..=62, a in any::<u64>(), b in any::<u64>()) {
            let c = config(bits);
            let (x, y) = (a % (c.one() + 1), b % (c.one() + 1));
            let m = mix(x, y, &c);
            prop_assert!(m >= x.min(y) && m <= x.max(y));
        }
    }
}
