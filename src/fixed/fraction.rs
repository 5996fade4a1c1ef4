// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reduction of fixed-point values to fractions.
//!
//! Because ONE is a power of two, `value / ONE` in lowest terms has a
//! power-of-two denominator. The exponent removed from the denominator is
//! the 2-adic valuation of the value, i.e. the index of its lowest set bit.

use crate::config::MixConfig;
use crate::errors::InternalError;
use crate::fixed::Value;
use std::fmt;

/// A reduced fraction with a power-of-two denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// Create a fraction from its parts. No reduction is performed.
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(self) -> u64 {
        self.numerator
    }

    pub fn denominator(self) -> u64 {
        self.denominator
    }
}

impl fmt::Display for Fraction {
    /// Format as "n/d".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<Fraction> for (u64, u64) {
    fn from(fraction: Fraction) -> Self {
        (fraction.numerator, fraction.denominator)
    }
}

/// Convert a fixed-point value to the reduced fraction `x / ONE`.
///
/// Zero maps to `0/1`, and anything at or above ONE maps to `1/1`.
///
/// # Errors
///
/// Returns [`InternalError::MissingLowBit`] if a nonzero value below ONE
/// has no set bit within the mantissa. Values produced by mixing always
/// do, so this only fires on a defect in state generation.
pub fn to_fraction(x: Value, config: &MixConfig) -> Result<Fraction, InternalError> {
    if x == 0 {
        return Ok(Fraction::new(0, 1));
    }
    if x >= config.one() {
        return Ok(Fraction::new(1, 1));
    }

    let mantissa_bits = config.mantissa_bits();
    let exponent = x.trailing_zeros();
    if exponent >= mantissa_bits {
        return Err(InternalError::MissingLowBit {
            value: x,
            mantissa_bits,
        });
    }

    Ok(Fraction::new(x >> exponent, 1u64 << (mantissa_bits - exponent)))
}
