//! float/types.rs
//! Field layout descriptors for binary32 and binary64.

use crate::constants::{binary32, binary64};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat {
    pub name: &'static str,
    pub width: usize,
    pub exponent_bits: u32,
    pub mantissa_bits: u32,
    pub bias: i32,
    pub sign_shift: u32,
}

impl FloatFormat {
    pub const BINARY32: FloatFormat = FloatFormat {
        name: "binary32",
        width: binary32::WIDTH,
        exponent_bits: binary32::EXPONENT_BITS,
        mantissa_bits: binary32::MANTISSA_BITS,
        bias: binary32::BIAS,
        sign_shift: binary32::SIGN_SHIFT,
    };

    pub const BINARY64: FloatFormat = FloatFormat {
        name: "binary64",
        width: binary64::WIDTH,
        exponent_bits: binary64::EXPONENT_BITS,
        mantissa_bits: binary64::MANTISSA_BITS,
        bias: binary64::BIAS,
        sign_shift: binary64::SIGN_SHIFT,
    };

    #[inline]
    pub const fn exponent_mask(&self) -> u64 {
        (1u64 << self.exponent_bits) - 1
    }

    #[inline]
    pub const fn mantissa_mask(&self) -> u64 {
        (1u64 << self.mantissa_bits) - 1
    }

    /// Smallest unbiased exponent of a normal number.
    #[inline]
    pub const fn min_exponent(&self) -> i32 {
        1 - self.bias
    }

    /// Largest unbiased exponent of a finite number.
    #[inline]
    pub const fn max_exponent(&self) -> i32 {
        self.bias
    }
}

/// Exact power of two for exponents in the binary64 range.
#[inline]
pub(crate) fn pow2(e: i32) -> f64 {
    2f64.powi(e)
}
