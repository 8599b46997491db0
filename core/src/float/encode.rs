//! float/encode.rs
//!
//! Sign, biased exponent and mantissa are composed by hand, then packed MSB
//! first through the integer codec.

use crate::config::FloatMode;
use crate::constants::FLOAT_ZERO_EPSILON;
use crate::float::types::{pow2, FloatFormat};
use crate::integer::{encode_u32, encode_u64};
use crate::types::{CodecError, Result};

/// Find `e` with `value / 2^e` in `[1, 2)`, searching the normal exponents of
/// `fmt`. `value` must be positive and finite.
pub(crate) fn normalize_exponent(value: f64, fmt: &FloatFormat) -> Result<(i32, f64)> {
    let (lo, hi) = (fmt.min_exponent(), fmt.max_exponent());

    // Seed from log2, then walk until the mantissa lands in [1, 2).
    let mut e = (value.log2().floor() as i32).clamp(lo, hi);
    loop {
        let m = value / pow2(e);
        if m >= 2.0 && e < hi {
            e += 1;
        } else if m < 1.0 && e > lo {
            e -= 1;
        } else if (1.0..2.0).contains(&m) {
            return Ok((e, m));
        } else {
            return Err(CodecError::UnsupportedValue(format!(
                "{} has no normal {} exponent",
                value, fmt.name
            )));
        }
    }
}

/// Assemble the bit pattern of `value` in `fmt`, low `fmt.width * 8` bits.
pub(crate) fn compose_bits(value: f64, fmt: &FloatFormat) -> Result<u64> {
    if value.is_nan() || value.is_infinite() {
        return Err(CodecError::UnsupportedValue(format!("{} is not finite", value)));
    }
    if value.abs() < FLOAT_ZERO_EPSILON {
        return Ok(0);
    }

    let sign = u64::from(value < 0.0);
    let (e, m) = normalize_exponent(value.abs(), fmt)?;

    let exponent = (e + fmt.bias) as u64;
    let mantissa = ((m - 1.0) * pow2(fmt.mantissa_bits as i32)) as u64;

    Ok((mantissa & fmt.mantissa_mask())
        | (exponent << fmt.mantissa_bits)
        | (sign << fmt.sign_shift))
}

pub fn encode_f32(value: f32, mode: FloatMode) -> Result<[u8; 4]> {
    let bits = match mode {
        FloatMode::Normalized => compose_bits(value as f64, &FloatFormat::BINARY32)? as u32,
        FloatMode::Native if (value.abs() as f64) < FLOAT_ZERO_EPSILON => 0,
        FloatMode::Native => value.to_bits(),
    };
    Ok(encode_u32(bits))
}

pub fn encode_f64(value: f64, mode: FloatMode) -> Result<[u8; 8]> {
    let bits = match mode {
        FloatMode::Normalized => compose_bits(value, &FloatFormat::BINARY64)?,
        FloatMode::Native if value.abs() < FLOAT_ZERO_EPSILON => 0,
        FloatMode::Native => value.to_bits(),
    };
    Ok(encode_u64(bits))
}
