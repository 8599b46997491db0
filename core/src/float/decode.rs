//! float/decode.rs
//!
//! The incoming buffer is MSB first. It is byte-reversed once and accumulated
//! little-endian, then sign, exponent and mantissa are masked out and the
//! value rebuilt as `sign * (1 + mantissa / 2^mb) * 2^(exponent - bias)`.

use byteorder::{ByteOrder, LittleEndian};

use crate::config::FloatMode;
use crate::constants::FLOAT_ZERO_EPSILON;
use crate::float::types::{pow2, FloatFormat};
use crate::types::{CodecError, Result};

/// Copy the first `fmt.width` bytes, reversed.
fn reversed(buf: &[u8], fmt: &FloatFormat) -> Result<[u8; 8]> {
    if buf.len() < fmt.width {
        return Err(CodecError::Truncated { needed: fmt.width, available: buf.len() });
    }
    let mut out = [0u8; 8];
    for (dst, src) in out.iter_mut().zip(buf[..fmt.width].iter().rev()) {
        *dst = *src;
    }
    Ok(out)
}

#[inline]
fn clamp_zero(value: f64) -> f64 {
    if value.abs() < FLOAT_ZERO_EPSILON {
        0.0
    } else {
        value
    }
}

pub(crate) fn decompose_bits(bits: u64, fmt: &FloatFormat) -> Result<f64> {
    let sign = (bits >> fmt.sign_shift) & 1;
    let exponent = (bits >> fmt.mantissa_bits) & fmt.exponent_mask();
    let mantissa = bits & fmt.mantissa_mask();

    if exponent == fmt.exponent_mask() {
        return Err(CodecError::UnsupportedValue(format!(
            "{} bit pattern 0x{:x} is not finite",
            fmt.name, bits
        )));
    }
    if exponent == 0 && mantissa == 0 {
        return Ok(0.0);
    }

    let fraction = 1.0 + mantissa as f64 / pow2(fmt.mantissa_bits as i32);
    let magnitude = fraction * pow2(exponent as i32 - fmt.bias);
    let value = if sign == 1 { -magnitude } else { magnitude };
    Ok(clamp_zero(value))
}

pub fn decode_f32(buf: &[u8], mode: FloatMode) -> Result<f32> {
    let fmt = FloatFormat::BINARY32;
    let le = reversed(buf, &fmt)?;
    let bits = LittleEndian::read_u32(&le[..fmt.width]);

    match mode {
        FloatMode::Normalized => Ok(decompose_bits(bits as u64, &fmt)? as f32),
        FloatMode::Native => {
            let v = f32::from_bits(bits);
            Ok(if v.is_finite() { clamp_zero(v as f64) as f32 } else { v })
        }
    }
}

pub fn decode_f64(buf: &[u8], mode: FloatMode) -> Result<f64> {
    let fmt = FloatFormat::BINARY64;
    let le = reversed(buf, &fmt)?;
    let bits = LittleEndian::read_u64(&le);

    match mode {
        FloatMode::Normalized => decompose_bits(bits, &fmt),
        FloatMode::Native => {
            let v = f64::from_bits(bits);
            Ok(if v.is_finite() { clamp_zero(v) } else { v })
        }
    }
}
