//! integer/decode.rs
//!
//! Unpacks MSB-first integers. Accumulation is unsigned 64-bit throughout, so
//! unsigned values never pick up sign extension.

use crate::types::{CodecError, Result};

/// Accumulate the first `width` bytes of `buf`, MSB first.
#[inline]
pub(crate) fn unpack_be(buf: &[u8], width: usize) -> Result<u64> {
    if buf.len() < width {
        return Err(CodecError::Truncated { needed: width, available: buf.len() });
    }
    Ok(buf[..width].iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

#[inline]
pub fn decode_u16(buf: &[u8]) -> Result<u16> {
    Ok(unpack_be(buf, 2)? as u16)
}

#[inline]
pub fn decode_i16(buf: &[u8]) -> Result<i16> {
    Ok(decode_u16(buf)? as i16)
}

#[inline]
pub fn decode_u32(buf: &[u8]) -> Result<u32> {
    Ok(unpack_be(buf, 4)? as u32)
}

#[inline]
pub fn decode_i32(buf: &[u8]) -> Result<i32> {
    Ok(decode_u32(buf)? as i32)
}

#[inline]
pub fn decode_u64(buf: &[u8]) -> Result<u64> {
    unpack_be(buf, 8)
}

#[inline]
pub fn decode_i64(buf: &[u8]) -> Result<i64> {
    Ok(decode_u64(buf)? as i64)
}
