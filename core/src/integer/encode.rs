//! integer/encode.rs
//!
//! Packs integers most-significant byte first. Independent of the codec's
//! endianness mode, which only reorders array elements.

/// Write the low `out.len()` bytes of `value`, MSB first.
#[inline]
pub(crate) fn pack_be(value: u64, out: &mut [u8]) {
    let width = out.len();
    for (slot, i) in out.iter_mut().zip((0..width).rev()) {
        *slot = ((value >> (i * 8)) & 0xFF) as u8;
    }
}

#[inline]
pub fn encode_u16(v: u16) -> [u8; 2] {
    let mut out = [0u8; 2];
    pack_be(v as u64, &mut out);
    out
}

#[inline]
pub fn encode_i16(v: i16) -> [u8; 2] {
    encode_u16(v as u16)
}

#[inline]
pub fn encode_u32(v: u32) -> [u8; 4] {
    let mut out = [0u8; 4];
    pack_be(v as u64, &mut out);
    out
}

#[inline]
pub fn encode_i32(v: i32) -> [u8; 4] {
    encode_u32(v as u32)
}

#[inline]
pub fn encode_u64(v: u64) -> [u8; 8] {
    let mut out = [0u8; 8];
    pack_be(v, &mut out);
    out
}

#[inline]
pub fn encode_i64(v: i64) -> [u8; 8] {
    encode_u64(v as u64)
}
