/// Magnitudes strictly below this collapse to zero, in both directions and for
/// both float widths. Must stay identical on encode and decode.
pub const FLOAT_ZERO_EPSILON: f64 = 1e-6;

/// IEEE-754 binary32 layout.
pub mod binary32 {
    pub const WIDTH: usize = 4;
    pub const EXPONENT_BITS: u32 = 8;
    pub const MANTISSA_BITS: u32 = 23;
    pub const BIAS: i32 = 127;
    pub const SIGN_SHIFT: u32 = 31;
}

/// IEEE-754 binary64 layout.
pub mod binary64 {
    pub const WIDTH: usize = 8;
    pub const EXPONENT_BITS: u32 = 11;
    pub const MANTISSA_BITS: u32 = 52;
    pub const BIAS: i32 = 1023;
    pub const SIGN_SHIFT: u32 = 63;
}

/// Encoded widths of the scalar logical types (bytes).
pub mod widths {
    pub const BYTE: usize = 1;
    pub const CHAR: usize = 2;
    pub const INT16: usize = 2;
    pub const INT32: usize = 4;
    pub const INT64: usize = 8;
    pub const FLOAT32: usize = super::binary32::WIDTH;
    pub const FLOAT64: usize = super::binary64::WIDTH;
}

/// Scratch capacity used when a record is staged before commit.
pub const RECORD_STAGING_CAPACITY: usize = 256;

/// Preallocation cap for caller-supplied element and byte counts. Buffers
/// grow past it only as data actually arrives.
pub const MAX_PREALLOC: usize = 4096;

/// Chunk size for reads from non-seekable transports.
pub const STREAM_READ_CHUNK: usize = 8 * 1024;
