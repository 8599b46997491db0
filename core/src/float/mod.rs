//! float/mod.rs
//! IEEE-754 float codec with manual bit assembly.
//!
//! Policy:
//! - Magnitudes below `FLOAT_ZERO_EPSILON` encode as all-zero bytes and decode
//!   to `0.0` (subnormals always fall in this band).
//! - `FloatMode::Normalized` rejects NaN and infinities with `UnsupportedValue`,
//!   on encode and on decoding an all-ones exponent.
//! - `FloatMode::Native` reinterprets bits directly and lets non-finite values
//!   through; the zero band still applies.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::FloatFormat;
pub use encode::{encode_f32, encode_f64};
pub use decode::{decode_f32, decode_f64};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloatMode::{Native, Normalized};
    use crate::types::ErrorKind;

    #[test]
    fn pi_roundtrip_f32() {
        let bytes = encode_f32(3.14159, Normalized).unwrap();
        let back = decode_f32(&bytes, Normalized).unwrap();
        assert!((back - 3.14159).abs() < 1e-5);
    }

    #[test]
    fn bits_match_ieee_layout() {
        for v in [1.0f32, -2.5, 0.15625, 123456.78, f32::MAX, -1e-5] {
            assert_eq!(encode_f32(v, Normalized).unwrap(), v.to_bits().to_be_bytes(), "{}", v);
        }
        for v in [1.0f64, -2.5, 0.1, 6.02214076e23, f64::MAX, 1e300, -7e-6] {
            assert_eq!(encode_f64(v, Normalized).unwrap(), v.to_bits().to_be_bytes(), "{}", v);
        }
    }

    #[test]
    fn near_zero_collapses() {
        assert_eq!(encode_f32(0.0000001, Normalized).unwrap(), [0; 4]);
        assert_eq!(encode_f32(-0.0, Normalized).unwrap(), [0; 4]);
        assert_eq!(encode_f64(f64::MIN_POSITIVE, Normalized).unwrap(), [0; 8]);
        assert_eq!(encode_f32(f32::MIN_POSITIVE / 4.0, Native).unwrap(), [0; 4]);
        assert_eq!(decode_f32(&[0; 4], Normalized).unwrap(), 0.0);
        assert_eq!(decode_f64(&[0; 8], Normalized).unwrap(), 0.0);
    }

    #[test]
    fn decode_clamps_tiny_bit_patterns() {
        // 1e-7 encoded natively, decoded by either mode, lands on zero
        let tiny = 1e-7f32.to_bits().to_be_bytes();
        assert_eq!(decode_f32(&tiny, Normalized).unwrap(), 0.0);
        assert_eq!(decode_f32(&tiny, Native).unwrap(), 0.0);
        // subnormal bit pattern
        assert_eq!(decode_f64(&[0, 0, 0, 0, 0, 0, 0, 1], Normalized).unwrap(), 0.0);
    }

    #[test]
    fn non_finite_policy() {
        assert_eq!(encode_f32(f32::NAN, Normalized).unwrap_err().kind(), ErrorKind::UnsupportedValue);
        assert_eq!(encode_f64(f64::INFINITY, Normalized).unwrap_err().kind(), ErrorKind::UnsupportedValue);

        let inf = f32::INFINITY.to_bits().to_be_bytes();
        assert_eq!(decode_f32(&inf, Normalized).unwrap_err().kind(), ErrorKind::UnsupportedValue);

        assert_eq!(encode_f64(f64::NEG_INFINITY, Native).unwrap(), f64::NEG_INFINITY.to_bits().to_be_bytes());
        assert!(decode_f32(&f32::NAN.to_bits().to_be_bytes(), Native).unwrap().is_nan());
    }

    #[test]
    fn truncated_input() {
        assert_eq!(decode_f32(&[0x40, 0x49], Normalized).unwrap_err().kind(), ErrorKind::Truncated);
        assert_eq!(decode_f64(&[0; 7], Native).unwrap_err().kind(), ErrorKind::Truncated);
    }

    #[test]
    fn exponent_search_covers_extremes() {
        let (e, m) = encode::normalize_exponent(f32::MAX as f64, &FloatFormat::BINARY32).unwrap();
        assert_eq!(e, 127);
        assert!((1.0..2.0).contains(&m));

        let (e, _) = encode::normalize_exponent(1.0, &FloatFormat::BINARY64).unwrap();
        assert_eq!(e, 0);
        let (e, _) = encode::normalize_exponent(0.75, &FloatFormat::BINARY64).unwrap();
        assert_eq!(e, -1);
    }

    #[test]
    fn out_of_range_for_format() {
        // representable in binary64 but not binary32
        let err = encode::compose_bits(1e39, &FloatFormat::BINARY32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedValue);
    }
}
