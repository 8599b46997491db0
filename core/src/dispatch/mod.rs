//! dispatch/mod.rs
//! Type dispatcher: selects the integer, float, text, array or record path
//! for a `LogicalType` and drives it over a `ByteCursor`.
//!
//! Byte layout:
//! - Scalars are always MSB first. The endianness mode does not touch them.
//! - Arrays are the concatenation of their elements; in `Little` mode the
//!   element order is reversed, never the bytes inside an element.
//! - Strings are raw encoded text of exactly `length_hint` bytes.
//! - Enums are their underlying integer.
//! - Records are always big-endian (see `record`).

pub mod types;
pub mod codec;
pub(crate) mod session;
pub(crate) mod encode;
pub(crate) mod decode;

pub use types::{BinaryPrimitive, LogicalType, Value};
pub use codec::{decode_from_slice, encode_to_vec, Codec};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CodecConfig, Endianness, LengthPolicy};
    use crate::cursor::MemoryCursor;
    use crate::types::ErrorKind;

    fn little() -> CodecConfig {
        CodecConfig::new(Endianness::Little)
    }

    #[test]
    fn scalars_ignore_endianness() {
        let big = encode_to_vec(&Value::Int32(0x0102_0304), &LogicalType::Int32, None, &CodecConfig::default()).unwrap();
        let lil = encode_to_vec(&Value::Int32(0x0102_0304), &LogicalType::Int32, None, &little()).unwrap();
        assert_eq!(big, [1, 2, 3, 4]);
        assert_eq!(big, lil);
    }

    #[test]
    fn little_reverses_element_order_only() {
        let v = Value::from(vec![1i16, 2, 3]);
        let ty = LogicalType::array(LogicalType::Int16);
        let bytes = encode_to_vec(&v, &ty, Some(3), &little()).unwrap();
        assert_eq!(bytes, [0, 3, 0, 2, 0, 1]);
        assert_eq!(decode_from_slice(&bytes, &ty, Some(3), &little()).unwrap(), v);
    }

    #[test]
    fn length_hint_required() {
        let err = encode_to_vec(&Value::from("hi"), &LogicalType::String, None, &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingLength);
        let err = decode_from_slice(&[0; 4], &LogicalType::array(LogicalType::Byte), None, &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingLength);
    }

    #[test]
    fn unsupported_shapes() {
        let cfg = CodecConfig::default();
        let nested = LogicalType::array(LogicalType::array(LogicalType::Byte));
        let err = decode_from_slice(&[0; 4], &nested, Some(2), &cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
        assert!(err.to_string().contains("Array<Array<Byte>>"));

        let float_enum = LogicalType::enumeration("Ratio", LogicalType::Float32);
        let err = encode_to_vec(&Value::Float32(1.0), &float_enum, None, &cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    }

    #[test]
    fn type_mismatch() {
        let err = encode_to_vec(&Value::Int64(1), &LogicalType::Int32, None, &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn char_is_one_utf16_unit() {
        let cfg = CodecConfig::default();
        assert_eq!(encode_to_vec(&Value::Char('é'), &LogicalType::Char, None, &cfg).unwrap(), [0x00, 0xE9]);
        let err = encode_to_vec(&Value::Char('😀'), &LogicalType::Char, None, &cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedValue);
        let err = decode_from_slice(&[0xD8, 0x00], &LogicalType::Char, None, &cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidText);
    }

    #[test]
    fn string_length_policy() {
        let strict = CodecConfig::default();
        let err = encode_to_vec(&Value::from("hello"), &LogicalType::String, Some(3), &strict).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLayout);

        let lax = strict.with_length_policy(LengthPolicy::WarnAndTruncate);
        assert_eq!(encode_to_vec(&Value::from("hello"), &LogicalType::String, Some(3), &lax).unwrap(), b"hel");
        assert_eq!(encode_to_vec(&Value::from("hi"), &LogicalType::String, Some(4), &lax).unwrap(), b"hi\0\0");
    }

    #[test]
    fn failed_encode_writes_nothing() {
        let mut codec = Codec::new(MemoryCursor::new());
        let v = Value::Array(vec![Value::Float32(1.0), Value::Float32(f32::NAN)]);
        let err = codec.encode(&v, &LogicalType::array(LogicalType::Float32), Some(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedValue);
        assert_eq!(codec.position(), 0);
        assert!(codec.cursor().as_slice().is_empty());
        assert_eq!(codec.counters().errors, 1);
    }

    #[test]
    fn enum_dispatches_to_underlying() {
        let ty = LogicalType::enumeration("Color", LogicalType::UInt16);
        let bytes = encode_to_vec(&Value::UInt16(0x0102), &ty, None, &CodecConfig::default()).unwrap();
        assert_eq!(bytes, [1, 2]);
        assert_eq!(decode_from_slice(&bytes, &ty, None, &CodecConfig::default()).unwrap(), Value::UInt16(0x0102));
    }
}
