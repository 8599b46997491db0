#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use num_enum::{IntoPrimitive, TryFromPrimitive};
    use proptest::prelude::*;
    use codec_core::{
        prelude::*,
        text::Latin1Encoder,
    };

    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
    enum Opcode {
        Ping = 1,
        Pong = 2,
        Close = 0x10,
    }

    #[repr(i32)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
    enum Status {
        Failed = -1,
        Ok = 0,
    }

    fn int16_array() -> LogicalType {
        LogicalType::array(LogicalType::Int16)
    }

    #[test]
    fn test_int16_array_little_is_element_reversed() {
        let mut codec = Codec::with_config(MemoryCursor::new(), CodecConfig::new(Endianness::Little));
        codec.write_array(&[1i16, 2, 3]).unwrap();
        assert_eq!(codec.cursor().as_slice(), &[0x00, 0x03, 0x00, 0x02, 0x00, 0x01]);

        codec.cursor_mut().seek(0, SeekOrigin::Begin).unwrap();
        assert_eq!(codec.read_array::<i16>(3).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_mode_switch_between_calls() {
        let mut codec = Codec::new(MemoryCursor::new());
        codec.write_array(&[1u16, 2]).unwrap();
        codec.set_endianness(Endianness::Little);
        codec.write_array(&[1u16, 2]).unwrap();
        assert_eq!(codec.cursor().as_slice(), &[0, 1, 0, 2, 0, 2, 0, 1]);
    }

    #[test]
    fn test_array_length_mismatch_policy() {
        let v = Value::from(vec![1i16, 2, 3]);

        let err = encode_to_vec(&v, &int16_array(), Some(2), &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLayout);

        let lax = CodecConfig::default().with_length_policy(LengthPolicy::WarnAndTruncate);
        assert_eq!(encode_to_vec(&v, &int16_array(), Some(2), &lax).unwrap(), [0, 1, 0, 2]);
        assert_eq!(encode_to_vec(&v, &int16_array(), Some(4), &lax).unwrap(), [0, 1, 0, 2, 0, 3, 0, 0]);

        let mut codec = Codec::with_config(MemoryCursor::new(), lax);
        codec.encode(&v, &int16_array(), Some(1)).unwrap();
        assert_eq!(codec.counters().length_warnings, 1);
    }

    #[test]
    fn test_num_enum_roundtrip() {
        let mut codec = Codec::new(MemoryCursor::new());
        codec.write_enum(Opcode::Close).unwrap();
        codec.write_enum(Status::Failed).unwrap();
        assert_eq!(codec.cursor().as_slice(), &[0x10, 0xFF, 0xFF, 0xFF, 0xFF]);

        codec.cursor_mut().seek(0, SeekOrigin::Begin).unwrap();
        assert_eq!(codec.read_enum::<Opcode>().unwrap(), Opcode::Close);
        assert_eq!(codec.read_enum::<Status>().unwrap(), Status::Failed);
    }

    #[test]
    fn test_unknown_discriminant() {
        let mut codec = Codec::new(MemoryCursor::from_vec(vec![0x7F, 0x02]));
        let err = codec.read_enum::<Opcode>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnum);
        assert_eq!(err.to_string(), "invalid discriminant 0x7f for enum Opcode");
        // the bad byte is consumed, the next one still decodes
        assert_eq!(codec.read_enum::<Opcode>().unwrap(), Opcode::Pong);
    }

    #[test]
    fn test_enum_value_via_logical_type() {
        let ty = LogicalType::enumeration("Opcode", LogicalType::Byte);
        let bytes = encode_to_vec(&Value::Byte(Opcode::Ping.into()), &ty, None, &CodecConfig::default()).unwrap();
        assert_eq!(bytes, [1]);
        let err = encode_to_vec(&Value::Int32(1), &ty, None, &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_strings_have_no_prefix() {
        let mut codec = Codec::new(MemoryCursor::new());
        let n = codec.write_str("héllo").unwrap();
        assert_eq!(n, 6);
        assert_eq!(codec.cursor().as_slice(), "héllo".as_bytes());

        codec.cursor_mut().seek(0, SeekOrigin::Begin).unwrap();
        assert_eq!(codec.read_string(n).unwrap(), "héllo");
    }

    #[test]
    fn test_text_encoding_selection() {
        let mut codec = Codec::new(MemoryCursor::new());
        codec.set_text_encoding(TextEncoding::Latin1);
        codec.write_string("café", 4).unwrap();
        assert_eq!(codec.cursor().as_slice(), &[b'c', b'a', b'f', 0xE9]);

        codec.set_text_encoding(TextEncoding::Ascii);
        codec.cursor_mut().seek(0, SeekOrigin::Begin).unwrap();
        assert_eq!(codec.read_string(4).unwrap(), "caf?");

        codec.set_text_encoder(Arc::new(Latin1Encoder));
        codec.cursor_mut().seek(0, SeekOrigin::Begin).unwrap();
        assert_eq!(codec.read_string(4).unwrap(), "café");
    }

    #[test]
    fn test_invalid_utf8_on_decode() {
        let mut codec = Codec::new(MemoryCursor::from_vec(vec![0x61, 0xC3]));
        let err = codec.read_string(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidText);
    }

    #[test]
    fn test_generic_helpers() {
        let mut codec = Codec::new(MemoryCursor::new());
        codec.write('Z').unwrap();
        codec.write(0.5f64).unwrap();
        codec.write_bytes(&[9, 8, 7]).unwrap();
        codec.cursor_mut().seek(0, SeekOrigin::Begin).unwrap();

        assert_eq!(codec.read::<char>().unwrap(), 'Z');
        assert_eq!(codec.read::<f64>().unwrap(), 0.5);
        assert_eq!(codec.read_bytes(3).unwrap(), vec![9, 8, 7]);
    }

    #[test]
    fn test_not_writable_and_not_readable() {
        let mut reader = Codec::new(MemoryCursor::read_only(vec![0, 1]));
        assert_eq!(reader.write_u16(1).unwrap_err().kind(), ErrorKind::NotWritable);
        assert_eq!(reader.read_u16().unwrap(), 1);

        let mut writer = Codec::new(StreamCursor::from_writer(Vec::new()));
        assert_eq!(writer.read_u8().unwrap_err().kind(), ErrorKind::NotReadable);
    }

    #[test]
    fn test_truncated_every_fixed_type() {
        let cfg = CodecConfig::default();
        for ty in [
            LogicalType::Char,
            LogicalType::Int16,
            LogicalType::UInt32,
            LogicalType::Int64,
            LogicalType::Float32,
            LogicalType::Float64,
        ] {
            let width = ty.fixed_size().unwrap();
            let err = decode_from_slice(&vec![0; width - 1], &ty, None, &cfg).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Truncated, "{}", ty);
        }
        let err = decode_from_slice(&[], &LogicalType::Byte, None, &cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Truncated);
    }

    proptest! {
        #[test]
        fn prop_little_is_reverse_of_big(xs in proptest::collection::vec(any::<i32>(), 0..32)) {
            let ty = LogicalType::array(LogicalType::Int32);
            let v = Value::from(xs.clone());
            let big = encode_to_vec(&v, &ty, Some(xs.len()), &CodecConfig::new(Endianness::Big)).unwrap();
            let little = encode_to_vec(&v, &ty, Some(xs.len()), &CodecConfig::new(Endianness::Little)).unwrap();

            let big_elems: Vec<&[u8]> = big.chunks(4).collect();
            let mut little_elems: Vec<&[u8]> = little.chunks(4).collect();
            little_elems.reverse();
            prop_assert_eq!(big_elems, little_elems);
        }

        #[test]
        fn prop_array_roundtrip_either_mode(xs in proptest::collection::vec(any::<u16>(), 0..32), little in any::<bool>()) {
            let endian = if little { Endianness::Little } else { Endianness::Big };
            let mut codec = Codec::with_config(MemoryCursor::new(), CodecConfig::new(endian));
            codec.write_array(xs.as_slice()).unwrap();
            codec.cursor_mut().seek(0, SeekOrigin::Begin).unwrap();
            prop_assert_eq!(codec.read_array::<u16>(xs.len()).unwrap(), xs);
        }
    }
}
