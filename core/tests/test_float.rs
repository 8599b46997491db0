#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use codec_core::{
        constants::FLOAT_ZERO_EPSILON,
        float::*,
        prelude::*,
    };

    #[test]
    fn test_pi_f32_through_codec() {
        let mut codec = Codec::new(MemoryCursor::new());
        codec.write_f32(3.14159).unwrap();
        codec.cursor_mut().seek(0, SeekOrigin::Begin).unwrap();
        let back = codec.read_f32().unwrap();
        assert!((back - 3.14159).abs() < 1e-5);
    }

    #[test]
    fn test_tiny_f32_is_all_zero() {
        assert_eq!(encode_f32(0.0000001, FloatMode::Normalized).unwrap(), [0, 0, 0, 0]);
        assert_eq!(decode_f32(&[0, 0, 0, 0], FloatMode::Normalized).unwrap(), 0.0);
    }

    #[test]
    fn test_epsilon_boundary() {
        // exactly epsilon is kept, just below collapses
        let at = encode_f64(FLOAT_ZERO_EPSILON, FloatMode::Normalized).unwrap();
        assert_ne!(at, [0; 8]);
        assert_eq!(decode_f64(&at, FloatMode::Normalized).unwrap(), FLOAT_ZERO_EPSILON);

        let below = encode_f64(FLOAT_ZERO_EPSILON * 0.999, FloatMode::Normalized).unwrap();
        assert_eq!(below, [0; 8]);
    }

    #[test]
    fn test_nan_rejected_by_codec() {
        let mut codec = Codec::new(MemoryCursor::new());
        let err = codec.write_f64(f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedValue);
        assert_eq!(codec.position(), 0);

        codec.set_float_mode(FloatMode::Native);
        codec.write_f64(f64::INFINITY).unwrap();
        assert_eq!(codec.cursor().as_slice(), &f64::INFINITY.to_bits().to_be_bytes());
    }

    #[test]
    fn test_float_arrays_follow_element_order() {
        let big = encode_to_vec(
            &Value::from(vec![1.0f32, 2.0]),
            &LogicalType::array(LogicalType::Float32),
            Some(2),
            &CodecConfig::default(),
        )
        .unwrap();
        let little = encode_to_vec(
            &Value::from(vec![1.0f32, 2.0]),
            &LogicalType::array(LogicalType::Float32),
            Some(2),
            &CodecConfig::new(Endianness::Little),
        )
        .unwrap();
        assert_eq!(&big[..4], &little[4..]);
        assert_eq!(&big[4..], &little[..4]);
    }

    fn normal_f32() -> impl Strategy<Value = f32> {
        any::<f32>().prop_filter("normal, |x| >= 1e-6", |x| x.is_normal() && (x.abs() as f64) >= FLOAT_ZERO_EPSILON)
    }

    fn normal_f64() -> impl Strategy<Value = f64> {
        any::<f64>().prop_filter("normal, |x| >= 1e-6", |x| x.is_normal() && x.abs() >= FLOAT_ZERO_EPSILON)
    }

    proptest! {
        #[test]
        fn prop_f32_roundtrip(x in normal_f32()) {
            let bytes = encode_f32(x, FloatMode::Normalized).unwrap();
            let back = decode_f32(&bytes, FloatMode::Normalized).unwrap();
            prop_assert!((back - x).abs() <= x.abs() * f32::EPSILON, "{} -> {}", x, back);
        }

        #[test]
        fn prop_f64_roundtrip(x in normal_f64()) {
            let bytes = encode_f64(x, FloatMode::Normalized).unwrap();
            let back = decode_f64(&bytes, FloatMode::Normalized).unwrap();
            prop_assert!((back - x).abs() <= x.abs() * f64::EPSILON, "{} -> {}", x, back);
        }

        #[test]
        fn prop_f32_matches_native_bits(x in normal_f32()) {
            prop_assert_eq!(
                encode_f32(x, FloatMode::Normalized).unwrap(),
                encode_f32(x, FloatMode::Native).unwrap()
            );
        }

        #[test]
        fn prop_near_zero_collapses(x in -0.999e-6f64..0.999e-6) {
            prop_assert_eq!(encode_f64(x, FloatMode::Normalized).unwrap(), [0u8; 8]);
            prop_assert_eq!(encode_f32(x as f32, FloatMode::Normalized).unwrap(), [0u8; 4]);
        }
    }
}
