//! text.rs
//! Text encoders injected into the codec for `String` values. The codec never
//! writes a length prefix or terminator; callers supply the byte length.

use std::sync::Arc;

use crate::config::TextEncoding;
use crate::types::{CodecError, Result};
use crate::utils::fmt_bytes;

pub trait TextEncoder: Send + Sync {
    fn name(&self) -> &'static str;

    fn encode(&self, text: &str) -> Result<Vec<u8>>;

    fn decode(&self, bytes: &[u8]) -> Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8Encoder;

impl TextEncoder for Utf8Encoder {
    fn name(&self) -> &'static str {
        "utf-8"
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| {
            CodecError::InvalidText(format!("{} in {}", e.utf8_error(), fmt_bytes(bytes)))
        })
    }
}

/// 7-bit ASCII. Unmappable characters and bytes become `?`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiEncoder;

impl TextEncoder for AsciiEncoder {
    fn name(&self) -> &'static str {
        "us-ascii"
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
            .collect())
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        Ok(bytes
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect())
    }
}

/// ISO-8859-1. Characters above U+00FF become `?`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Latin1Encoder;

impl TextEncoder for Latin1Encoder {
    fn name(&self) -> &'static str {
        "iso-8859-1"
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect())
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }
}

pub fn encoder_for(encoding: TextEncoding) -> Arc<dyn TextEncoder> {
    match encoding {
        TextEncoding::Utf8 => Arc::new(Utf8Encoder),
        TextEncoding::Ascii => Arc::new(AsciiEncoder),
        TextEncoding::Latin1 => Arc::new(Latin1Encoder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_roundtrip_and_rejects_invalid() {
        let e = Utf8Encoder;
        assert_eq!(e.encode("héllo").unwrap(), "héllo".as_bytes());
        assert_eq!(e.decode("héllo".as_bytes()).unwrap(), "héllo");
        assert!(e.decode(&[0xC3]).is_err());
    }

    #[test]
    fn ascii_replaces_unmappable() {
        let e = AsciiEncoder;
        assert_eq!(e.encode("aé").unwrap(), b"a?");
        assert_eq!(e.decode(&[b'o', 0xE9]).unwrap(), "o?");
    }

    #[test]
    fn latin1_maps_bytes_to_code_points() {
        let e = Latin1Encoder;
        assert_eq!(e.encode("é€").unwrap(), vec![0xE9, b'?']);
        assert_eq!(e.decode(&[0xE9]).unwrap(), "é");
    }
}
