//! config.rs
//! Per-codec configuration: endianness mode, length-mismatch policy, float
//! algorithm and text encoding. Loadable from JSON.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::types::{CodecError, Result};

/// Array element order. Scalars are always packed most-significant byte first;
/// `Little` reverses whole elements inside arrays and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    Little,
    #[default]
    Big,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => f.write_str("little"),
            Endianness::Big => f.write_str("big"),
        }
    }
}

/// What to do when a value's length differs from the declared count of a
/// fixed-size record array or a string's length hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Fail with `InvalidLayout`.
    #[default]
    Strict,
    /// Log a warning, then truncate or zero-pad to the declared count.
    WarnAndTruncate,
}

/// Float bit assembly strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatMode {
    /// Manual sign/exponent/mantissa assembly via normalization search.
    /// NaN and infinities are rejected.
    #[default]
    Normalized,
    /// Native bit reinterpretation. NaN and infinities pass through.
    Native,
}

/// Built-in text encoders selectable from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub endianness: Endianness,
    pub length_policy: LengthPolicy,
    pub float_mode: FloatMode,
    pub text_encoding: TextEncoding,
}

impl CodecConfig {
    pub fn new(endianness: Endianness) -> Self {
        Self { endianness, ..Default::default() }
    }

    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    pub fn with_float_mode(mut self, mode: FloatMode) -> Self {
        self.float_mode = mode;
        self
    }

    pub fn with_text_encoding(mut self, encoding: TextEncoding) -> Self {
        self.text_encoding = encoding;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| CodecError::Config(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CodecError::Config(e.to_string()))
    }
}
