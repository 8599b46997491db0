//! types.rs
//! Unified codec error covering cursor I/O, type dispatch, float/integer packing
//! and record layouts.
//!
//! - Ergonomic `From<io::Error>` enables `?` on transport calls.
//! - `Context` wraps any error with the field or type that was being processed;
//!   `kind()` looks through the wrappers.

use std::io;
use thiserror::Error;

/// Coarse error classification, stable across context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Truncated,
    UnsupportedType,
    UnsupportedValue,
    InvalidLayout,
    NotReadable,
    NotWritable,
    SeekUnsupported,
    SeekOutOfRange,
    MissingLength,
    TypeMismatch,
    InvalidMark,
    InvalidEnum,
    InvalidText,
    Disconnected,
    Io,
    Config,
}

#[derive(Debug, Error)]
pub enum CodecError {
    /// Fewer bytes available than the type requires.
    #[error("truncated input: needed {needed} bytes, got {available}")]
    Truncated { needed: usize, available: usize },

    #[error("unsupported logical type: {0}")]
    UnsupportedType(String),

    /// Value cannot be represented (NaN, infinity, non-BMP char, ...).
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// Record layout malformed, or a length mismatch rejected by policy.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("cursor is not readable")]
    NotReadable,

    #[error("cursor is not writable")]
    NotWritable,

    #[error("cursor does not support seeking")]
    SeekUnsupported,

    #[error("seek target {target} outside [0, {length}]")]
    SeekOutOfRange { target: i128, length: u64 },

    /// String and array types need an explicit length hint.
    #[error("missing length hint for {0}")]
    MissingLength(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("invalid mark: {0}")]
    InvalidMark(String),

    #[error("invalid discriminant {raw} for enum {type_name}")]
    InvalidEnum { type_name: String, raw: String },

    #[error("invalid text: {0}")]
    InvalidText(String),

    /// Transport failure on a network-like cursor.
    #[error("remote peer disconnected: {0}")]
    Disconnected(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[source] io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        use CodecError::*;
        match self {
            Truncated { .. } => ErrorKind::Truncated,
            UnsupportedType(_) => ErrorKind::UnsupportedType,
            UnsupportedValue(_) => ErrorKind::UnsupportedValue,
            InvalidLayout(_) => ErrorKind::InvalidLayout,
            NotReadable => ErrorKind::NotReadable,
            NotWritable => ErrorKind::NotWritable,
            SeekUnsupported => ErrorKind::SeekUnsupported,
            SeekOutOfRange { .. } => ErrorKind::SeekOutOfRange,
            MissingLength(_) => ErrorKind::MissingLength,
            TypeMismatch { .. } => ErrorKind::TypeMismatch,
            InvalidMark(_) => ErrorKind::InvalidMark,
            InvalidEnum { .. } => ErrorKind::InvalidEnum,
            InvalidText(_) => ErrorKind::InvalidText,
            Disconnected(_) => ErrorKind::Disconnected,
            Io(_) => ErrorKind::Io,
            Config(_) => ErrorKind::Config,
            Context { source, .. } => source.kind(),
        }
    }

    /// Innermost error, with all context layers stripped.
    pub fn root(&self) -> &CodecError {
        match self {
            CodecError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn with_context(self, context: impl Into<String>) -> Self {
        CodecError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    pub(crate) fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        CodecError::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => CodecError::Truncated {
                needed: 0,
                available: 0,
            },
            _ => CodecError::Io(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// Attach the field or type being processed to a failing result.
pub trait ResultExt<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;

    fn with_context<C: Into<String>, F: FnOnce() -> C>(self, f: F) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<C: Into<String>, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_looks_through_context() {
        let err = CodecError::Truncated { needed: 8, available: 3 }
            .with_context("field `id`")
            .with_context("record `Header`");
        assert_eq!(err.kind(), ErrorKind::Truncated);
        assert!(matches!(err.root(), CodecError::Truncated { needed: 8, available: 3 }));
        assert_eq!(
            err.to_string(),
            "record `Header`: field `id`: truncated input: needed 8 bytes, got 3"
        );
    }

    #[test]
    fn unexpected_eof_maps_to_truncated() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert_eq!(CodecError::from(io_err).kind(), ErrorKind::Truncated);

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(CodecError::from(io_err).kind(), ErrorKind::Io);
    }
}
