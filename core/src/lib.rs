//! codec-core
//!
//! Typed binary codec over byte cursors (memory, file, socket).
//! Big-endian scalars, manual IEEE-754 bit assembly, fixed-layout records.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;
pub mod utils;

// Transport
pub mod cursor;

// Codecs, leaves first
pub mod integer;
pub mod float;
pub mod text;
pub mod record;
pub mod dispatch;

pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::{CodecConfig, Endianness, FloatMode, LengthPolicy, TextEncoding};
    pub use crate::cursor::{
        open_cursor, ByteCursor, CursorEvent, CursorSource, FileAccess, FileCursor, MemoryCursor,
        SeekOrigin, StreamCursor,
    };
    pub use crate::dispatch::{decode_from_slice, encode_to_vec, BinaryPrimitive, Codec, LogicalType, Value};
    pub use crate::record::{decode_record, encode_record, RecordLayout, RecordValue};
    pub use crate::telemetry::{CodecCounters, CodecSnapshot};
    pub use crate::text::TextEncoder;
    pub use crate::types::{CodecError, ErrorKind, Result};
}
