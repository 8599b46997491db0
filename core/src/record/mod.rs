//! record/mod.rs
//! Fixed-layout record codec.
//!
//! Layout rules:
//! - Fields are encoded sequentially in declaration order, no padding.
//! - Every field has a fixed width: scalars and enums by type, arrays by
//!   declared element count, strings by declared byte length, nested records
//!   by their own layout size.
//! - Byte order is always big-endian, and embedded arrays are never
//!   reordered, regardless of the codec's endianness mode.
//! - An embedded array whose element count differs from the declared count
//!   is handled by `LengthPolicy`: `Strict` fails with `InvalidLayout`,
//!   `WarnAndTruncate` logs and writes exactly the declared count.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{FieldDef, RecordLayout, RecordLayoutBuilder, RecordValue};
pub use encode::encode_record;
pub use decode::decode_record;
