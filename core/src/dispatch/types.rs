//! dispatch/types.rs
//! Logical type tags, owned values, and the per-type capability trait used by
//! the typed helpers.

use std::fmt;
use std::sync::Arc;

use crate::constants::widths;
use crate::record::{RecordLayout, RecordValue};
use crate::types::{CodecError, Result};

/// Closed set of types the dispatcher knows how to encode.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalType {
    Byte,
    Char,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    /// Raw encoded text, `length_hint` bytes, no prefix or terminator.
    String,
    /// `length_hint` elements of the inner type.
    Array(Box<LogicalType>),
    /// Encoded as its underlying integer type.
    Enum { name: String, underlying: Box<LogicalType> },
    Record(Arc<RecordLayout>),
}

impl LogicalType {
    pub fn array(elem: LogicalType) -> Self {
        LogicalType::Array(Box::new(elem))
    }

    pub fn enumeration(name: impl Into<String>, underlying: LogicalType) -> Self {
        LogicalType::Enum { name: name.into(), underlying: Box::new(underlying) }
    }

    pub fn record(layout: Arc<RecordLayout>) -> Self {
        LogicalType::Record(layout)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            LogicalType::Byte
                | LogicalType::Int16
                | LogicalType::UInt16
                | LogicalType::Int32
                | LogicalType::UInt32
                | LogicalType::Int64
                | LogicalType::UInt64
        )
    }

    /// Encoded width when it does not depend on a length hint.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            LogicalType::Byte => Some(widths::BYTE),
            LogicalType::Char => Some(widths::CHAR),
            LogicalType::Int16 | LogicalType::UInt16 => Some(widths::INT16),
            LogicalType::Int32 | LogicalType::UInt32 => Some(widths::INT32),
            LogicalType::Int64 | LogicalType::UInt64 => Some(widths::INT64),
            LogicalType::Float32 => Some(widths::FLOAT32),
            LogicalType::Float64 => Some(widths::FLOAT64),
            LogicalType::String | LogicalType::Array(_) => None,
            LogicalType::Enum { underlying, .. } => underlying.fixed_size(),
            LogicalType::Record(layout) => Some(layout.byte_size()),
        }
    }

    /// Whether encoding needs a caller-supplied length.
    pub fn needs_length(&self) -> bool {
        matches!(self, LogicalType::String | LogicalType::Array(_))
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Byte => f.write_str("Byte"),
            LogicalType::Char => f.write_str("Char"),
            LogicalType::Int16 => f.write_str("Int16"),
            LogicalType::UInt16 => f.write_str("UInt16"),
            LogicalType::Int32 => f.write_str("Int32"),
            LogicalType::UInt32 => f.write_str("UInt32"),
            LogicalType::Int64 => f.write_str("Int64"),
            LogicalType::UInt64 => f.write_str("UInt64"),
            LogicalType::Float32 => f.write_str("Float32"),
            LogicalType::Float64 => f.write_str("Float64"),
            LogicalType::String => f.write_str("String"),
            LogicalType::Array(elem) => write!(f, "Array<{}>", elem),
            LogicalType::Enum { name, underlying } => write!(f, "Enum<{}: {}>", name, underlying),
            LogicalType::Record(layout) => write!(f, "Record<{}>", layout.name()),
        }
    }
}

/// An owned decoded (or to-be-encoded) value. Enums travel as their
/// underlying integer variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(u8),
    Char(char),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    Array(Vec<Value>),
    Record(RecordValue),
}

impl Value {
    /// Short tag for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Byte(_) => "Byte",
            Value::Char(_) => "Char",
            Value::Int16(_) => "Int16",
            Value::UInt16(_) => "UInt16",
            Value::Int32(_) => "Int32",
            Value::UInt32(_) => "UInt32",
            Value::Int64(_) => "Int64",
            Value::UInt64(_) => "UInt64",
            Value::Float32(_) => "Float32",
            Value::Float64(_) => "Float64",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Record(_) => "Record",
        }
    }

    /// All-zero value of `ty`, used to pad short arrays.
    pub fn zero_of(ty: &LogicalType) -> Value {
        match ty {
            LogicalType::Byte => Value::Byte(0),
            LogicalType::Char => Value::Char('\0'),
            LogicalType::Int16 => Value::Int16(0),
            LogicalType::UInt16 => Value::UInt16(0),
            LogicalType::Int32 => Value::Int32(0),
            LogicalType::UInt32 => Value::UInt32(0),
            LogicalType::Int64 => Value::Int64(0),
            LogicalType::UInt64 => Value::UInt64(0),
            LogicalType::Float32 => Value::Float32(0.0),
            LogicalType::Float64 => Value::Float64(0.0),
            LogicalType::String => Value::String(String::new()),
            LogicalType::Array(_) => Value::Array(Vec::new()),
            LogicalType::Enum { underlying, .. } => Value::zero_of(underlying),
            LogicalType::Record(layout) => Value::Record(layout.zeroed()),
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A Rust scalar with a fixed logical type. Backs the generic
/// `Codec::write`/`Codec::read` helpers.
pub trait BinaryPrimitive: Sized {
    fn logical_type() -> LogicalType;

    fn into_value(self) -> Value;

    fn from_value(value: Value) -> Result<Self>;
}

macro_rules! binary_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl BinaryPrimitive for $ty {
                fn logical_type() -> LogicalType {
                    LogicalType::$variant
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(CodecError::mismatch(stringify!($variant), other.type_name())),
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

binary_primitive! {
    u8 => Byte,
    char => Char,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<RecordValue> for Value {
    fn from(r: RecordValue) -> Self {
        Value::Record(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}
