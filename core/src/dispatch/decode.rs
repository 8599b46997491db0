//! dispatch/decode.rs
//!
//! Type-directed decoding straight off the cursor. Each call builds a fresh
//! owned `Value`; on failure the cursor may have advanced but no partial
//! value escapes.

use crate::config::Endianness;
use crate::constants::{widths, MAX_PREALLOC};
use crate::cursor::ByteCursor;
use crate::dispatch::encode::{array_element, enum_underlying, require_length};
use crate::dispatch::session::Session;
use crate::dispatch::types::{LogicalType, Value};
use crate::float::{decode_f32, decode_f64};
use crate::integer::{decode_i16, decode_i32, decode_i64, decode_u16, decode_u32, decode_u64};
use crate::record::decode::decode_fields;
use crate::types::{CodecError, Result, ResultExt};

pub(crate) fn char_from_unit(unit: u16) -> Result<char> {
    char::from_u32(u32::from(unit))
        .ok_or_else(|| CodecError::InvalidText(format!("unpaired surrogate 0x{:04x}", unit)))
}

pub(crate) fn decode_value<C: ByteCursor + ?Sized>(
    cursor: &mut C,
    ty: &LogicalType,
    length_hint: Option<usize>,
    endian: Endianness,
    s: &mut Session<'_>,
) -> Result<Value> {
    let value = match ty {
        LogicalType::Byte => Value::Byte(cursor.read_exact(widths::BYTE)?[0]),
        LogicalType::Char => {
            let unit = decode_u16(&cursor.read_exact(widths::CHAR)?)?;
            Value::Char(char_from_unit(unit)?)
        }
        LogicalType::Int16 => Value::Int16(decode_i16(&cursor.read_exact(widths::INT16)?)?),
        LogicalType::UInt16 => Value::UInt16(decode_u16(&cursor.read_exact(widths::INT16)?)?),
        LogicalType::Int32 => Value::Int32(decode_i32(&cursor.read_exact(widths::INT32)?)?),
        LogicalType::UInt32 => Value::UInt32(decode_u32(&cursor.read_exact(widths::INT32)?)?),
        LogicalType::Int64 => Value::Int64(decode_i64(&cursor.read_exact(widths::INT64)?)?),
        LogicalType::UInt64 => Value::UInt64(decode_u64(&cursor.read_exact(widths::INT64)?)?),
        LogicalType::Float32 => {
            Value::Float32(decode_f32(&cursor.read_exact(widths::FLOAT32)?, s.float_mode)?)
        }
        LogicalType::Float64 => {
            Value::Float64(decode_f64(&cursor.read_exact(widths::FLOAT64)?, s.float_mode)?)
        }
        LogicalType::String => {
            let n = require_length(ty, length_hint)?;
            let bytes = cursor.read_exact(n)?;
            Value::String(s.text.decode(&bytes)?)
        }
        LogicalType::Array(elem) => {
            let elem = array_element(ty, elem)?;
            let n = require_length(ty, length_hint)?;
            Value::Array(decode_array(cursor, elem, n, endian, s)?)
        }
        LogicalType::Enum { underlying, .. } => {
            let underlying = enum_underlying(ty, underlying)?;
            decode_value(cursor, underlying, None, endian, s).with_context(|| ty.to_string())?
        }
        LogicalType::Record(layout) => Value::Record(decode_fields(cursor, layout, s)?),
    };
    Ok(value)
}

/// Decode `n` elements, then restore caller order when `endian` is `Little`.
pub(crate) fn decode_array<C: ByteCursor + ?Sized>(
    cursor: &mut C,
    elem: &LogicalType,
    n: usize,
    endian: Endianness,
    s: &mut Session<'_>,
) -> Result<Vec<Value>> {
    let mut items = Vec::with_capacity(n.min(MAX_PREALLOC));
    for i in 0..n {
        items.push(decode_value(cursor, elem, None, endian, s).with_context(|| format!("element {}", i))?);
    }
    if endian == Endianness::Little {
        items.reverse();
    }
    Ok(items)
}
