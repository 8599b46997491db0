//! dispatch/encode.rs
//!
//! Type-directed encoding into a staging buffer. Nothing touches the cursor
//! here; `Codec` commits the staged bytes with a single write.

use crate::config::Endianness;
use crate::dispatch::session::Session;
use crate::dispatch::types::{LogicalType, Value};
use crate::float::{encode_f32, encode_f64};
use crate::integer::{encode_i16, encode_i32, encode_i64, encode_u16, encode_u32, encode_u64};
use crate::record::encode::encode_fields;
use crate::types::{CodecError, Result, ResultExt};

pub(crate) fn require_length(ty: &LogicalType, length_hint: Option<usize>) -> Result<usize> {
    length_hint.ok_or_else(|| CodecError::MissingLength(ty.to_string()))
}

/// Enums only re-dispatch to integer types.
pub(crate) fn enum_underlying<'a>(ty: &LogicalType, underlying: &'a LogicalType) -> Result<&'a LogicalType> {
    if underlying.is_integer() {
        Ok(underlying)
    } else {
        Err(CodecError::UnsupportedType(ty.to_string()))
    }
}

/// Array elements carry no length of their own.
pub(crate) fn array_element<'a>(ty: &LogicalType, elem: &'a LogicalType) -> Result<&'a LogicalType> {
    if elem.needs_length() {
        Err(CodecError::UnsupportedType(ty.to_string()))
    } else {
        Ok(elem)
    }
}

/// The single UTF-16 code unit of `c`.
pub(crate) fn char_unit(c: char) -> Result<u16> {
    let mut buf = [0u16; 2];
    match c.encode_utf16(&mut buf) {
        [unit] => Ok(*unit),
        _ => Err(CodecError::UnsupportedValue(format!(
            "{:?} (U+{:04X}) needs a surrogate pair",
            c, c as u32
        ))),
    }
}

pub(crate) fn encode_value(
    out: &mut Vec<u8>,
    value: &Value,
    ty: &LogicalType,
    length_hint: Option<usize>,
    endian: Endianness,
    s: &mut Session<'_>,
) -> Result<()> {
    match (ty, value) {
        (LogicalType::Byte, Value::Byte(v)) => out.push(*v),
        (LogicalType::Char, Value::Char(c)) => out.extend_from_slice(&encode_u16(char_unit(*c)?)),
        (LogicalType::Int16, Value::Int16(v)) => out.extend_from_slice(&encode_i16(*v)),
        (LogicalType::UInt16, Value::UInt16(v)) => out.extend_from_slice(&encode_u16(*v)),
        (LogicalType::Int32, Value::Int32(v)) => out.extend_from_slice(&encode_i32(*v)),
        (LogicalType::UInt32, Value::UInt32(v)) => out.extend_from_slice(&encode_u32(*v)),
        (LogicalType::Int64, Value::Int64(v)) => out.extend_from_slice(&encode_i64(*v)),
        (LogicalType::UInt64, Value::UInt64(v)) => out.extend_from_slice(&encode_u64(*v)),
        (LogicalType::Float32, Value::Float32(v)) => out.extend_from_slice(&encode_f32(*v, s.float_mode)?),
        (LogicalType::Float64, Value::Float64(v)) => out.extend_from_slice(&encode_f64(*v, s.float_mode)?),
        (LogicalType::String, Value::String(text)) => {
            let n = require_length(ty, length_hint)?;
            encode_string(out, text, n, s)?;
        }
        (LogicalType::Array(elem), Value::Array(items)) => {
            let elem = array_element(ty, elem)?;
            let n = require_length(ty, length_hint)?;
            encode_array(out, items, elem, n, endian, s)?;
        }
        (LogicalType::Enum { underlying, .. }, v) => {
            let underlying = enum_underlying(ty, underlying)?;
            encode_value(out, v, underlying, None, endian, s).with_context(|| ty.to_string())?;
        }
        (LogicalType::Record(layout), Value::Record(record)) => encode_fields(out, record, layout, s)?,
        (ty, v) => return Err(CodecError::mismatch(ty.to_string(), v.type_name())),
    }
    Ok(())
}

/// Exactly `n` bytes of encoded text, truncated or zero-padded when the
/// length policy allows it.
fn encode_string(out: &mut Vec<u8>, text: &str, n: usize, s: &mut Session<'_>) -> Result<()> {
    let mut bytes = s.text.encode(text)?;
    s.check_length(s.text.name(), bytes.len(), n)?;
    bytes.resize(n, 0);
    out.extend_from_slice(&bytes);
    Ok(())
}

/// `n` elements in order, or reversed when `endian` is `Little`. Each element
/// keeps its own MSB-first bytes.
pub(crate) fn encode_array(
    out: &mut Vec<u8>,
    items: &[Value],
    elem: &LogicalType,
    n: usize,
    endian: Endianness,
    s: &mut Session<'_>,
) -> Result<()> {
    s.check_length("array", items.len(), n)?;

    let zero = Value::zero_of(elem);
    let order: Vec<usize> = match endian {
        Endianness::Big => (0..n).collect(),
        Endianness::Little => (0..n).rev().collect(),
    };
    for i in order {
        let item = items.get(i).unwrap_or(&zero);
        encode_value(out, item, elem, None, endian, s).with_context(|| format!("element {}", i))?;
    }
    Ok(())
}
