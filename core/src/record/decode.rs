//! record/decode.rs

use tracing::debug;

use crate::config::{CodecConfig, Endianness};
use crate::cursor::{ByteCursor, MemoryCursor};
use crate::dispatch::decode::decode_value;
use crate::dispatch::session::Session;
use crate::record::types::{RecordLayout, RecordValue};
use crate::telemetry::CodecCounters;
use crate::text::encoder_for;
use crate::types::{Result, ResultExt};

/// Read every field of `layout` in declaration order, big-endian.
pub(crate) fn decode_fields<C: ByteCursor + ?Sized>(
    cursor: &mut C,
    layout: &RecordLayout,
    s: &mut Session<'_>,
) -> Result<RecordValue> {
    let mut value = RecordValue::new();
    for f in layout.fields() {
        let v = decode_value(cursor, &f.ty, f.count, Endianness::Big, s)
            .with_context(|| format!("{}.{}", layout.name(), f.name))?;
        value.set(f.name.clone(), v);
    }
    debug!(record = layout.name(), bytes = layout.byte_size(), "record decoded");
    Ok(value)
}

/// Decode one record from the front of `bytes`. Trailing bytes are ignored.
pub fn decode_record(bytes: &[u8], layout: &RecordLayout, config: &CodecConfig) -> Result<RecordValue> {
    let text = encoder_for(config.text_encoding);
    let mut counters = CodecCounters::default();
    let mut s = Session {
        length_policy: config.length_policy,
        float_mode: config.float_mode,
        text: text.as_ref(),
        counters: &mut counters,
    };
    let mut cursor = MemoryCursor::read_only(bytes);
    decode_fields(&mut cursor, layout, &mut s)
}
