//! record/encode.rs
//!
//! Records are always written big-endian: `Endianness::Big` is passed down
//! explicitly, whatever mode the surrounding codec is in.

use tracing::debug;

use crate::config::{CodecConfig, Endianness};
use crate::dispatch::encode::encode_value;
use crate::dispatch::session::Session;
use crate::record::types::{RecordLayout, RecordValue};
use crate::telemetry::CodecCounters;
use crate::text::encoder_for;
use crate::types::{CodecError, Result, ResultExt};

pub(crate) fn encode_fields(
    out: &mut Vec<u8>,
    value: &RecordValue,
    layout: &RecordLayout,
    s: &mut Session<'_>,
) -> Result<()> {
    if let Some((name, _)) = value.iter().find(|(name, _)| layout.field(name).is_none()) {
        return Err(CodecError::InvalidLayout(format!(
            "{}: unknown field `{}`",
            layout.name(),
            name
        )));
    }

    let start = out.len();
    for f in layout.fields() {
        let v = value.get(&f.name).ok_or_else(|| {
            CodecError::InvalidLayout(format!("{}: missing field `{}`", layout.name(), f.name))
        })?;
        encode_value(out, v, &f.ty, f.count, Endianness::Big, s)
            .with_context(|| format!("{}.{}", layout.name(), f.name))?;
    }

    debug_assert_eq!(out.len() - start, layout.byte_size());
    debug!(record = layout.name(), bytes = layout.byte_size(), "record staged");
    Ok(())
}

/// Encode one record to a fresh buffer of exactly `layout.byte_size()` bytes.
pub fn encode_record(value: &RecordValue, layout: &RecordLayout, config: &CodecConfig) -> Result<Vec<u8>> {
    let text = encoder_for(config.text_encoding);
    let mut counters = CodecCounters::default();
    let mut s = Session {
        length_policy: config.length_policy,
        float_mode: config.float_mode,
        text: text.as_ref(),
        counters: &mut counters,
    };
    let mut out = Vec::with_capacity(layout.byte_size());
    encode_fields(&mut out, value, layout, &mut s)?;
    Ok(out)
}
