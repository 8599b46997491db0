//! dispatch/codec.rs
//! `Codec`: the typed read/write surface over one `ByteCursor`.
//!
//! Every encode is staged into a scratch buffer and committed with a single
//! cursor write, so a failed encode writes nothing. Decodes read straight
//! from the cursor; on failure the cursor may have advanced.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crossbeam::channel::Receiver;
use num_enum::TryFromPrimitive;
use tracing::{debug, trace};

use crate::config::{CodecConfig, Endianness, FloatMode, LengthPolicy, TextEncoding};
use crate::constants::RECORD_STAGING_CAPACITY;
use crate::cursor::{ByteCursor, CursorEvent, MemoryCursor};
use crate::dispatch::decode::decode_value;
use crate::dispatch::encode::encode_value;
use crate::dispatch::session::Session;
use crate::dispatch::types::{BinaryPrimitive, LogicalType, Value};
use crate::record::decode::decode_fields;
use crate::record::encode::encode_fields;
use crate::record::{RecordLayout, RecordValue};
use crate::telemetry::{CodecCounters, CodecSnapshot, CodecTimer, Stage};
use crate::text::{encoder_for, TextEncoder};
use crate::types::{CodecError, Result, ResultExt};
use crate::utils::{enum_name_or_hex, fmt_bytes, short_type_name};

pub struct Codec<C: ByteCursor> {
    cursor: C,
    config: CodecConfig,
    text: Arc<dyn TextEncoder>,
    counters: CodecCounters,
    timer: CodecTimer,
    events: Receiver<CursorEvent>,
}

impl<C: ByteCursor + fmt::Debug> fmt::Debug for Codec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .field("text", &self.text.name())
            .field("counters", &self.counters)
            .finish()
    }
}

macro_rules! typed_helpers {
    ($($write:ident / $read:ident : $ty:ty),* $(,)?) => {
        $(
            pub fn $write(&mut self, value: $ty) -> Result<()> {
                self.write(value)
            }

            pub fn $read(&mut self) -> Result<$ty> {
                self.read()
            }
        )*
    };
}

impl<C: ByteCursor> Codec<C> {
    pub fn new(cursor: C) -> Self {
        Self::with_config(cursor, CodecConfig::default())
    }

    pub fn with_config(mut cursor: C, config: CodecConfig) -> Self {
        let events = cursor.subscribe();
        let text = encoder_for(config.text_encoding);
        Self {
            cursor,
            config,
            text,
            counters: CodecCounters::default(),
            timer: CodecTimer::new(),
            events,
        }
    }

    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn endianness(&self) -> Endianness {
        self.config.endianness
    }

    /// Takes effect on the next call. Only array element order depends on it.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        debug!(from = %self.config.endianness, to = %endianness, "endianness changed");
        self.config.endianness = endianness;
    }

    pub fn set_length_policy(&mut self, policy: LengthPolicy) {
        self.config.length_policy = policy;
    }

    pub fn set_float_mode(&mut self, mode: FloatMode) {
        self.config.float_mode = mode;
    }

    pub fn set_text_encoding(&mut self, encoding: TextEncoding) {
        self.config.text_encoding = encoding;
        self.text = encoder_for(encoding);
    }

    /// Inject a custom encoder. `config().text_encoding` is left as is.
    pub fn set_text_encoder(&mut self, encoder: Arc<dyn TextEncoder>) {
        self.text = encoder;
    }

    // ---------------------------------------------------------------------
    // Cursor access and telemetry
    // ---------------------------------------------------------------------

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.cursor.flush()
    }

    pub fn counters(&self) -> &CodecCounters {
        &self.counters
    }

    pub fn snapshot(&mut self) -> CodecSnapshot {
        self.drain_events();
        CodecSnapshot::from(&self.counters, &self.timer)
    }

    fn drain_events(&mut self) {
        for event in self.events.try_iter() {
            match event {
                CursorEvent::EndOfStream { .. } => self.counters.end_of_stream_events += 1,
                CursorEvent::Disconnected { .. } => self.counters.disconnects += 1,
            }
        }
    }

    /// Borrow the cursor and a session over the remaining fields at once.
    fn split(&mut self) -> (&mut C, Session<'_>) {
        let session = Session {
            length_policy: self.config.length_policy,
            float_mode: self.config.float_mode,
            text: self.text.as_ref(),
            counters: &mut self.counters,
        };
        (&mut self.cursor, session)
    }

    fn finish<T>(&mut self, stage: Stage, started: Instant, result: &Result<T>) {
        self.timer.add_stage_time(stage, started.elapsed());
        self.drain_events();
        if result.is_err() {
            self.counters.errors += 1;
        }
    }

    fn commit(&mut self, staged: &[u8]) -> Result<()> {
        trace!(bytes = %fmt_bytes(staged), "commit");
        self.cursor.write(staged)
    }

    // ---------------------------------------------------------------------
    // Type dispatcher
    // ---------------------------------------------------------------------

    /// Encode `value` as `ty`. `length_hint` is the byte count for `String`
    /// and the element count for `Array`, ignored otherwise.
    pub fn encode(&mut self, value: &Value, ty: &LogicalType, length_hint: Option<usize>) -> Result<()> {
        let started = Instant::now();
        let result = self.encode_inner(value, ty, length_hint).with_context(|| format!("encode {}", ty));
        self.finish(Stage::Encode, started, &result);
        result
    }

    fn encode_inner(&mut self, value: &Value, ty: &LogicalType, length_hint: Option<usize>) -> Result<()> {
        if !self.cursor.can_write() {
            return Err(CodecError::NotWritable);
        }
        let endian = self.config.endianness;
        let mut staged = Vec::with_capacity(ty.fixed_size().unwrap_or(RECORD_STAGING_CAPACITY));
        {
            let (_, mut s) = self.split();
            encode_value(&mut staged, value, ty, length_hint, endian, &mut s)?;
        }
        self.commit(&staged)?;
        self.counters.add_encoded(staged.len());
        Ok(())
    }

    /// Decode one value of type `ty`.
    pub fn decode(&mut self, ty: &LogicalType, length_hint: Option<usize>) -> Result<Value> {
        let started = Instant::now();
        let result = self.decode_inner(ty, length_hint).with_context(|| format!("decode {}", ty));
        self.finish(Stage::Decode, started, &result);
        result
    }

    fn decode_inner(&mut self, ty: &LogicalType, length_hint: Option<usize>) -> Result<Value> {
        if !self.cursor.can_read() {
            return Err(CodecError::NotReadable);
        }
        let endian = self.config.endianness;
        let before = self.cursor.position();
        let value = {
            let (cursor, mut s) = self.split();
            decode_value(cursor, ty, length_hint, endian, &mut s)?
        };
        let read = self.cursor.position().saturating_sub(before);
        self.counters.add_decoded(read);
        Ok(value)
    }

    // ---------------------------------------------------------------------
    // Record codec
    // ---------------------------------------------------------------------

    /// Encode a record big-endian, whatever the configured endianness. The
    /// whole record is committed with one write.
    pub fn encode_record(&mut self, value: &RecordValue, layout: &RecordLayout) -> Result<()> {
        let started = Instant::now();
        let result = self.encode_record_inner(value, layout).with_context(|| format!("record {}", layout.name()));
        self.finish(Stage::Encode, started, &result);
        result
    }

    fn encode_record_inner(&mut self, value: &RecordValue, layout: &RecordLayout) -> Result<()> {
        if !self.cursor.can_write() {
            return Err(CodecError::NotWritable);
        }
        let mut staged = Vec::with_capacity(layout.byte_size().max(RECORD_STAGING_CAPACITY));
        {
            let (_, mut s) = self.split();
            encode_fields(&mut staged, value, layout, &mut s)?;
        }
        self.commit(&staged)?;
        self.counters.add_record_encoded(staged.len());
        Ok(())
    }

    pub fn decode_record(&mut self, layout: &RecordLayout) -> Result<RecordValue> {
        let started = Instant::now();
        let result = self.decode_record_inner(layout).with_context(|| format!("record {}", layout.name()));
        self.finish(Stage::Decode, started, &result);
        result
    }

    fn decode_record_inner(&mut self, layout: &RecordLayout) -> Result<RecordValue> {
        if !self.cursor.can_read() {
            return Err(CodecError::NotReadable);
        }
        let before = self.cursor.position();
        let value = {
            let (cursor, mut s) = self.split();
            decode_fields(cursor, layout, &mut s)?
        };
        let read = self.cursor.position().saturating_sub(before);
        self.counters.add_record_decoded(read);
        Ok(value)
    }

    // ---------------------------------------------------------------------
    // Typed helpers
    // ---------------------------------------------------------------------

    pub fn write<T: BinaryPrimitive>(&mut self, value: T) -> Result<()> {
        self.encode(&value.into_value(), &T::logical_type(), None)
    }

    pub fn read<T: BinaryPrimitive>(&mut self) -> Result<T> {
        T::from_value(self.decode(&T::logical_type(), None)?)
    }

    typed_helpers! {
        write_u8 / read_u8: u8,
        write_char / read_char: char,
        write_i16 / read_i16: i16,
        write_u16 / read_u16: u16,
        write_i32 / read_i32: i32,
        write_u32 / read_u32: u32,
        write_i64 / read_i64: i64,
        write_u64 / read_u64: u64,
        write_f32 / read_f32: f32,
        write_f64 / read_f64: f64,
    }

    /// Write `items` as an array, element order following the endianness.
    pub fn write_array<T: BinaryPrimitive + Clone>(&mut self, items: &[T]) -> Result<()> {
        let value = Value::Array(items.iter().cloned().map(T::into_value).collect());
        self.encode(&value, &LogicalType::array(T::logical_type()), Some(items.len()))
    }

    pub fn read_array<T: BinaryPrimitive>(&mut self, count: usize) -> Result<Vec<T>> {
        let ty = LogicalType::array(T::logical_type());
        match self.decode(&ty, Some(count))? {
            Value::Array(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(CodecError::mismatch(ty.to_string(), other.type_name())),
        }
    }

    /// Write `text` as exactly `byte_len` encoded bytes.
    pub fn write_string(&mut self, text: &str, byte_len: usize) -> Result<()> {
        self.encode(&Value::String(text.to_owned()), &LogicalType::String, Some(byte_len))
    }

    /// Write `text` at its natural encoded length; returns that length so the
    /// caller can read it back.
    pub fn write_str(&mut self, text: &str) -> Result<usize> {
        let byte_len = self.text.encode(text)?.len();
        self.write_string(text, byte_len)?;
        Ok(byte_len)
    }

    pub fn read_string(&mut self, byte_len: usize) -> Result<String> {
        match self.decode(&LogicalType::String, Some(byte_len))? {
            Value::String(s) => Ok(s),
            other => Err(CodecError::mismatch("String", other.type_name())),
        }
    }

    /// Raw bytes, written as is. Never reordered by endianness.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.cursor.can_write() {
            return Err(CodecError::NotWritable);
        }
        self.commit(bytes)?;
        self.counters.bytes_written += bytes.len() as u64;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        if !self.cursor.can_read() {
            return Err(CodecError::NotReadable);
        }
        let bytes = self.cursor.read_exact(n);
        self.drain_events();
        let bytes = bytes?;
        self.counters.bytes_read += bytes.len() as u64;
        Ok(bytes)
    }

    /// Write a `num_enum` enum through its primitive representation.
    pub fn write_enum<E>(&mut self, value: E) -> Result<()>
    where
        E: TryFromPrimitive + Into<<E as TryFromPrimitive>::Primitive>,
        E::Primitive: BinaryPrimitive,
    {
        let raw: E::Primitive = value.into();
        self.encode(&raw.into_value(), &enum_type::<E>(), None)
    }

    /// Read a `num_enum` enum; unknown discriminants fail with `InvalidEnum`.
    pub fn read_enum<E>(&mut self) -> Result<E>
    where
        E: TryFromPrimitive + fmt::Debug,
        E::Primitive: BinaryPrimitive + fmt::LowerHex,
    {
        let raw = E::Primitive::from_value(self.decode(&enum_type::<E>(), None)?)?;
        E::try_from_primitive(raw).map_err(|_| {
            debug!(enum_type = short_type_name::<E>(), "unknown discriminant");
            self.counters.errors += 1;
            CodecError::InvalidEnum {
                type_name: short_type_name::<E>().to_string(),
                raw: enum_name_or_hex::<E>(raw),
            }
        })
    }
}

fn enum_type<E>() -> LogicalType
where
    E: TryFromPrimitive,
    E::Primitive: BinaryPrimitive,
{
    LogicalType::enumeration(short_type_name::<E>(), E::Primitive::logical_type())
}

/// Encode one value into a fresh buffer using `config`.
pub fn encode_to_vec(
    value: &Value,
    ty: &LogicalType,
    length_hint: Option<usize>,
    config: &CodecConfig,
) -> Result<Vec<u8>> {
    let mut codec = Codec::with_config(MemoryCursor::new(), config.clone());
    codec.encode(value, ty, length_hint)?;
    Ok(codec.into_inner().into_inner())
}

/// Decode one value from the front of `bytes` using `config`.
pub fn decode_from_slice(
    bytes: &[u8],
    ty: &LogicalType,
    length_hint: Option<usize>,
    config: &CodecConfig,
) -> Result<Value> {
    let mut codec = Codec::with_config(MemoryCursor::read_only(bytes), config.clone());
    codec.decode(ty, length_hint)
}
