//! cursor/memory.rs
//! In-memory cursor over a growable byte buffer.

use bytes::Bytes;

use crate::cursor::types::{resolve_seek, ByteCursor, CursorEvent, EventHub, MarkSlot, SeekOrigin};
use crate::types::{CodecError, Result};

#[derive(Debug, Default)]
pub struct MemoryCursor {
    data: Vec<u8>,
    pos: usize,
    readable: bool,
    writable: bool,
    mark: MarkSlot,
    events: EventHub,
}

impl MemoryCursor {
    /// Empty read/write buffer.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Read/write buffer positioned at the start of `data`.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data,
            pos: 0,
            readable: true,
            writable: true,
            mark: MarkSlot::default(),
            events: EventHub::default(),
        }
    }

    /// Read-only view over a copy of `data`.
    pub fn read_only(data: impl Into<Vec<u8>>) -> Self {
        Self { writable: false, ..Self::from_vec(data.into()) }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Owned copy of the whole buffer, independent of later writes.
    pub fn snapshot(&self) -> Bytes {
        Bytes::copy_from_slice(&self.data)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl ByteCursor for MemoryCursor {
    fn can_read(&self) -> bool {
        self.readable
    }

    fn can_write(&self) -> bool {
        self.writable
    }

    fn can_seek(&self) -> bool {
        self.readable || self.writable
    }

    fn is_network_like(&self) -> bool {
        false
    }

    fn position(&self) -> u64 {
        self.pos as u64
    }

    fn length(&self) -> Result<u64> {
        Ok(self.data.len() as u64)
    }

    fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        if !self.readable {
            return Err(CodecError::NotReadable);
        }
        if n > 0 && self.pos >= self.data.len() {
            self.events.emit(CursorEvent::EndOfStream { position: self.pos as u64 });
            return Ok(Vec::new());
        }
        let end = self.pos.saturating_add(n).min(self.data.len());
        let out = self.data[self.pos..end].to_vec();
        self.pos = end;
        Ok(out)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.writable {
            return Err(CodecError::NotWritable);
        }
        let end = self.pos + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64> {
        if !self.can_seek() {
            return Err(CodecError::SeekUnsupported);
        }
        let target = resolve_seek(self.pos as u64, self.data.len() as u64, offset, origin)?;
        self.pos = target as usize;
        Ok(target)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.readable = false;
        self.writable = false;
        Ok(())
    }

    fn mark_slot(&mut self) -> &mut MarkSlot {
        &mut self.mark
    }

    fn events(&mut self) -> &mut EventHub {
        &mut self.events
    }
}
