//! cursor/types.rs
//! Byte cursor capability trait, seek origins, the single-slot mark and the
//! notification hub shared by every cursor implementation.

use std::io;
use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::constants::{MAX_PREALLOC, STREAM_READ_CHUNK};
use crate::types::{CodecError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    Begin,
    Current,
    End,
}

/// Notifications delivered to `subscribe()` receivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorEvent {
    /// A read call found no more bytes. Fired once per such call.
    EndOfStream { position: u64 },
    /// A network-like transport failed during read or write.
    Disconnected { position: u64, kind: io::ErrorKind },
}

/// Saved `(position, read_limit)`. One outstanding mark; a second `set`
/// overwrites the first.
#[derive(Debug, Default, Clone)]
pub struct MarkSlot {
    mark: Option<(u64, Option<u64>)>,
}

impl MarkSlot {
    pub fn set(&mut self, position: u64, read_limit: Option<u64>) {
        self.mark = Some((position, read_limit));
    }

    pub fn get(&self) -> Option<(u64, Option<u64>)> {
        self.mark
    }

    /// Consume the mark, returning the position to rewind to.
    pub fn take(&mut self, current: u64) -> Result<u64> {
        let (position, limit) = self
            .mark
            .take()
            .ok_or_else(|| CodecError::InvalidMark("no mark set".into()))?;

        if let Some(limit) = limit {
            let travelled = current.saturating_sub(position);
            if travelled > limit {
                return Err(CodecError::InvalidMark(format!(
                    "read {} bytes past mark, limit {}",
                    travelled, limit
                )));
            }
        }
        Ok(position)
    }
}

/// Fan-out of cursor events to any number of subscribers.
#[derive(Debug, Default)]
pub struct EventHub {
    subscribers: Vec<Sender<CursorEvent>>,
}

impl EventHub {
    pub fn subscribe(&mut self) -> Receiver<CursorEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn emit(&mut self, event: CursorEvent) {
        tracing::trace!(?event, "cursor event");
        // Receiver dropped: forget the subscriber
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Position-addressable byte channel over a buffer, file or socket.
///
/// `read` returns up to `n` bytes; an empty result means end of stream and
/// fires `CursorEvent::EndOfStream`.
pub trait ByteCursor {
    fn can_read(&self) -> bool;
    fn can_write(&self) -> bool;
    fn can_seek(&self) -> bool;

    /// Source is not seekable and has no well-defined length.
    fn is_network_like(&self) -> bool;

    fn position(&self) -> u64;

    /// Total length; `SeekUnsupported` for streams.
    fn length(&self) -> Result<u64>;

    fn read(&mut self, n: usize) -> Result<Vec<u8>>;

    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64>;

    fn flush(&mut self) -> Result<()>;

    fn close(&mut self) -> Result<()>;

    fn mark_slot(&mut self) -> &mut MarkSlot;

    fn events(&mut self) -> &mut EventHub;

    /// Read exactly `n` bytes or fail with `Truncated`. Nothing is returned on
    /// failure; the bytes consumed so far are lost on non-seekable cursors.
    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(n.min(MAX_PREALLOC));
        while out.len() < n {
            let chunk = self.read(n - out.len())?;
            if chunk.is_empty() {
                return Err(CodecError::Truncated { needed: n, available: out.len() });
            }
            out.extend_from_slice(&chunk);
        }
        Ok(out)
    }

    /// Advance `n` bytes; returns the number actually skipped.
    fn skip(&mut self, n: u64) -> Result<u64> {
        if self.can_seek() {
            let start = self.position();
            let len = self.length()?;
            let target = start.saturating_add(n).min(len);
            self.seek(target as i64, SeekOrigin::Begin)?;
            return Ok(target - start);
        }

        let mut skipped = 0u64;
        while skipped < n {
            let want = (n - skipped).min(STREAM_READ_CHUNK as u64) as usize;
            let chunk = self.read(want)?;
            if chunk.is_empty() {
                break;
            }
            skipped += chunk.len() as u64;
        }
        Ok(skipped)
    }

    fn remaining(&self) -> Result<u64> {
        Ok(self.length()?.saturating_sub(self.position()))
    }

    /// Record the current position. `read_limit = None` means unlimited.
    fn mark(&mut self, read_limit: Option<u64>) -> Result<()> {
        if !self.can_seek() {
            return Err(CodecError::SeekUnsupported);
        }
        let position = self.position();
        self.mark_slot().set(position, read_limit);
        Ok(())
    }

    /// Rewind to the mark, consuming it.
    fn reset(&mut self) -> Result<()> {
        if !self.can_seek() {
            return Err(CodecError::SeekUnsupported);
        }
        let current = self.position();
        let target = self.mark_slot().take(current)?;
        self.seek(target as i64, SeekOrigin::Begin)?;
        Ok(())
    }

    fn subscribe(&mut self) -> Receiver<CursorEvent> {
        self.events().subscribe()
    }
}

impl<C: ByteCursor + ?Sized> ByteCursor for Box<C> {
    fn can_read(&self) -> bool { (**self).can_read() }
    fn can_write(&self) -> bool { (**self).can_write() }
    fn can_seek(&self) -> bool { (**self).can_seek() }
    fn is_network_like(&self) -> bool { (**self).is_network_like() }
    fn position(&self) -> u64 { (**self).position() }
    fn length(&self) -> Result<u64> { (**self).length() }
    fn read(&mut self, n: usize) -> Result<Vec<u8>> { (**self).read(n) }
    fn write(&mut self, bytes: &[u8]) -> Result<()> { (**self).write(bytes) }
    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64> { (**self).seek(offset, origin) }
    fn flush(&mut self) -> Result<()> { (**self).flush() }
    fn close(&mut self) -> Result<()> { (**self).close() }
    fn mark_slot(&mut self) -> &mut MarkSlot { (**self).mark_slot() }
    fn events(&mut self) -> &mut EventHub { (**self).events() }
    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>> { (**self).read_exact(n) }
    fn skip(&mut self, n: u64) -> Result<u64> { (**self).skip(n) }
    fn remaining(&self) -> Result<u64> { (**self).remaining() }
    fn mark(&mut self, read_limit: Option<u64>) -> Result<()> { (**self).mark(read_limit) }
    fn reset(&mut self) -> Result<()> { (**self).reset() }
    fn subscribe(&mut self) -> Receiver<CursorEvent> { (**self).subscribe() }
}

/// Resolve a seek request against `[0, length]`.
pub(crate) fn resolve_seek(current: u64, length: u64, offset: i64, origin: SeekOrigin) -> Result<u64> {
    let base: i128 = match origin {
        SeekOrigin::Begin => 0,
        SeekOrigin::Current => current as i128,
        SeekOrigin::End => length as i128,
    };
    let target = base + offset as i128;
    if target < 0 || target > length as i128 {
        return Err(CodecError::SeekOutOfRange { target, length });
    }
    Ok(target as u64)
}
