//! cursor/stream.rs
//! Cursor over non-seekable transports (sockets, pipes, boxed readers/writers).
//!
//! Position counts bytes consumed by reads, or bytes written for write-only
//! streams. Length and seeking are unsupported.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};

use crate::constants::{MAX_PREALLOC, STREAM_READ_CHUNK};
use crate::cursor::types::{ByteCursor, CursorEvent, EventHub, MarkSlot, SeekOrigin};
use crate::types::{CodecError, Result};

pub struct StreamCursor {
    reader: Option<Box<dyn Read + Send>>,
    writer: Option<Box<dyn Write + Send>>,
    socket: Option<TcpStream>,
    network_like: bool,
    read_pos: u64,
    write_pos: u64,
    mark: MarkSlot,
    events: EventHub,
}

impl std::fmt::Debug for StreamCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamCursor")
            .field("readable", &self.reader.is_some())
            .field("writable", &self.writer.is_some())
            .field("network_like", &self.network_like)
            .field("read_pos", &self.read_pos)
            .field("write_pos", &self.write_pos)
            .finish()
    }
}

impl StreamCursor {
    pub fn new(
        reader: Option<Box<dyn Read + Send>>,
        writer: Option<Box<dyn Write + Send>>,
        network_like: bool,
    ) -> Self {
        Self {
            reader,
            writer,
            socket: None,
            network_like,
            read_pos: 0,
            write_pos: 0,
            mark: MarkSlot::default(),
            events: EventHub::default(),
        }
    }

    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Self::new(Some(Box::new(reader)), None, false)
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new(None, Some(Box::new(writer)), false)
    }

    /// Duplex, network-like cursor over a connected socket.
    pub fn from_tcp(stream: TcpStream) -> Result<Self> {
        let reader = stream.try_clone()?;
        let writer = stream.try_clone()?;
        let mut cursor = Self::new(Some(Box::new(reader)), Some(Box::new(writer)), true);
        cursor.socket = Some(stream);
        Ok(cursor)
    }

    fn transport_error(&mut self, e: io::Error) -> CodecError {
        if self.network_like {
            let position = self.position();
            self.events.emit(CursorEvent::Disconnected { position, kind: e.kind() });
            CodecError::Disconnected(e)
        } else {
            CodecError::from(e)
        }
    }
}

impl ByteCursor for StreamCursor {
    fn can_read(&self) -> bool {
        self.reader.is_some()
    }

    fn can_write(&self) -> bool {
        self.writer.is_some()
    }

    fn can_seek(&self) -> bool {
        false
    }

    fn is_network_like(&self) -> bool {
        self.network_like
    }

    fn position(&self) -> u64 {
        if self.reader.is_some() {
            self.read_pos
        } else {
            self.write_pos
        }
    }

    fn length(&self) -> Result<u64> {
        Err(CodecError::SeekUnsupported)
    }

    fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        let reader = self.reader.as_mut().ok_or(CodecError::NotReadable)?;
        let mut out = Vec::with_capacity(n.min(MAX_PREALLOC));
        let mut chunk = [0u8; STREAM_READ_CHUNK];
        let mut filled = 0;
        let mut failure = None;

        while filled < n {
            let want = (n - filled).min(STREAM_READ_CHUNK);
            match reader.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(k) => {
                    out.extend_from_slice(&chunk[..k]);
                    filled += k;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }
        self.read_pos += filled as u64;

        if let Some(e) = failure {
            return Err(self.transport_error(e));
        }
        if n > 0 && filled == 0 {
            let position = self.read_pos;
            self.events.emit(CursorEvent::EndOfStream { position });
        }
        Ok(out)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let writer = self.writer.as_mut().ok_or(CodecError::NotWritable)?;
        match writer.write_all(bytes) {
            Ok(()) => {
                self.write_pos += bytes.len() as u64;
                Ok(())
            }
            Err(e) => Err(self.transport_error(e)),
        }
    }

    fn seek(&mut self, _offset: i64, _origin: SeekOrigin) -> Result<u64> {
        Err(CodecError::SeekUnsupported)
    }

    fn flush(&mut self) -> Result<()> {
        let result = match self.writer.as_mut() {
            Some(w) => w.flush(),
            None => Ok(()),
        };
        result.map_err(|e| self.transport_error(e))
    }

    fn close(&mut self) -> Result<()> {
        self.flush()?;
        self.reader = None;
        self.writer = None;
        if let Some(socket) = self.socket.take() {
            match socket.shutdown(Shutdown::Both) {
                Err(e) if e.kind() != io::ErrorKind::NotConnected => return Err(e.into()),
                _ => {}
            }
        }
        Ok(())
    }

    fn mark_slot(&mut self) -> &mut MarkSlot {
        &mut self.mark
    }

    fn events(&mut self) -> &mut EventHub {
        &mut self.events
    }
}
