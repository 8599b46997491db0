//! cursor/file.rs
//! File-backed cursor. Capabilities follow the access mode it was opened with.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::constants::MAX_PREALLOC;
use crate::cursor::types::{resolve_seek, ByteCursor, CursorEvent, EventHub, MarkSlot, SeekOrigin};
use crate::types::{CodecError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    /// Existing file, read only.
    Read,
    /// Create or truncate, write only.
    Write,
    /// Create if missing, keep contents.
    ReadWrite,
}

impl FileAccess {
    fn readable(self) -> bool {
        matches!(self, FileAccess::Read | FileAccess::ReadWrite)
    }

    fn writable(self) -> bool {
        matches!(self, FileAccess::Write | FileAccess::ReadWrite)
    }
}

#[derive(Debug)]
pub struct FileCursor {
    file: Option<File>,
    access: FileAccess,
    pos: u64,
    mark: MarkSlot,
    events: EventHub,
}

impl FileCursor {
    pub fn open<P: AsRef<Path>>(path: P, access: FileAccess) -> Result<Self> {
        let file = match access {
            FileAccess::Read => File::open(path)?,
            FileAccess::Write => OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?,
            FileAccess::ReadWrite => OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)?,
        };
        Ok(Self::from_file(file, access))
    }

    /// Wrap an already-open file positioned at its start.
    pub fn from_file(file: File, access: FileAccess) -> Self {
        Self {
            file: Some(file),
            access,
            pos: 0,
            mark: MarkSlot::default(),
            events: EventHub::default(),
        }
    }

    pub fn access(&self) -> FileAccess {
        self.access
    }

    fn file(&mut self) -> Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| CodecError::Io(std::io::Error::other("file cursor closed")))
    }
}

impl ByteCursor for FileCursor {
    fn can_read(&self) -> bool {
        self.file.is_some() && self.access.readable()
    }

    fn can_write(&self) -> bool {
        self.file.is_some() && self.access.writable()
    }

    fn can_seek(&self) -> bool {
        self.file.is_some()
    }

    fn is_network_like(&self) -> bool {
        false
    }

    fn position(&self) -> u64 {
        self.pos
    }

    fn length(&self) -> Result<u64> {
        match &self.file {
            Some(f) => Ok(f.metadata()?.len()),
            None => Err(CodecError::Io(std::io::Error::other("file cursor closed"))),
        }
    }

    fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        if !self.can_read() {
            return Err(CodecError::NotReadable);
        }
        let mut out = Vec::with_capacity(n.min(MAX_PREALLOC));
        self.file()?.take(n as u64).read_to_end(&mut out)?;
        if n > 0 && out.is_empty() {
            let position = self.pos;
            self.events.emit(CursorEvent::EndOfStream { position });
        }
        self.pos += out.len() as u64;
        Ok(out)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.can_write() {
            return Err(CodecError::NotWritable);
        }
        self.file()?.write_all(bytes)?;
        self.pos += bytes.len() as u64;
        Ok(())
    }

    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64> {
        if !self.can_seek() {
            return Err(CodecError::SeekUnsupported);
        }
        let target = resolve_seek(self.pos, self.length()?, offset, origin)?;
        self.pos = self.file()?.seek(SeekFrom::Start(target))?;
        Ok(self.pos)
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(f) = self.file.as_mut() {
            f.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut f) = self.file.take() {
            f.flush()?;
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
