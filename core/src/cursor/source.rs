//! cursor/source.rs
//! Normalise the ways a caller can hand over a transport into one boxed cursor.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::PathBuf;

use crate::cursor::file::{FileAccess, FileCursor};
use crate::cursor::memory::MemoryCursor;
use crate::cursor::stream::StreamCursor;
use crate::cursor::types::ByteCursor;
use crate::types::Result;

/// Canonical transport abstraction
pub enum CursorSource {
    Memory(Vec<u8>),
    File(PathBuf, FileAccess),
    Reader(Box<dyn Read + Send>),
    Writer(Box<dyn Write + Send>),
    Tcp(TcpStream),
}

pub type BoxedCursor = Box<dyn ByteCursor + Send>;

/// Normalize a transport into a boxed cursor
pub fn open_cursor(src: CursorSource) -> Result<BoxedCursor> {
    let cursor: BoxedCursor = match src {
        CursorSource::Memory(b) => Box::new(MemoryCursor::from_vec(b)),
        CursorSource::File(p, access) => Box::new(FileCursor::open(p, access)?),
        CursorSource::Reader(r) => Box::new(StreamCursor::new(Some(r), None, false)),
        CursorSource::Writer(w) => Box::new(StreamCursor::new(None, Some(w), false)),
        CursorSource::Tcp(s) => Box::new(StreamCursor::from_tcp(s)?),
    };
    Ok(cursor)
}
