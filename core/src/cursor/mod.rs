//! cursor/mod.rs
//! Byte cursors: the position-addressable channel every codec call reads from
//! or writes to.
//!
//! Concurrency: cursors are single-owner. Sharing one across threads requires
//! external serialisation of whole encode/decode calls; mark/reset is not
//! reentrant.

pub mod types;
pub mod memory;
pub mod file;
pub mod stream;
pub mod source;

pub use types::*;
pub use memory::MemoryCursor;
pub use file::{FileAccess, FileCursor};
pub use stream::StreamCursor;
pub use source::{open_cursor, BoxedCursor, CursorSource};
