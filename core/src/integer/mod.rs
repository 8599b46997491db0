//! integer/mod.rs
//! Fixed-width integer codec: signed/unsigned 16/32/64-bit, always
//! most-significant byte first.

pub mod encode;
pub mod decode;

pub use encode::*;
pub use decode::*;
