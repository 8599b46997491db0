//! telemetry/mod.rs
//! Codec telemetry: plain counters and stage timers kept on each `Codec`,
//! frozen into a serde snapshot on demand.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
