//! telemetry/counters.rs
//! Mutable counters updated by every encode/decode call.
//!
//! Counters are plain integers owned by one `Codec`; codecs used on
//! different threads are combined afterwards with `merge` or `+=`.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub values_encoded: u64,
    pub values_decoded: u64,
    pub records_encoded: u64,
    pub records_decoded: u64,
    pub bytes_written: u64,
    pub bytes_read: u64,
    /// Length mismatches accepted under `LengthPolicy::WarnAndTruncate`.
    pub length_warnings: u64,
    pub end_of_stream_events: u64,
    pub disconnects: u64,
    pub errors: u64,
}

impl CodecCounters {
    pub fn add_encoded(&mut self, bytes: usize) {
        self.values_encoded += 1;
        self.bytes_written += bytes as u64;
    }

    pub fn add_decoded(&mut self, bytes: u64) {
        self.values_decoded += 1;
        self.bytes_read += bytes;
    }

    pub fn add_record_encoded(&mut self, bytes: usize) {
        self.records_encoded += 1;
        self.bytes_written += bytes as u64;
    }

    pub fn add_record_decoded(&mut self, bytes: u64) {
        self.records_decoded += 1;
        self.bytes_read += bytes;
    }

    pub fn total_bytes(&self) -> u64 {
        self.bytes_written + self.bytes_read
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        self.values_encoded += other.values_encoded;
        self.values_decoded += other.values_decoded;
        self.records_encoded += other.records_encoded;
        self.records_decoded += other.records_decoded;
        self.bytes_written += other.bytes_written;
        self.bytes_read += other.bytes_read;
        self.length_warnings += other.length_warnings;
        self.end_of_stream_events += other.end_of_stream_events;
        self.disconnects += other.disconnects;
        self.errors += other.errors;
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
