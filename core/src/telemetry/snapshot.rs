//! telemetry/snapshot.rs
//! Immutable view of a codec's counters and timings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::CodecCounters;
use crate::telemetry::timers::{CodecTimer, StageTimes};
use crate::types::{CodecError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecSnapshot {
    pub counters: CodecCounters,
    pub stage_times: StageTimes,
    pub elapsed: Duration,
    /// Bytes written plus bytes read, per second of elapsed time.
    pub throughput_bytes_per_sec: f64,
}

impl CodecSnapshot {
    pub fn from(counters: &CodecCounters, timer: &CodecTimer) -> Self {
        let elapsed = timer.elapsed();
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.total_bytes() as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            stage_times: timer.stage_times,
            elapsed,
            throughput_bytes_per_sec: throughput,
        }
    }

    /// Stage time can never exceed wall-clock time.
    pub fn sanity_check(&self) -> bool {
        self.stage_times.total() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CodecError::Config(e.to_string()))
    }
}
