//! telemetry/timers.rs
//! Accumulated wall-clock time per codec stage.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Encode,
    Decode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Encode => "encode",
            Stage::Decode => "decode",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    pub encode: Duration,
    pub decode: Duration,
}

impl StageTimes {
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        match stage {
            Stage::Encode => self.encode += dur,
            Stage::Decode => self.decode += dur,
        }
    }

    pub fn get(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Encode => self.encode,
            Stage::Decode => self.decode,
        }
    }

    pub fn get_us(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000_000.0
    }

    pub fn total(&self) -> Duration {
        self.encode + self.decode
    }
}

#[derive(Clone, Debug)]
pub struct CodecTimer {
    pub start_time: Instant,
    pub stage_times: StageTimes,
}

impl Default for CodecTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecTimer {
    pub fn new() -> Self {
        Self { start_time: Instant::now(), stage_times: StageTimes::default() }
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
