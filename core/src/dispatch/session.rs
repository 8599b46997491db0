//! dispatch/session.rs
//! Per-call state threaded through the recursive encode/decode paths.

use tracing::warn;

use crate::config::{FloatMode, LengthPolicy};
use crate::telemetry::CodecCounters;
use crate::text::TextEncoder;
use crate::types::{CodecError, Result};

pub(crate) struct Session<'a> {
    pub length_policy: LengthPolicy,
    pub float_mode: FloatMode,
    pub text: &'a dyn TextEncoder,
    pub counters: &'a mut CodecCounters,
}

impl Session<'_> {
    /// Reconcile a supplied length with the declared one. Under
    /// `WarnAndTruncate` the caller truncates or zero-pads after this returns.
    pub fn check_length(&mut self, what: &str, supplied: usize, declared: usize) -> Result<()> {
        if supplied == declared {
            return Ok(());
        }
        match self.length_policy {
            LengthPolicy::Strict => Err(CodecError::InvalidLayout(format!(
                "{}: {} supplied, {} declared",
                what, supplied, declared
            ))),
            LengthPolicy::WarnAndTruncate => {
                warn!(what, supplied, declared, "length mismatch, writing declared length");
                self.counters.length_warnings += 1;
                Ok(())
            }
        }
    }
}
