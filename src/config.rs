//! Policy parameters.
//!
//! Caller-tunable knobs for the time-sliced policies. Deserializes from any
//! serde format with missing fields falling back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Default round-robin time quantum.
pub const DEFAULT_TIME_QUANTUM: i64 = 4;

/// Default multilevel queue quanta, highest band first.
pub const DEFAULT_MULTILEVEL_QUANTA: [i64; 3] = [2, 4, 8];

/// Parameters for policy construction.
///
/// `time_quantum` is used by round robin only; `multilevel_quanta` by the
/// multilevel queue only. Other policies ignore both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyParams {
    /// Round-robin slice length.
    pub time_quantum: i64,
    /// Per-band slice length for the multilevel queue.
    pub multilevel_quanta: [i64; 3],
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
            multilevel_quanta: DEFAULT_MULTILEVEL_QUANTA,
        }
    }
}

impl PolicyParams {
    /// Creates default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin time quantum.
    pub fn with_time_quantum(mut self, quantum: i64) -> Self {
        self.time_quantum = quantum;
        self
    }

    /// Sets the multilevel queue quanta.
    pub fn with_multilevel_quanta(mut self, quanta: [i64; 3]) -> Self {
        self.multilevel_quanta = quanta;
        self
    }

    /// Checks that every quantum is positive.
    pub fn validate(&self) -> Result<()> {
        check_quantum("time quantum", self.time_quantum)?;
        check_quanta(&self.multilevel_quanta)
    }
}

pub(crate) fn check_quantum(what: &str, quantum: i64) -> Result<()> {
    if quantum <= 0 {
        return Err(ScheduleError::InvalidParameter(format!(
            "{what} must be positive, got {quantum}"
        )));
    }
    Ok(())
}

pub(crate) fn check_quanta(quanta: &[i64; 3]) -> Result<()> {
    for (band, &q) in quanta.iter().enumerate() {
        check_quantum(&format!("band {band} quantum"), q)?;
    }
    Ok(())
}
