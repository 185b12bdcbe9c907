//! Process model.
//!
//! A process is the unit of CPU work being scheduled. Static inputs
//! (arrival, burst, priority) are set by the caller; run state and outputs
//! are owned by the engine and only touched on a per-run working copy.
//!
//! # Time Representation
//! All times are integer simulation time units relative to t=0.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A CPU-bound process.
///
/// Lower `priority` values are more important. Outputs are `None` until the
/// process completes within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (positive, unique within a run).
    pub id: u32,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// CPU time still required in the current run.
    pub remaining_time: i64,
    /// Multilevel queue band, assigned by the multilevel policy only.
    pub band: Option<usize>,
    /// First time the process was dispatched.
    pub start_time: Option<i64>,
    /// Time at which the process finished.
    pub completion_time: Option<i64>,
    /// completion - arrival.
    pub turnaround_time: Option<i64>,
    /// turnaround - burst.
    pub waiting_time: Option<i64>,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            band: None,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Copy of the static inputs with run state and outputs reset.
    ///
    /// Every run starts from working copies, so stale outputs on the
    /// caller's records never leak into a new schedule.
    pub fn working_copy(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time).with_priority(self.priority)
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Whether the process has finished in the current run.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Runs the process for `duration` starting at `at`.
    ///
    /// Records the first dispatch time and decrements the remaining time.
    pub(crate) fn run(&mut self, at: i64, duration: i64) {
        debug_assert!(duration > 0 && duration <= self.remaining_time);
        if self.start_time.is_none() {
            self.start_time = Some(at);
        }
        self.remaining_time -= duration;
    }

    /// Records completion at `time` and derives turnaround and waiting time.
    pub(crate) fn complete(&mut self, time: i64) {
        debug_assert!(!self.is_completed(), "P{} completed twice", self.id);
        debug_assert_eq!(self.remaining_time, 0);
        let turnaround = time - self.arrival_time;
        self.completion_time = Some(time);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }

    /// Time from arrival to first dispatch.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival_time)
    }
}

/// One-line detail: `P1 | Arrival: 0 | Burst: 8 | Priority: 2 | WT: 6 | TAT: 14`.
///
/// Waiting and turnaround show `-` until the process completes.
impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{} | Arrival: {} | Burst: {} | Priority: {} | WT: {} | TAT: {}",
            self.id,
            self.arrival_time,
            self.burst_time,
            self.priority,
            OrDash(self.waiting_time),
            OrDash(self.turnaround_time)
        )
    }
}

struct OrDash(Option<i64>);

impl fmt::Display for OrDash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("-"),
        }
    }
}
