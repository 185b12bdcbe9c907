//! Schedule (result) model.
//!
//! A schedule is the outcome of one policy run: the execution timeline,
//! the completed process set and the aggregate metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};
use crate::metrics::ScheduleMetrics;

/// The result of running one scheduling policy over a process set.
///
/// `processes` keeps the caller's input order; each entry carries its
/// completion, turnaround and waiting times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Human-readable policy name, including parameters.
    pub policy: String,
    /// Execution slices in time order.
    pub timeline: Timeline,
    /// Completed copies of every input process.
    pub processes: Vec<Process>,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
}

impl Schedule {
    /// Assembles a schedule from its parts.
    pub fn new(
        policy: impl Into<String>,
        timeline: Timeline,
        processes: Vec<Process>,
        metrics: ScheduleMetrics,
    ) -> Self {
        Self {
            policy: policy.into(),
            timeline,
            processes,
            metrics,
        }
    }

    /// Mean waiting time.
    #[inline]
    pub fn average_waiting_time(&self) -> f64 {
        self.metrics.average_waiting_time
    }

    /// Mean turnaround time.
    #[inline]
    pub fn average_turnaround_time(&self) -> f64 {
        self.metrics.average_turnaround_time
    }

    /// CPU utilization in percent.
    #[inline]
    pub fn cpu_utilization(&self) -> f64 {
        self.metrics.cpu_utilization
    }

    /// End of the last slice.
    #[inline]
    pub fn makespan(&self) -> i64 {
        self.timeline.end_time()
    }

    /// Finds a completed process by id.
    pub fn process(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Whether every process carries its outputs.
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(Process::is_completed)
    }
}

/// Metrics summary: policy name, average waiting and turnaround time, CPU
/// utilization.
impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Policy: {}", self.policy)?;
        writeln!(f, "Average Waiting Time: {:.2}", self.average_waiting_time())?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.average_turnaround_time())?;
        writeln!(f, "CPU Utilization: {:.2}%", self.cpu_utilization())
    }
}
