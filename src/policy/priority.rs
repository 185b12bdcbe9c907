//! Static priority scheduling.
//!
//! Lower priority values win. Non-preemptive mode runs the selected process
//! to completion; preemptive mode re-selects every time unit, so a more
//! important arrival takes the CPU at the next unit boundary and the
//! displaced process keeps its progress in `remaining_time`.
//!
//! Ties go to the lowest process ID. Priorities never change during a run.

use super::engine::Execute;
use super::selection::{run_to_completion, run_unit_steps};
use super::Scheduler;
use crate::models::{Process, Timeline};

/// Priority scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityScheduling {
    preemptive: bool,
}

impl PriorityScheduling {
    /// Run-to-completion variant.
    pub const NON_PREEMPTIVE: Self = Self { preemptive: false };

    /// Unit-step preemptive variant.
    pub const PREEMPTIVE: Self = Self { preemptive: true };

    /// Creates the policy.
    pub fn new(preemptive: bool) -> Self {
        Self { preemptive }
    }

    /// Whether a more important arrival preempts the running process.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Scheduler for PriorityScheduling {
    fn name(&self) -> String {
        if self.preemptive {
            "Priority Scheduling (Preemptive)".into()
        } else {
            "Priority Scheduling (Non-Preemptive)".into()
        }
    }
}

impl Execute for PriorityScheduling {
    fn execute(&self, processes: &mut [Process]) -> Timeline {
        if self.preemptive {
            run_unit_steps(processes, |p| p.priority)
        } else {
            run_to_completion(processes, |p| p.priority)
        }
    }
}
