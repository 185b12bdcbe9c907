//! Scheduling policies and the policy selector.
//!
//! Every policy implements [`Scheduler`]. [`Scheduler::schedule`] validates
//! the process set, simulates the policy on working copies and computes
//! metrics, so callers' records are never mutated and every run is
//! deterministic. The simulation step itself is crate-private and can only
//! be reached through `schedule`.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::policy::{Policy, Scheduler};
//! use cpu_schedule::PolicyParams;
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let policy = Policy::from_selector("ROUND-ROBIN", &PolicyParams::default()).unwrap();
//! let schedule = policy.schedule(&processes).unwrap();
//! assert_eq!(schedule.timeline.process_order(), vec![1, 2, 1]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod multilevel;
mod priority;
mod round_robin;
pub(crate) mod selection;
mod sjf;

pub use fcfs::Fcfs;
pub use multilevel::{band_for_priority, MultilevelQueue, BAND_COUNT};
pub use priority::PriorityScheduling;
pub use round_robin::RoundRobin;
pub use sjf::ShortestJobFirst;

use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::config::PolicyParams;
use crate::error::{Result, ScheduleError};
use crate::metrics::ScheduleMetrics;
use crate::models::{Process, Schedule, Timeline};
use crate::validation;
use engine::Execute;

mod engine {
    use crate::models::{Process, Timeline};

    /// Simulation step behind [`Scheduler::schedule`](super::Scheduler::schedule).
    ///
    /// Expects validated working copies. On return every process must be
    /// completed and the timeline must hold every unit of CPU time granted.
    pub trait Execute {
        fn execute(&self, processes: &mut [Process]) -> Timeline;
    }
}

/// A CPU scheduling policy.
///
/// [`schedule`](Scheduler::schedule) is the only way to run a policy. The
/// trait is sealed: the set of policies is fixed by this crate.
///
/// The simulation step cannot be called on unvalidated input:
///
/// ```compile_fail
/// use cpu_schedule::models::Process;
/// use cpu_schedule::Policy;
///
/// let mut processes = vec![Process::new(1, 0, 0)];
/// let _ = Policy::Fcfs.execute(&mut processes);
/// ```
pub trait Scheduler: Execute + Send + Sync + Debug {
    /// Human-readable policy name, including parameters.
    fn name(&self) -> String;

    /// Validates the input, runs the policy on private copies and computes
    /// metrics.
    ///
    /// # Errors
    /// - `EmptyInput` if `processes` is empty
    /// - `InvalidProcess` if any process fails validation
    fn schedule(&self, processes: &[Process]) -> Result<Schedule> {
        validation::check_input(processes)?;

        let name = self.name();
        log::debug!("{name}: scheduling {} processes", processes.len());

        let mut working: Vec<Process> = processes.iter().map(Process::working_copy).collect();
        let timeline = self.execute(&mut working);
        debug_assert!(timeline.is_well_formed());
        debug_assert!(working.iter().all(Process::is_completed));

        let metrics = ScheduleMetrics::calculate(&working, &timeline)?;
        log::debug!(
            "{name}: makespan {}, avg waiting {:.2}, avg turnaround {:.2}, cpu {:.2}%",
            metrics.makespan,
            metrics.average_waiting_time,
            metrics.average_turnaround_time,
            metrics.cpu_utilization
        );

        Ok(Schedule::new(name, timeline, working, metrics))
    }
}

/// Policy selector.
///
/// One variant per selectable policy; parameterized variants carry an
/// already-validated policy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, run to completion.
    SjfNonPreemptive,
    /// Shortest-Remaining-Time-First.
    SjfPreemptive,
    /// Static priority, run to completion.
    PriorityNonPreemptive,
    /// Static priority, preempted at unit boundaries.
    PriorityPreemptive,
    /// Round Robin with its time quantum.
    RoundRobin(RoundRobin),
    /// Three-band multilevel queue with its quanta.
    Multilevel(MultilevelQueue),
}

impl Policy {
    /// Builds a policy from a selector string and parameters.
    ///
    /// Selectors are case-insensitive; `_` and spaces are read as `-`.
    /// Canonical names: `FCFS`, `SJF-NP`, `SJF-P`, `PRIORITY-NP`,
    /// `PRIORITY-P`, `ROUND-ROBIN`, `MULTILEVEL`.
    ///
    /// # Errors
    /// - `UnknownPolicy` for an unrecognized selector
    /// - `InvalidParameter` if the parameters used by the policy are invalid
    pub fn from_selector(selector: &str, params: &PolicyParams) -> Result<Self> {
        let normalized = selector.trim().to_ascii_uppercase().replace(['_', ' '], "-");
        let policy = match normalized.as_str() {
            "FCFS" | "FIFO" => Self::Fcfs,
            "SJF-NP" | "SJF" => Self::SjfNonPreemptive,
            "SJF-P" | "SRTF" => Self::SjfPreemptive,
            "PRIORITY-NP" | "PRIORITY" => Self::PriorityNonPreemptive,
            "PRIORITY-P" => Self::PriorityPreemptive,
            "ROUND-ROBIN" | "RR" => Self::RoundRobin(RoundRobin::new(params.time_quantum)?),
            "MULTILEVEL" | "MLQ" | "MULTILEVEL-QUEUE" => {
                Self::Multilevel(MultilevelQueue::new(params.multilevel_quanta)?)
            }
            _ => return Err(ScheduleError::UnknownPolicy(selector.to_string())),
        };
        Ok(policy)
    }

    /// The seven policies in canonical order.
    ///
    /// # Errors
    /// `InvalidParameter` if `params` holds a non-positive quantum.
    pub fn standard_set(params: &PolicyParams) -> Result<Vec<Self>> {
        Ok(vec![
            Self::Fcfs,
            Self::SjfNonPreemptive,
            Self::SjfPreemptive,
            Self::PriorityNonPreemptive,
            Self::PriorityPreemptive,
            Self::RoundRobin(RoundRobin::new(params.time_quantum)?),
            Self::Multilevel(MultilevelQueue::new(params.multilevel_quanta)?),
        ])
    }

    /// Canonical selector string.
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::SjfNonPreemptive => "SJF-NP",
            Self::SjfPreemptive => "SJF-P",
            Self::PriorityNonPreemptive => "PRIORITY-NP",
            Self::PriorityPreemptive => "PRIORITY-P",
            Self::RoundRobin(_) => "ROUND-ROBIN",
            Self::Multilevel(_) => "MULTILEVEL",
        }
    }

    /// Whether the policy may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        !matches!(
            self,
            Self::Fcfs | Self::SjfNonPreemptive | Self::PriorityNonPreemptive
        )
    }

    fn as_scheduler(&self) -> &dyn Scheduler {
        match self {
            Self::Fcfs => &Fcfs,
            Self::SjfNonPreemptive => &ShortestJobFirst::NON_PREEMPTIVE,
            Self::SjfPreemptive => &ShortestJobFirst::PREEMPTIVE,
            Self::PriorityNonPreemptive => &PriorityScheduling::NON_PREEMPTIVE,
            Self::PriorityPreemptive => &PriorityScheduling::PREEMPTIVE,
            Self::RoundRobin(rr) => rr,
            Self::Multilevel(mlq) => mlq,
        }
    }
}

impl Scheduler for Policy {
    fn name(&self) -> String {
        self.as_scheduler().name()
    }
}

impl Execute for Policy {
    fn execute(&self, processes: &mut [Process]) -> Timeline {
        self.as_scheduler().execute(processes)
    }
}

impl FromStr for Policy {
    type Err = ScheduleError;

    /// Parses a selector with default parameters.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_selector(s, &PolicyParams::default())
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Runs one policy over a process set.
///
/// This is the single entry point for front ends: the selector and
/// parameters are checked before any simulation starts, and a failure never
/// leaves a partial schedule behind.
///
/// # Example
/// ```
/// use cpu_schedule::{schedule, PolicyParams};
/// use cpu_schedule::models::Process;
///
/// let processes = vec![
///     Process::new(1, 0, 8),
///     Process::new(2, 1, 4),
///     Process::new(3, 2, 2),
/// ];
/// let result = schedule(&processes, "SJF-NP", &PolicyParams::default()).unwrap();
/// assert_eq!(result.timeline.process_order(), vec![1, 3, 2]);
/// ```
pub fn schedule(processes: &[Process], selector: &str, params: &PolicyParams) -> Result<Schedule> {
    let policy = Policy::from_selector(selector, params)?;
    policy.schedule(processes)
}
