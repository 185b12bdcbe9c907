//! Shortest-Job-First.
//!
//! - **Non-preemptive**: at each completion, run the arrived process with
//!   the smallest burst time to completion.
//! - **Preemptive (SRTF)**: every time unit, run the arrived process with
//!   the smallest remaining time.
//!
//! Ties go to the lowest process ID in both modes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::engine::Execute;
use super::selection::{run_to_completion, run_unit_steps};
use super::Scheduler;
use crate::models::{Process, Timeline};

/// Shortest-Job-First policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestJobFirst {
    preemptive: bool,
}

impl ShortestJobFirst {
    /// Run-to-completion variant.
    pub const NON_PREEMPTIVE: Self = Self { preemptive: false };

    /// Shortest-Remaining-Time-First variant.
    pub const PREEMPTIVE: Self = Self { preemptive: true };

    /// Creates the policy.
    pub fn new(preemptive: bool) -> Self {
        Self { preemptive }
    }

    /// Whether this is the SRTF variant.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Scheduler for ShortestJobFirst {
    fn name(&self) -> String {
        if self.preemptive {
            "SJF (Preemptive - SRTF)".into()
        } else {
            "SJF (Non-Preemptive)".into()
        }
    }
}

impl Execute for ShortestJobFirst {
    fn execute(&self, processes: &mut [Process]) -> Timeline {
        if self.preemptive {
            run_unit_steps(processes, |p| p.remaining_time)
        } else {
            run_to_completion(processes, |p| p.burst_time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;

    fn textbook() -> Vec<Process> {
        vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 2),
        ]
    }

    #[test]
    fn test_sjf_non_preemptive_order() {
        let s = ShortestJobFirst::NON_PREEMPTIVE.schedule(&textbook()).unwrap();
        // P1 alone at t=0; at t=8 P3 (burst 2) beats P2 (burst 4)
        assert_eq!(
            s.timeline.slices(),
            &[
                ExecutionSlice::new(1, 0, 8),
                ExecutionSlice::new(3, 8, 10),
                ExecutionSlice::new(2, 10, 14),
            ]
        );
        assert_eq!(s.process(3).unwrap().waiting_time, Some(6));
        assert_eq!(s.process(2).unwrap().waiting_time, Some(9));
    }

    #[test]
    fn test_sjf_non_preemptive_tie_lowest_id() {
        let processes = vec![
            Process::new(4, 0, 3),
            Process::new(2, 0, 3),
            Process::new(3, 0, 1),
        ];
        let s = ShortestJobFirst::NON_PREEMPTIVE.schedule(&processes).unwrap();
        assert_eq!(s.timeline.process_order(), vec![3, 2, 4]);
    }

    #[test]
    fn test_sjf_non_preemptive_idle_picks_shortest_of_earliest() {
        // Nothing at t=0; at t=3 both P1 and P2 arrive, P2 is shorter
        let processes = vec![
            Process::new(1, 3, 5),
            Process::new(2, 3, 2),
            Process::new(3, 9, 1),
        ];
        let s = ShortestJobFirst::NON_PREEMPTIVE.schedule(&processes).unwrap();
        assert_eq!(
            s.timeline.slices(),
            &[
                ExecutionSlice::new(2, 3, 5),
                ExecutionSlice::new(1, 5, 10),
                ExecutionSlice::new(3, 10, 11),
            ]
        );
    }

    #[test]
    fn test_srtf_preempts() {
        let processes = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
        let s = ShortestJobFirst::PREEMPTIVE.schedule(&processes).unwrap();
        assert_eq!(
            s.timeline.slices(),
            &[
                ExecutionSlice::new(1, 0, 1),
                ExecutionSlice::new(2, 1, 5),
                ExecutionSlice::new(1, 5, 12),
            ]
        );
        assert_eq!(s.process(1).unwrap().completion_time, Some(12));
        assert_eq!(s.process(1).unwrap().waiting_time, Some(4));
        assert_eq!(s.process(2).unwrap().waiting_time, Some(0));
    }

    #[test]
    fn test_srtf_textbook() {
        let s = ShortestJobFirst::PREEMPTIVE.schedule(&textbook()).unwrap();
        // t1: P2(4) < P1(7); t2: P3(2) < P2(3); P3 done at 4, P2 at 7, P1 at 14
        assert_eq!(s.timeline.process_order(), vec![1, 2, 3, 2, 1]);
        assert_eq!(s.process(3).unwrap().completion_time, Some(4));
        assert_eq!(s.process(2).unwrap().completion_time, Some(7));
        assert_eq!(s.process(1).unwrap().completion_time, Some(14));
        assert_eq!(s.metrics.context_switches, 4);
    }

    #[test]
    fn test_srtf_idle_jump() {
        let processes = vec![Process::new(1, 0, 1), Process::new(2, 10, 2)];
        let s = ShortestJobFirst::PREEMPTIVE.schedule(&processes).unwrap();
        assert_eq!(
            s.timeline.slices(),
            &[ExecutionSlice::new(1, 0, 1), ExecutionSlice::new(2, 10, 12)]
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestJobFirst::NON_PREEMPTIVE.name(), "SJF (Non-Preemptive)");
        assert_eq!(ShortestJobFirst::PREEMPTIVE.name(), "SJF (Preemptive - SRTF)");
        assert!(ShortestJobFirst::new(true).is_preemptive());
    }
}
