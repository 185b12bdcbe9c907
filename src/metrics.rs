//! Schedule performance metrics.
//!
//! Computes aggregate indicators from a finished process set and the
//! timeline that produced it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Σ waiting / n |
//! | Avg Turnaround Time | Σ turnaround / n |
//! | CPU Utilization | Σ burst / makespan × 100 |
//! | Avg Response Time | Σ (first dispatch - arrival) / n |
//! | Throughput | n / makespan |
//! | Idle Time | makespan - busy time |
//! | Context Switches | adjacent slices with different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{Process, Timeline};

/// Aggregate performance indicators of one schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean time from arrival to first dispatch.
    pub average_response_time: f64,
    /// Busy fraction of the makespan, in percent (0..=100).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// End of the last timeline slice.
    pub makespan: i64,
    /// Sum of burst times.
    pub total_burst_time: i64,
    /// Time within the makespan with no process running.
    pub idle_time: i64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from completed processes and their timeline.
    ///
    /// # Errors
    /// [`ScheduleError::DegenerateMetrics`] if `processes` is empty or the
    /// timeline ends at 0. Incomplete processes count as zero waiting and
    /// turnaround; the engine never hands them over.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Result<Self> {
        let makespan = timeline.end_time();
        if processes.is_empty() || makespan <= 0 {
            return Err(ScheduleError::DegenerateMetrics);
        }

        // Per-process times are bounded by the horizon; their sums are not.
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;
        let mut total_burst: i128 = 0;

        for p in processes {
            total_waiting += i128::from(p.waiting_time.unwrap_or(0));
            total_turnaround += i128::from(p.turnaround_time.unwrap_or(0));
            total_response += i128::from(p.response_time().unwrap_or(0));
            total_burst += i128::from(p.burst_time);
        }

        let n = processes.len() as f64;

        Ok(Self {
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
            average_response_time: total_response as f64 / n,
            cpu_utilization: total_burst as f64 / makespan as f64 * 100.0,
            throughput: n / makespan as f64,
            makespan,
            total_burst_time: i64::try_from(total_burst).unwrap_or(i64::MAX),
            idle_time: timeline.idle_time(),
            context_switches: timeline.context_switches(),
        })
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_average_waiting: f64, min_utilization: f64) -> bool {
        self.average_waiting_time <= max_average_waiting
            && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: u32, arrival: i64, burst: i64, start: i64, completion: i64) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.run(start, burst);
        p.complete(completion);
        p
    }

    #[test]
    fn test_metrics_basic() {
        // P1 0..4, P2 4..7 (arrived at 1)
        let processes = vec![completed(1, 0, 4, 0, 4), completed(2, 1, 3, 4, 7)];
        let mut timeline = Timeline::new();
        timeline.push(1, 0, 4);
        timeline.push(2, 4, 7);

        let m = ScheduleMetrics::calculate(&processes, &timeline).unwrap();
        assert!((m.average_waiting_time - 1.5).abs() < 1e-10); // (0 + 3) / 2
        assert!((m.average_turnaround_time - 5.0).abs() < 1e-10); // (4 + 6) / 2
        assert!((m.average_response_time - 1.5).abs() < 1e-10);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
        assert!((m.throughput - 2.0 / 7.0).abs() < 1e-10);
        assert_eq!(m.makespan, 7);
        assert_eq!(m.total_burst_time, 7);
        assert_eq!(m.idle_time, 0);
        assert_eq!(m.context_switches, 1);
    }

    #[test]
    fn test_metrics_with_idle_gap() {
        // P1 0..2, idle 2..6, P2 6..8
        let processes = vec![completed(1, 0, 2, 0, 2), completed(2, 6, 2, 6, 8)];
        let mut timeline = Timeline::new();
        timeline.push(1, 0, 2);
        timeline.push(2, 6, 8);

        let m = ScheduleMetrics::calculate(&processes, &timeline).unwrap();
        assert!((m.cpu_utilization - 50.0).abs() < 1e-10);
        assert_eq!(m.idle_time, 4);
        assert!((m.average_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty_processes() {
        let mut timeline = Timeline::new();
        timeline.push(1, 0, 1);
        assert_eq!(
            ScheduleMetrics::calculate(&[], &timeline),
            Err(ScheduleError::DegenerateMetrics)
        );
    }

    #[test]
    fn test_metrics_zero_length_timeline() {
        let processes = vec![Process::new(1, 0, 1)];
        assert_eq!(
            ScheduleMetrics::calculate(&processes, &Timeline::new()),
            Err(ScheduleError::DegenerateMetrics)
        );
    }

    #[test]
    fn test_metrics_large_times_do_not_overflow() {
        // Turnarounds sum to 1.5 * i64::MAX
        let q = i64::MAX / 4;
        let processes = vec![
            completed(1, 0, q, 0, q),
            completed(2, 0, q, q, 2 * q),
            completed(3, 0, q, 2 * q, 3 * q),
        ];
        let mut timeline = Timeline::new();
        timeline.push(1, 0, q);
        timeline.push(2, q, 2 * q);
        timeline.push(3, 2 * q, 3 * q);

        let m = ScheduleMetrics::calculate(&processes, &timeline).unwrap();
        assert_eq!(m.total_burst_time, 3 * q);
        assert!((m.average_turnaround_time / (2 * q) as f64 - 1.0).abs() < 1e-10);
        assert!((m.average_waiting_time / q as f64 - 1.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let m = ScheduleMetrics {
            average_waiting_time: 3.0,
            cpu_utilization: 80.0,
            ..Default::default()
        };
        assert!(m.meets_thresholds(3.0, 80.0));
        assert!(!m.meets_thresholds(2.9, 0.0));
        assert!(!m.meets_thresholds(10.0, 90.0));
    }
}
