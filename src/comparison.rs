//! Side-by-side policy comparison.
//!
//! Runs several policies over the same process set (each on its own
//! working copies) and ranks the resulting schedules.

use std::cmp::Ordering;
use std::fmt::Write as _;

use crate::error::Result;
use crate::models::{Process, Schedule};
use crate::policy::{Policy, Scheduler};

/// Schedules produced by running several policies on one process set.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    schedules: Vec<Schedule>,
}

/// Runs every policy over `processes`.
///
/// # Errors
/// The first error returned by any policy (input errors are identical for
/// every policy, so the first run reports them).
pub fn compare(processes: &[Process], policies: &[Policy]) -> Result<Comparison> {
    let schedules = policies
        .iter()
        .map(|policy| policy.schedule(processes))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("compared {} policies", schedules.len());
    Ok(Comparison { schedules })
}

impl Comparison {
    /// Schedules in policy order.
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Ascending by average waiting time. Ties keep policy order.
    pub fn rank_by_waiting_time(&self) -> Vec<&Schedule> {
        self.ranked(|a, b| cmp_f64(a.average_waiting_time(), b.average_waiting_time()))
    }

    /// Ascending by average turnaround time. Ties keep policy order.
    pub fn rank_by_turnaround_time(&self) -> Vec<&Schedule> {
        self.ranked(|a, b| {
            cmp_f64(a.average_turnaround_time(), b.average_turnaround_time())
        })
    }

    /// Descending by CPU utilization. Ties keep policy order.
    pub fn rank_by_cpu_utilization(&self) -> Vec<&Schedule> {
        self.ranked(|a, b| cmp_f64(b.cpu_utilization(), a.cpu_utilization()))
    }

    /// Schedule with the lowest average waiting time.
    pub fn best_waiting_time(&self) -> Option<&Schedule> {
        self.rank_by_waiting_time().first().copied()
    }

    /// Schedule with the lowest average turnaround time.
    pub fn best_turnaround_time(&self) -> Option<&Schedule> {
        self.rank_by_turnaround_time().first().copied()
    }

    /// Schedule with the highest CPU utilization.
    pub fn best_cpu_utilization(&self) -> Option<&Schedule> {
        self.rank_by_cpu_utilization().first().copied()
    }

    /// Plain-text metrics table, one row per policy.
    pub fn summary_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<40} | {:>16} | {:>15} | {:>10}",
            "Policy", "Avg Waiting Time", "Avg Turnaround", "CPU Util %"
        );
        let _ = writeln!(out, "{}", "-".repeat(90));
        for s in &self.schedules {
            let _ = writeln!(
                out,
                "{:<40} | {:>16.2} | {:>15.2} | {:>10.2}",
                s.policy,
                s.average_waiting_time(),
                s.average_turnaround_time(),
                s.cpu_utilization()
            );
        }
        out
    }

    /// Per-policy blocks with the three averages and one detail line per
    /// process, in input order.
    ///
    /// ```text
    /// ┌─ FCFS (First Come First Served) ──────────
    /// │ Average Waiting Time:    5.67
    /// │ Average Turnaround Time: 10.33
    /// │ CPU Utilization:         100.00%
    /// │
    /// │ Process Details:
    /// │   P1 | Arrival: 0 | Burst: 8 | Priority: 0 | WT: 0 | TAT: 8
    /// └──────────────────────────────────────────
    /// ```
    pub fn detailed_report(&self) -> String {
        let mut out = String::new();
        for s in &self.schedules {
            let _ = writeln!(out, "┌─ {} {}", s.policy, "─".repeat(40));
            let _ = writeln!(out, "│ Average Waiting Time:    {:.2}", s.average_waiting_time());
            let _ = writeln!(out, "│ Average Turnaround Time: {:.2}", s.average_turnaround_time());
            let _ = writeln!(out, "│ CPU Utilization:         {:.2}%", s.cpu_utilization());
            out.push_str("│\n│ Process Details:\n");
            for p in &s.processes {
                let _ = writeln!(out, "│   {p}");
            }
            let _ = writeln!(out, "└{}\n", "─".repeat(60));
        }
        out
    }

    fn ranked<F>(&self, cmp: F) -> Vec<&Schedule>
    where
        F: Fn(&Schedule, &Schedule) -> Ordering,
    {
        let mut ranked: Vec<&Schedule> = self.schedules.iter().collect();
        ranked.sort_by(|a, b| cmp(a, b));
        ranked
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
