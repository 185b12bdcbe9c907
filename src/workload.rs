//! Sample and random process sets.
//!
//! Canonical datasets for demos and tests, plus a seeded generator for
//! random workloads. Generation is deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::Process;

/// Five processes with mixed arrivals and priorities.
pub fn sample_basic() -> Vec<Process> {
    vec![
        Process::new(1, 0, 8).with_priority(2),
        Process::new(2, 1, 4).with_priority(1),
        Process::new(3, 2, 2).with_priority(3),
        Process::new(4, 3, 1).with_priority(2),
        Process::new(5, 4, 3).with_priority(1),
    ]
}

/// Four processes with staggered arrivals.
pub fn sample_mixed() -> Vec<Process> {
    vec![
        Process::new(1, 0, 3).with_priority(1),
        Process::new(2, 1, 6).with_priority(2),
        Process::new(3, 2, 4).with_priority(1),
        Process::new(4, 3, 2).with_priority(3),
    ]
}

/// Five processes where priority dominates the outcome.
pub fn sample_priority() -> Vec<Process> {
    vec![
        Process::new(1, 0, 5).with_priority(3),
        Process::new(2, 0, 3).with_priority(1),
        Process::new(3, 1, 4).with_priority(2),
        Process::new(4, 2, 2).with_priority(1),
        Process::new(5, 3, 3).with_priority(3),
    ]
}

/// Bounds for random workload generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomWorkload {
    /// Number of processes (ids `1..=count`).
    pub count: u32,
    /// Largest arrival time.
    pub max_arrival: i64,
    /// Largest burst time (bursts start at 1).
    pub max_burst: i64,
    /// Largest priority value (priorities start at 0).
    pub max_priority: i32,
}

impl Default for RandomWorkload {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 7,
        }
    }
}

impl RandomWorkload {
    /// Checks that the bounds describe at least one valid process.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(ScheduleError::InvalidParameter(
                "workload count must be positive".into(),
            ));
        }
        if self.max_burst < 1 {
            return Err(ScheduleError::InvalidParameter(format!(
                "max burst must be at least 1, got {}",
                self.max_burst
            )));
        }
        if self.max_arrival < 0 || self.max_priority < 0 {
            return Err(ScheduleError::InvalidParameter(
                "max arrival and max priority must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Generates a random process set.
///
/// # Errors
/// `InvalidParameter` if the bounds are invalid.
pub fn random_processes(bounds: &RandomWorkload, seed: u64) -> Result<Vec<Process>> {
    bounds.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);

    let processes = (1..=bounds.count)
        .map(|id| {
            let arrival = rng.random_range(0..=bounds.max_arrival);
            let burst = rng.random_range(1..=bounds.max_burst);
            let priority = rng.random_range(0..=bounds.max_priority);
            Process::new(id, arrival, burst).with_priority(priority)
        })
        .collect();

    Ok(processes)
}
