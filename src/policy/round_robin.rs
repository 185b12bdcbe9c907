//! Round Robin.
//!
//! FIFO ready queue with a fixed time quantum. After each slice, processes
//! that arrived during it join the queue before the preempted process is
//! re-enqueued at the back.

use std::collections::VecDeque;

use super::engine::Execute;
use super::selection::ArrivalQueue;
use super::Scheduler;
use crate::config::{check_quantum, DEFAULT_TIME_QUANTUM};
use crate::error::Result;
use crate::models::{Process, Timeline};

/// Round Robin policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates the policy.
    ///
    /// # Errors
    /// `InvalidParameter` if `quantum` is not positive.
    pub fn new(quantum: i64) -> Result<Self> {
        check_quantum("time quantum", quantum)?;
        Ok(Self { quantum })
    }

    /// Time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_TIME_QUANTUM,
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> String {
        format!("Round Robin (TQ={})", self.quantum)
    }
}

impl Execute for RoundRobin {
    fn execute(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut arrivals = ArrivalQueue::new(processes);
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut clock = 0;

        loop {
            while let Some(idx) = arrivals.pop_arrived(processes, clock) {
                ready.push_back(idx);
            }

            let Some(idx) = ready.pop_front() else {
                match arrivals.next_arrival_time(processes) {
                    Some(arrival) => {
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let p = &mut processes[idx];
            let start = clock;
            let slice = p.remaining_time.min(self.quantum);
            p.run(start, slice);
            clock += slice;
            timeline.push(p.id, start, clock);
            log::trace!("P{} ran {start}..{clock}, {} left", p.id, p.remaining_time);

            let finished = p.remaining_time == 0;
            if finished {
                p.complete(clock);
            }

            // Arrivals during the slice queue ahead of the preempted process.
            while let Some(arrived) = arrivals.pop_arrived(processes, clock) {
                ready.push_back(arrived);
            }
            if !finished {
                ready.push_back(idx);
            }
        }

        timeline
    }
}
