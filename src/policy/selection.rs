//! Shared dispatch loops and selection helpers.
//!
//! The shortest-job and priority policies differ only in the key they
//! minimize, so both run on the same two loops: run-to-completion
//! (non-preemptive) and unit-step (preemptive). Ties on the key always go
//! to the lowest process ID.

use crate::models::{Process, Timeline};

/// Index of the arrived, unfinished process with the smallest `key`.
///
/// Ties are broken by lowest process ID.
pub(crate) fn select_min<K, F>(processes: &[Process], now: i64, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_completed() && p.has_arrived(now))
        .min_by_key(|(_, p)| (key(p), p.id))
        .map(|(idx, _)| idx)
}

/// Earliest arrival time among unfinished processes.
pub(crate) fn next_arrival(processes: &[Process]) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_completed())
        .map(|p| p.arrival_time)
        .min()
}

/// Non-preemptive loop: at each decision point pick the best arrived
/// process by `key` and run it to completion.
///
/// When nothing has arrived the clock jumps to the earliest pending arrival
/// and selection is repeated, so ties among simultaneous arrivals are also
/// decided by `key`.
pub(crate) fn run_to_completion<K, F>(processes: &mut [Process], key: F) -> Timeline
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut timeline = Timeline::new();
    let mut clock = 0;

    loop {
        let Some(idx) = select_min(processes, clock, &key) else {
            match next_arrival(processes) {
                Some(arrival) => {
                    log::trace!("cpu idle {clock}..{arrival}");
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        let p = &mut processes[idx];
        let start = clock;
        let burst = p.remaining_time;
        p.run(start, burst);
        clock += burst;
        p.complete(clock);
        timeline.push(p.id, start, clock);
        log::trace!("P{} ran {start}..{clock} to completion", p.id);
    }

    timeline
}

/// Preemptive loop: every time unit, pick the best arrived process by `key`
/// and run it for exactly one unit.
///
/// Slices are derived from the running process changing between units.
/// Idle stretches are skipped by jumping to the next arrival.
pub(crate) fn run_unit_steps<K, F>(processes: &mut [Process], key: F) -> Timeline
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut timeline = Timeline::new();
    let mut clock = 0;

    loop {
        let Some(idx) = select_min(processes, clock, &key) else {
            match next_arrival(processes) {
                Some(arrival) => {
                    log::trace!("cpu idle {clock}..{arrival}");
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        let p = &mut processes[idx];
        p.run(clock, 1);
        timeline.run_unit(p.id, clock);
        clock += 1;

        if p.remaining_time == 0 {
            p.complete(clock);
            log::trace!("P{} completed at {clock}", p.id);
        }
    }

    timeline
}

/// Processes in arrival order, fed to FIFO-style policies as the clock
/// advances. Equal arrival times keep input order.
#[derive(Debug, Clone)]
pub(crate) struct ArrivalQueue {
    order: Vec<usize>,
    cursor: usize,
}

impl ArrivalQueue {
    pub(crate) fn new(processes: &[Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&idx| processes[idx].arrival_time);
        Self { order, cursor: 0 }
    }

    /// Next not-yet-admitted process that has arrived by `clock`.
    pub(crate) fn pop_arrived(&mut self, processes: &[Process], clock: i64) -> Option<usize> {
        let &idx = self.order.get(self.cursor)?;
        if processes[idx].has_arrived(clock) {
            self.cursor += 1;
            Some(idx)
        } else {
            None
        }
    }

    /// Arrival time of the next not-yet-admitted process.
    pub(crate) fn next_arrival_time(&self, processes: &[Process]) -> Option<i64> {
        self.order
            .get(self.cursor)
            .map(|&idx| processes[idx].arrival_time)
    }
}

impl Iterator for ArrivalQueue {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let idx = self.order.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(idx)
    }
}
