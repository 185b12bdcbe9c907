//! Multilevel Queue scheduling.
//!
//! Three fixed bands, each a FIFO queue with its own quantum:
//!
//! | Band | Priorities | Default quantum |
//! |------|-----------|-----------------|
//! | 0 (system) | ≤ 1 | 2 |
//! | 1 (interactive) | 2..=4 | 4 |
//! | 2 (batch) | ≥ 5 | 8 |
//!
//! Bands are served in strict priority order; a lower band only runs when
//! every higher band is empty. Within a band, processes round-robin with the
//! band's quantum and are re-enqueued in their own band (no promotion or
//! demotion). A slice is never cut short by a higher-band arrival.

use std::collections::VecDeque;

use super::engine::Execute;
use super::selection::ArrivalQueue;
use super::Scheduler;
use crate::config::{check_quanta, DEFAULT_MULTILEVEL_QUANTA};
use crate::error::Result;
use crate::models::{Process, Timeline};

/// Number of priority bands.
pub const BAND_COUNT: usize = 3;

/// Band for a priority value. Negative priorities belong to the top band.
pub fn band_for_priority(priority: i32) -> usize {
    match priority {
        i32::MIN..=1 => 0,
        2..=4 => 1,
        _ => 2,
    }
}

/// Multilevel Queue policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultilevelQueue {
    quanta: [i64; BAND_COUNT],
}

impl MultilevelQueue {
    /// Creates the policy with per-band quanta, highest band first.
    ///
    /// # Errors
    /// `InvalidParameter` if any quantum is not positive.
    pub fn new(quanta: [i64; BAND_COUNT]) -> Result<Self> {
        check_quanta(&quanta)?;
        Ok(Self { quanta })
    }

    /// Per-band quanta.
    pub fn quanta(&self) -> [i64; BAND_COUNT] {
        self.quanta
    }
}

impl Default for MultilevelQueue {
    fn default() -> Self {
        Self {
            quanta: DEFAULT_MULTILEVEL_QUANTA,
        }
    }
}

impl Scheduler for MultilevelQueue {
    fn name(&self) -> String {
        let [q0, q1, q2] = self.quanta;
        format!("Multilevel Queue (TQ={q0}/{q1}/{q2})")
    }
}

impl Execute for MultilevelQueue {
    fn execute(&self, processes: &mut [Process]) -> Timeline {
        for p in processes.iter_mut() {
            p.band = Some(band_for_priority(p.priority));
        }

        let mut timeline = Timeline::new();
        let mut arrivals = ArrivalQueue::new(processes);
        let mut bands: [VecDeque<usize>; BAND_COUNT] = Default::default();
        let mut clock = 0;

        loop {
            admit(&mut arrivals, processes, clock, &mut bands);

            let next = bands
                .iter_mut()
                .enumerate()
                .find_map(|(band, queue)| queue.pop_front().map(|idx| (band, idx)));

            let Some((band, idx)) = next else {
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
            let slice = p.remaining_time.min(self.quanta[band]);
            p.run(start, slice);
            clock += slice;
            timeline.push(p.id, start, clock);
            log::trace!("band {band}: P{} ran {start}..{clock}", p.id);

            let finished = p.remaining_time == 0;
            if finished {
                p.complete(clock);
            }

            admit(&mut arrivals, processes, clock, &mut bands);
            if !finished {
                bands[band].push_back(idx);
            }
        }

        timeline
    }
}

fn admit(
    arrivals: &mut ArrivalQueue,
    processes: &[Process],
    clock: i64,
    bands: &mut [VecDeque<usize>; BAND_COUNT],
) {
    while let Some(idx) = arrivals.pop_arrived(processes, clock) {
        bands[band_for_priority(processes[idx].priority)].push_back(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::models::ExecutionSlice;

    #[test]
    fn test_band_assignment() {
        assert_eq!(band_for_priority(-2), 0);
        assert_eq!(band_for_priority(0), 0);
        assert_eq!(band_for_priority(1), 0);
        assert_eq!(band_for_priority(2), 1);
        assert_eq!(band_for_priority(4), 1);
        assert_eq!(band_for_priority(5), 2);
        assert_eq!(band_for_priority(99), 2);
    }

    #[test]
    fn test_multilevel_strict_band_priority() {
        let processes = vec![
            Process::new(1, 0, 10).with_priority(6),
            Process::new(2, 0, 3).with_priority(0),
            Process::new(3, 0, 4).with_priority(3),
        ];
        let s = MultilevelQueue::default().schedule(&processes).unwrap();
        assert_eq!(
            s.timeline.slices(),
            &[
                ExecutionSlice::new(2, 0, 2),
                ExecutionSlice::new(2, 2, 3),
                ExecutionSlice::new(3, 3, 7),
                ExecutionSlice::new(1, 7, 15),
                ExecutionSlice::new(1, 15, 17),
            ]
        );
    }

    #[test]
    fn test_multilevel_high_band_arrival_waits_for_slice_boundary() {
        // P2 (band 0) arrives mid-slice and runs at the next decision point
        let processes = vec![
            Process::new(1, 0, 12).with_priority(5),
            Process::new(2, 3, 2).with_priority(0),
        ];
        let s = MultilevelQueue::default().schedule(&processes).unwrap();
        assert_eq!(
            s.timeline.slices(),
            &[
                ExecutionSlice::new(1, 0, 8),
                ExecutionSlice::new(2, 8, 10),
                ExecutionSlice::new(1, 10, 14),
            ]
        );
    }

    #[test]
    fn test_multilevel_round_robin_within_band() {
        let processes = vec![
            Process::new(1, 0, 4).with_priority(0),
            Process::new(2, 0, 3).with_priority(1),
        ];
        let s = MultilevelQueue::default().schedule(&processes).unwrap();
        assert_eq!(s.timeline.process_order(), vec![1, 2, 1, 2]);
        assert_eq!(s.process(1).unwrap().completion_time, Some(6));
        assert_eq!(s.process(2).unwrap().completion_time, Some(7));
    }

    #[test]
    fn test_multilevel_records_band() {
        let processes = vec![
            Process::new(1, 0, 1).with_priority(3),
            Process::new(2, 0, 1).with_priority(7),
        ];
        let s = MultilevelQueue::default().schedule(&processes).unwrap();
        assert_eq!(s.process(1).unwrap().band, Some(1));
        assert_eq!(s.process(2).unwrap().band, Some(2));
    }

    #[test]
    fn test_multilevel_idle_creates_no_slice() {
        let processes = vec![
            Process::new(1, 0, 1).with_priority(0),
            Process::new(2, 5, 1).with_priority(0),
        ];
        let s = MultilevelQueue::default().schedule(&processes).unwrap();
        assert_eq!(s.timeline.len(), 2);
        assert_eq!(s.timeline.slices()[1], ExecutionSlice::new(2, 5, 6));
        assert_eq!(s.metrics.idle_time, 4);
    }

    #[test]
    fn test_multilevel_custom_quanta() {
        let mlq = MultilevelQueue::new([1, 1, 1]).unwrap();
        assert_eq!(mlq.name(), "Multilevel Queue (TQ=1/1/1)");
        let s = mlq.schedule(&[Process::new(1, 0, 3)]).unwrap();
        assert_eq!(s.timeline.len(), 3);
    }

    #[test]
    fn test_multilevel_rejects_bad_quanta() {
        assert!(matches!(
            MultilevelQueue::new([2, 0, 8]),
            Err(ScheduleError::InvalidParameter(_))
        ));
    }
}
