//! Execution timeline.
//!
//! A timeline is the ordered list of slices during which some process held
//! the CPU. Idle time is never stored: a gap shows up as a slice whose
//! `start` is later than the previous slice's `end`. All policies share this
//! convention.

use serde::{Deserialize, Serialize};

/// A contiguous interval during which one process ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that ran.
    pub process_id: u32,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a slice.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered, non-overlapping execution slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new slice, even if the same process ran immediately before.
    pub fn push(&mut self, process_id: u32, start: i64, end: i64) {
        debug_assert!(start < end, "empty slice for P{process_id}");
        debug_assert!(
            self.end_time() <= start,
            "slice for P{process_id} overlaps the previous one"
        );
        self.slices.push(ExecutionSlice::new(process_id, start, end));
    }

    /// Records one time unit of execution at `at`.
    ///
    /// Extends the last slice when the same process ran the previous unit
    /// without a gap; otherwise opens a new slice.
    pub fn run_unit(&mut self, process_id: u32, at: i64) {
        match self.slices.last_mut() {
            Some(last) if last.process_id == process_id && last.end == at => last.end += 1,
            _ => self.push(process_id, at, at + 1),
        }
    }

    /// All slices in time order.
    pub fn slices(&self) -> &[ExecutionSlice] {
        &self.slices
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End of the last slice (0 for an empty timeline).
    pub fn end_time(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total time during which some process ran.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// Time between t=0 and `end_time()` with no process running.
    pub fn idle_time(&self) -> i64 {
        self.end_time() - self.busy_time()
    }

    /// Number of adjacent slice pairs that switch to a different process.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, process_id: u32) -> Vec<&ExecutionSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// First dispatch time of a process.
    pub fn first_start(&self, process_id: u32) -> Option<i64> {
        self.slices
            .iter()
            .find(|s| s.process_id == process_id)
            .map(|s| s.start)
    }

    /// Process ids in dispatch order (one entry per slice).
    pub fn process_order(&self) -> Vec<u32> {
        self.slices.iter().map(|s| s.process_id).collect()
    }

    /// Whether every slice is non-empty and starts no earlier than the
    /// previous one ends.
    pub fn is_well_formed(&self) -> bool {
        self.slices.iter().all(|s| s.start < s.end)
            && self.slices.windows(2).all(|w| w[0].end <= w[1].start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(1, 0, 3);
        t.push(2, 3, 5);
        t.push(1, 7, 9); // idle 5..7
        t
    }

    #[test]
    fn test_slice_duration() {
        assert_eq!(ExecutionSlice::new(1, 4, 10).duration(), 6);
    }

    #[test]
    fn test_timeline_totals() {
        let t = sample_timeline();
        assert_eq!(t.len(), 3);
        assert_eq!(t.end_time(), 9);
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.context_switches(), 2);
        assert!(t.is_well_formed());
    }

    #[test]
    fn test_run_unit_extends_same_process() {
        let mut t = Timeline::new();
        t.run_unit(1, 0);
        t.run_unit(1, 1);
        t.run_unit(2, 2);
        t.run_unit(1, 3);
        assert_eq!(
            t.slices(),
            &[
                ExecutionSlice::new(1, 0, 2),
                ExecutionSlice::new(2, 2, 3),
                ExecutionSlice::new(1, 3, 4),
            ]
        );
    }

    #[test]
    fn test_run_unit_after_gap_opens_new_slice() {
        let mut t = Timeline::new();
        t.run_unit(1, 0);
        t.run_unit(1, 4);
        assert_eq!(t.len(), 2);
        assert_eq!(t.idle_time(), 3);
    }

    #[test]
    fn test_push_keeps_adjacent_same_process_separate() {
        let mut t = Timeline::new();
        t.push(1, 0, 4);
        t.push(1, 4, 8);
        assert_eq!(t.len(), 2);
        assert_eq!(t.context_switches(), 0);
    }

    #[test]
    fn test_queries() {
        let t = sample_timeline();
        assert_eq!(t.slices_for(1).len(), 2);
        assert_eq!(t.first_start(2), Some(3));
        assert_eq!(t.first_start(9), None);
        assert_eq!(t.process_order(), vec![1, 2, 1]);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.end_time(), 0);
        assert_eq!(t.idle_time(), 0);
        assert_eq!(t.context_switches(), 0);
        assert!(t.is_well_formed());
    }
}
