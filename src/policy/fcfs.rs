//! First-Come-First-Served.
//!
//! Runs processes to completion in arrival order (stable on ties). The
//! clock jumps forward when the next process has not yet arrived, leaving
//! an idle gap in the timeline.

use super::engine::Execute;
use super::selection::ArrivalQueue;
use super::Scheduler;
use crate::models::{Process, Timeline};

/// First-Come-First-Served policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> String {
        "FCFS (First Come First Served)".into()
    }
}

impl Execute for Fcfs {
    fn execute(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock = 0;

        for idx in ArrivalQueue::new(processes) {
            let p = &mut processes[idx];
            if p.arrival_time > clock {
                log::trace!("cpu idle {clock}..{}", p.arrival_time);
                clock = p.arrival_time;
            }
            let start = clock;
            let burst = p.burst_time;
            p.run(start, burst);
            clock += burst;
            p.complete(clock);
            timeline.push(p.id, start, clock);
        }

        timeline
    }
}
