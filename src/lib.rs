//! CPU scheduling policy engine.
//!
//! Computes, for a fixed batch of CPU-bound processes, the execution
//! timeline and performance metrics produced by a chosen scheduling policy.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionSlice`, `Timeline`, `Schedule`
//! - **`policy`**: `Scheduler` trait, the seven policies and the `Policy` selector
//! - **`metrics`**: Waiting/turnaround averages, CPU utilization and related KPIs
//! - **`validation`**: Input integrity checks (ids, arrivals, bursts)
//! - **`config`**: Policy parameters (time quanta)
//! - **`comparison`**: Running and ranking several policies on one process set
//! - **`gantt`**: ASCII Gantt chart rendering
//! - **`workload`**: Sample datasets and a seeded random generator
//!
//! # Policies
//!
//! | Selector | Policy | Preemptive |
//! |----------|--------|------------|
//! | `FCFS` | First-Come-First-Served | no |
//! | `SJF-NP` | Shortest-Job-First | no |
//! | `SJF-P` | Shortest-Remaining-Time-First | yes |
//! | `PRIORITY-NP` | Static priority | no |
//! | `PRIORITY-P` | Static priority | yes |
//! | `ROUND-ROBIN` | Round Robin (quantum 4) | yes |
//! | `MULTILEVEL` | Three-band multilevel queue (2/4/8) | yes |
//!
//! # Example
//!
//! ```
//! use cpu_schedule::{schedule, PolicyParams};
//! use cpu_schedule::models::Process;
//!
//! let processes = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
//! let result = schedule(&processes, "SJF-P", &PolicyParams::default()).unwrap();
//!
//! assert_eq!(result.timeline.process_order(), vec![1, 2, 1]);
//! assert_eq!(result.cpu_utilization(), 100.0);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod comparison;
pub mod config;
pub mod error;
pub mod gantt;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod validation;
pub mod workload;

pub use config::PolicyParams;
pub use error::{Result, ScheduleError};
pub use policy::{schedule, Policy, Scheduler};
