//! CPU scheduling domain models.
//!
//! Provides the core data types produced and consumed by every policy:
//! the process record, the execution timeline and the schedule result.
//!
//! # Lifecycle
//!
//! | Type | Created by | Mutated by |
//! |------|-----------|------------|
//! | Process | caller | engine (on a working copy only) |
//! | Timeline | engine | the running policy |
//! | Schedule | engine | nobody (returned immutable) |

mod process;
mod schedule;
mod timeline;

pub use process::Process;
pub use schedule::Schedule;
pub use timeline::{ExecutionSlice, Timeline};
