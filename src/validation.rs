//! Input validation for process sets.
//!
//! Checks the integrity of a process set before any policy runs.
//! Detects:
//! - Zero process IDs
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Sets whose last possible completion time does not fit in `i64`
//!
//! All problems are collected so the caller can decide whether to drop the
//! offending processes or abort.

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error attached to one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process ID.
    pub process_id: u32,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Process ID is zero (IDs must be positive).
    ZeroId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Latest arrival plus total burst exceeds the time range.
    HorizonOverflow,
}

impl ValidationError {
    pub(crate) fn new(
        kind: ValidationErrorKind,
        process_id: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            process_id,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks, per process:
/// 1. ID is positive
/// 2. ID not seen earlier in the set
/// 3. Arrival time ≥ 0
/// 4. Burst time > 0
///
/// and, for the whole set, that the latest arrival plus the sum of all
/// bursts fits in `i64`. No schedule can end later than that horizon, so
/// simulation clocks never overflow on accepted input.
///
/// An empty set is valid here; emptiness is reported by the engine as
/// [`ScheduleError::EmptyInput`].
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroId,
                p.id,
                "Process ID must be positive, got 0",
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                p.id,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                p.id,
                format!("P{} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                p.id,
                format!("P{} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if let Some(error) = check_horizon(processes) {
        errors.push(error);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports the process whose burst first pushes the horizon past `i64::MAX`.
fn check_horizon(processes: &[Process]) -> Option<ValidationError> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);

    let mut horizon = latest_arrival;
    for p in processes {
        match horizon.checked_add(p.burst_time.max(0)) {
            Some(next) => horizon = next,
            None => {
                return Some(ValidationError::new(
                    ValidationErrorKind::HorizonOverflow,
                    p.id,
                    format!(
                        "P{} pushes the schedule horizon past {} (latest arrival {latest_arrival})",
                        p.id,
                        i64::MAX
                    ),
                ))
            }
        }
    }
    None
}

/// Full precondition check used by the engine before a run.
pub(crate) fn check_input(processes: &[Process]) -> Result<(), ScheduleError> {
    if processes.is_empty() {
        log::warn!("rejecting empty process set");
        return Err(ScheduleError::EmptyInput);
    }
    validate_processes(processes).map_err(|errors| {
        log::warn!("rejecting process set: {} validation error(s)", errors.len());
        ScheduleError::InvalidProcess(errors)
    })
}
