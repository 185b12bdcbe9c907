//! Error types for the scheduling engine.
//!
//! Every failure is reported before a simulation starts (input and parameter
//! checks) or while finalizing metrics. A failed call never yields a partial
//! [`Schedule`](crate::models::Schedule).

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the scheduling engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The process set has no entries.
    #[error("process set is empty")]
    EmptyInput,

    /// One or more processes failed validation (one entry per problem).
    #[error("invalid process set: {}", summarize(.0))]
    InvalidProcess(Vec<ValidationError>),

    /// Metrics requested for zero processes or a zero-length timeline.
    #[error("metrics are undefined for an empty or zero-length schedule")]
    DegenerateMetrics,

    /// The policy selector does not name a known policy.
    #[error("unknown scheduling policy '{0}'")]
    UnknownPolicy(String),

    /// A policy parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_messages() {
        assert_eq!(ScheduleError::EmptyInput.to_string(), "process set is empty");
        assert_eq!(
            ScheduleError::UnknownPolicy("LOTTERY".into()).to_string(),
            "unknown scheduling policy 'LOTTERY'"
        );
        assert_eq!(
            ScheduleError::InvalidParameter("time quantum must be positive, got 0".into())
                .to_string(),
            "invalid parameter: time quantum must be positive, got 0"
        );
    }

    #[test]
    fn test_invalid_process_joins_messages() {
        let err = ScheduleError::InvalidProcess(vec![
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, 1, "P1: burst 0"),
            ValidationError::new(ValidationErrorKind::DuplicateId, 1, "P1: duplicate"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process set: P1: burst 0; P1: duplicate"
        );
    }
}
