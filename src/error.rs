use crate::models::WorkoutKind;

/// Errors raised while turning a sensor package into a workout.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WorkoutError {
    /// The sensor code does not name a known workout type.
    #[error("unsupported workout type: {0}")]
    UnsupportedWorkoutType(String),

    /// The package carries the wrong number of values for its workout type.
    #[error("{kind} expects {expected} values, got {actual}")]
    InvalidArgumentCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A value is out of range for its field (e.g. non-positive duration).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
