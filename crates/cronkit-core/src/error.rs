//! Cronkit error types.

use thiserror::Error;

/// Result alias used across the Cronkit crates.
pub type Result<T> = std::result::Result<T, CronError>;

/// Errors raised while merging ranges or generating cron expressions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CronError {
    /// A field expression rejected its arguments (wrong arity, out of bounds, too many repeats).
    #[error("Invalid arguments: {arguments:?}")]
    InvalidArguments { arguments: Vec<i32> },

    /// `Interval::merge` was called on two intervals that do not intersect.
    #[error("Cannot merge non-intersected ranges")]
    RangeNotIntersecting,

    /// A circular range endpoint is not part of its cycle.
    #[error("Element {element} is not part of the cycle")]
    ElementNotInCycle { element: String },

    /// An expression name that no variant of the field answers to.
    #[error("Unknown {field} expression '{name}'")]
    UnknownExpression { field: &'static str, name: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CronError {
    /// Build an `InvalidArguments` error from a borrowed argument list.
    pub fn invalid_arguments(arguments: &[i32]) -> Self {
        Self::InvalidArguments {
            arguments: arguments.to_vec(),
        }
    }
}
