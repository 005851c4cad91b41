use thiserror::Error;

/// Errors raised while building intervals.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Cannot build an interval from an empty set of values")]
    EmptyInput,
}

/// Result type for interval construction.
pub type IntervalResult<T> = Result<T, IntervalError>;
