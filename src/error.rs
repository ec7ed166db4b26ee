//! Lesson error types
use std::{error::Error, fmt::Display};

/// Result type used by the fallible lesson and deck entry points
pub type LessonResult<T> = std::result::Result<T, LessonError>;

/// Errors returned when the library is driven with values the UI controls would never produce.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonError {
    /// a numeric input lies outside its allowed range (or is not finite)
    InvalidParameter {
        /// name of the offending field
        field: &'static str,
        /// the rejected value
        value: f64,
        /// inclusive lower bound
        min: f64,
        /// inclusive upper bound
        max: f64,
    },
    /// deck settings could not be parsed
    Config(String),
}

impl Display for LessonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "InvalidParameter:{field}={value} (expected {min}..={max})")
            }
            Self::Config(m) => write!(f, "Config:{m}"),
        }
    }
}
impl Error for LessonError {}

impl From<serde_json::Error> for LessonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
