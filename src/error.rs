//! Error types for the absence calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during absence calculation.
//!
//! Note that unparseable dates and malformed input rows are NOT errors in
//! this engine: they are skip decisions made during parsing and propagate
//! as data (fewer trips), never as an `Err`.

use thiserror::Error;

/// The main error type for the absence calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use absence_engine::error::EngineError;
///
/// let error = EngineError::NoTrips;
/// assert_eq!(error.to_string(), "no trips to evaluate");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Status calculation was requested for an empty trip list.
    ///
    /// This is the single fatal condition in the core: a status result
    /// references the chronologically last trip, which does not exist.
    #[error("no trips to evaluate")]
    NoTrips,

    /// A configuration field failed caller-level validation.
    #[error("invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An explicitly supplied evaluation date could not be parsed.
    #[error("unable to parse date: {text}")]
    InvalidDate {
        /// The date text that failed to parse.
        text: String,
    },

    /// The trip input file could not be read.
    #[error("failed to read input file '{path}': {message}")]
    InputFile {
        /// The path that could not be read.
        path: String,
        /// A description of the read failure.
        message: String,
    },

    /// The JSON report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
