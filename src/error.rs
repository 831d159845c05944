//! Error types for the Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the agreement
//! configuration or computing compensation.

use thiserror::Error;

/// The main error type for the Salary Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::SalaryNotFound { scale: 19, step: 0 };
/// assert_eq!(error.to_string(), "No salary found for scale 19, step 0");
/// assert!(error.is_not_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The salary table was parsed but violates its invariants.
    #[error("Invalid salary table: {message}")]
    InvalidSalaryTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// The requested scale/step combination is absent from the salary table.
    #[error("No salary found for scale {scale}, step {step}")]
    SalaryNotFound {
        /// The requested scale.
        scale: u32,
        /// The requested step.
        step: u32,
    },

    /// The requested scale is absent from the salary table.
    #[error("Scale not found: {scale}")]
    ScaleNotFound {
        /// The requested scale.
        scale: u32,
    },

    /// Contracted hours must be positive and fit in a week.
    #[error("Invalid contracted hours '{hours}': must be greater than zero and at most 168")]
    InvalidHours {
        /// The rejected hours value.
        hours: String,
    },
}

impl EngineError {
    /// Returns true for the table lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EngineError::SalaryNotFound { .. } | EngineError::ScaleNotFound { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
