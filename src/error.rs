//! Error types for the influence engine.
//!
//! This module provides a unified error type [`InfluenceError`] that covers
//! all error conditions that can occur during matrix construction, input
//! parsing, propagation, and inversion.
//!
//! Every failure is a deterministic function of the inputs: nothing here is
//! transient, nothing is retried, and nothing panics on invalid input. The
//! caller owns user-facing messaging.

use thiserror::Error;

/// Result type alias using [`InfluenceError`].
pub type Result<T> = std::result::Result<T, InfluenceError>;

/// Unified error type for all influence engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InfluenceError {
    // ============ Validation Errors ============
    /// An interaction references a variable id that is not in the variable
    /// list. The whole batch is rejected.
    #[error("Interaction references unknown variable id {id}")]
    UnknownVariable { id: u32 },

    /// A raw value could not be parsed as a decimal.
    #[error("Invalid decimal value '{raw}'")]
    InvalidDecimal { raw: String },

    /// Too many variables for the O(n^3) inversion path.
    #[error("Network has {count} variables, inversion supports at most {limit}")]
    TooManyVariables { count: usize, limit: usize },

    // ============ Dimension Errors ============
    /// Vector length does not match the matrix size.
    #[error("Vector has {actual} components, matrix expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A raw grid is ragged or non-square.
    #[error("Matrix is not square: {rows} rows but a row of {columns} columns")]
    NotSquare { rows: usize, columns: usize },

    // ============ Solver Errors ============
    /// Matrix has no inverse; the one-step solve is unavailable.
    #[error("Singular matrix - the influence matrix has no inverse")]
    SingularMatrix,

    /// A product or sum left the representable decimal range.
    #[error("Numeric overflow - interaction strengths exceed the representable decimal range")]
    NumericOverflow,
}

impl InfluenceError {
    /// Create an unknown-variable error.
    pub fn unknown_variable(id: u32) -> Self {
        Self::UnknownVariable { id }
    }

    /// Create an invalid-decimal error.
    pub fn invalid_decimal(raw: impl Into<String>) -> Self {
        Self::InvalidDecimal { raw: raw.into() }
    }

    /// Create a dimension-mismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}
