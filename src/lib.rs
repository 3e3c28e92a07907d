//! # Influence Core
//!
//! A decimal-precision propagation engine for sustainability impact networks.
//!
//! This library provides:
//! - A sparse-to-dense builder that turns variable and interaction records
//!   into a square influence matrix
//! - Iterative propagation of a state vector through the matrix, round by round
//! - A closed-form one-step solver based on matrix inversion, with a
//!   consistency check against the original matrix
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`network`] - Variable and interaction records, plus the free-text cell
//!   parsing boundary
//! - [`matrix`] - The [`InfluenceMatrix`] grid and the matrix builder
//! - [`solver`] - Propagation and inversion solvers
//!
//! ## Numeric model
//!
//! All arithmetic uses [`rust_decimal::Decimal`] rather than binary floating
//! point. Repeated vector-matrix multiplication compounds representation
//! error under `f64`; decimal arithmetic with a fixed rounding step keeps the
//! round-by-round results exact and reproducible. After every propagation
//! round each vector component is rounded to [`FRACTIONAL_DIGITS`] fractional
//! digits before it feeds the next round.
//!
//! ## Propagation convention
//!
//! One round advances a state vector `v` to `v'` using the matrix columns as
//! the outgoing-influence direction from each source row:
//!
//! ```text
//! v'[j] = sum over i of v[i] * M[i][j]
//! ```
//!
//! i.e. the vector is treated as a row vector multiplying the matrix on the
//! left. Empty cells (no recorded interaction) contribute zero.
//!
//! ## Usage
//!
//! ```
//! use influence_core::network::{Interaction, Variable, VariableId};
//! use influence_core::matrix::build_matrix;
//! use influence_core::solver::propagate;
//! use rust_decimal::Decimal;
//!
//! let variables = vec![
//!     Variable::new(VariableId(1), "Recycled content", "Material"),
//!     Variable::new(VariableId(2), "Recyclability", "End of life"),
//! ];
//! let interactions = vec![
//!     Interaction::new(VariableId(1), VariableId(2), Decimal::ONE),
//! ];
//!
//! let matrix = build_matrix(&variables, &interactions)?;
//! let initial = vec![Decimal::ONE, Decimal::ZERO];
//! let rounds = propagate(&initial, &matrix, 3)?;
//! assert_eq!(rounds.len(), 3);
//! # Ok::<(), influence_core::InfluenceError>(())
//! ```

pub mod error;
pub mod matrix;
pub mod network;
pub mod solver;

// Re-export main types for convenience
pub use error::{InfluenceError, Result};
pub use matrix::{build_matrix, InfluenceMatrix};
pub use solver::{determinant, invert, propagate, propagate_last, solve, Solution, StateVector};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{WasmSolution, WasmSolver};

/// Fractional digits kept after each rounding step.
pub const FRACTIONAL_DIGITS: u32 = 10;

/// Upper bound on the variable count accepted by the O(n^3) inversion path.
pub const MAX_VARIABLES: usize = 300;
