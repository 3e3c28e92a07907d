//! Propagation and inversion solvers.
//!
//! Two strategies answer two different questions over the same matrix:
//!
//! - [`propagate`] — *forward*: given a starting perturbation, what states
//!   does the network pass through, round by round?
//! - [`solve`] — *backward*: given a desired goal state, which starting
//!   vector reaches it in a single round? Answered in closed form by
//!   inverting the matrix, then verified with one forward round.
//!
//! Both share the row-vector convention `v'[j] = sum_i v[i] * M[i][j]` and
//! the fixed rounding step to [`FRACTIONAL_DIGITS`](crate::FRACTIONAL_DIGITS)
//! fractional digits. Both are pure functions of their arguments: no shared
//! state, safe to invoke concurrently, deterministic on every call.

mod inversion;
mod propagation;

use rust_decimal::{Decimal, RoundingStrategy};

pub use inversion::{determinant, invert, solve, Solution};
pub use propagation::{propagate, propagate_last};

/// A state vector, aligned 1:1 with the variable order.
pub type StateVector = Vec<Decimal>;

/// Round one vector component to the fixed fractional-digit precision.
///
/// Midpoint rounds away from zero, matching `toFixed` of the decimal
/// libraries the display layer uses.
pub(crate) fn round_fixed(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(crate::FRACTIONAL_DIGITS, RoundingStrategy::MidpointAwayFromZero)
}
