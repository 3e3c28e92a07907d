//! Closed-form one-step solving via matrix inversion.

use rust_decimal::Decimal;

use crate::error::{InfluenceError, Result};
use crate::matrix::InfluenceMatrix;
use crate::MAX_VARIABLES;

use super::propagation::step;
use super::StateVector;

/// Outcome of a one-step inversion solve.
///
/// `result` propagated once through the original matrix gives `actual`; the
/// caller compares `actual` against its goal to make the rounding
/// discrepancy visible rather than suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The inverted influence matrix.
    pub inverse: InfluenceMatrix,
    /// Starting vector predicted to reach the goal in one round.
    pub result: StateVector,
    /// `result` propagated one round through the original matrix.
    pub actual: StateVector,
    /// Determinant of the original matrix (unrounded).
    pub determinant: Decimal,
}

/// Solve for the starting vector that reaches `goal` in a single round.
///
/// Computes the determinant first; a zero determinant (decimal elimination
/// found a pivot column with no usable pivot) fails with
/// [`InfluenceError::SingularMatrix`] before any inversion work, and the
/// caller must treat the one-step solve as unavailable. A tiny but nonzero
/// determinant still solves; how small is worth displaying is the caller's
/// call. Otherwise the matrix is inverted and the result derived with the
/// same row-vector convention as propagation:
///
/// ```text
/// result[j] = sum_i goal[i] * inverse[i][j]
/// ```
///
/// each component rounded to ten fractional digits.
///
/// Inversion is O(n^3), so networks larger than
/// [`MAX_VARIABLES`](crate::MAX_VARIABLES) are rejected up front with
/// [`InfluenceError::TooManyVariables`] instead of stalling an interactive
/// caller. Inputs are never mutated; repeated calls are independent.
pub fn solve(goal: &[Decimal], matrix: &InfluenceMatrix) -> Result<Solution> {
    let n = matrix.size();
    if goal.len() != n {
        return Err(InfluenceError::dimension_mismatch(n, goal.len()));
    }
    check_size(n)?;

    let det = lu_determinant(matrix)?;
    if det.is_zero() {
        return Err(InfluenceError::SingularMatrix);
    }

    let inverse = gauss_jordan(matrix)?;
    let result = step(goal, &inverse)?;
    let actual = step(&result, matrix)?;

    Ok(Solution {
        inverse,
        result,
        actual,
        determinant: det,
    })
}

/// Determinant of the influence matrix (empty cells read as zero).
///
/// Exactly zero for a singular matrix. Unrounded otherwise; callers that
/// display it apply their own rounding.
pub fn determinant(matrix: &InfluenceMatrix) -> Result<Decimal> {
    check_size(matrix.size())?;
    lu_determinant(matrix)
}

/// Invert the influence matrix.
///
/// Fails with [`InfluenceError::SingularMatrix`] when elimination finds no
/// usable pivot, and with [`InfluenceError::NumericOverflow`] when a value
/// leaves the representable decimal range. The returned matrix is fully
/// populated, including its diagonal; it is a derived computational object,
/// not a built influence grid.
pub fn invert(matrix: &InfluenceMatrix) -> Result<InfluenceMatrix> {
    check_size(matrix.size())?;
    gauss_jordan(matrix)
}

fn check_size(n: usize) -> Result<()> {
    if n > MAX_VARIABLES {
        return Err(InfluenceError::TooManyVariables {
            count: n,
            limit: MAX_VARIABLES,
        });
    }
    Ok(())
}

/// Determinant by LU elimination with partial pivoting: the signed product
/// of the pivots, with a sign flip per row swap.
///
/// All arithmetic goes through the checked decimal operators; pivot products
/// grow fast with the matrix size and would otherwise panic past the
/// representable range.
fn lu_determinant(matrix: &InfluenceMatrix) -> Result<Decimal> {
    let n = matrix.size();
    let mut lu: Vec<Decimal> = dense(matrix);
    let mut det = Decimal::ONE;

    for k in 0..n {
        // Find pivot
        let mut max_val = lu[k * n + k].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = lu[i * n + k].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val.is_zero() {
            return Ok(Decimal::ZERO);
        }

        if max_row != k {
            swap_rows(&mut lu, n, k, max_row);
            det = -det;
        }

        let pivot = lu[k * n + k];
        det = det
            .checked_mul(pivot)
            .ok_or(InfluenceError::NumericOverflow)?;

        for i in (k + 1)..n {
            let factor = lu[i * n + k]
                .checked_div(pivot)
                .ok_or(InfluenceError::NumericOverflow)?;
            for j in (k + 1)..n {
                let sub = factor
                    .checked_mul(lu[k * n + j])
                    .ok_or(InfluenceError::NumericOverflow)?;
                lu[i * n + j] = lu[i * n + j]
                    .checked_sub(sub)
                    .ok_or(InfluenceError::NumericOverflow)?;
            }
        }
    }

    Ok(det)
}

/// Gauss-Jordan elimination with partial pivoting over the augmented system
/// `[A | I]`, yielding the inverse in the right half.
fn gauss_jordan(matrix: &InfluenceMatrix) -> Result<InfluenceMatrix> {
    let n = matrix.size();
    let mut a = dense(matrix);
    // Start the right half as the identity
    let mut inv = vec![Decimal::ZERO; n * n];
    for i in 0..n {
        inv[i * n + i] = Decimal::ONE;
    }

    for k in 0..n {
        let mut max_val = a[k * n + k].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = a[i * n + k].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val.is_zero() {
            return Err(InfluenceError::SingularMatrix);
        }

        if max_row != k {
            swap_rows(&mut a, n, k, max_row);
            swap_rows(&mut inv, n, k, max_row);
        }

        // Normalize the pivot row
        let pivot = a[k * n + k];
        for j in 0..n {
            a[k * n + j] = a[k * n + j]
                .checked_div(pivot)
                .ok_or(InfluenceError::NumericOverflow)?;
            inv[k * n + j] = inv[k * n + j]
                .checked_div(pivot)
                .ok_or(InfluenceError::NumericOverflow)?;
        }

        // Eliminate the pivot column from every other row
        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = a[i * n + k];
            if factor.is_zero() {
                continue;
            }
            for j in 0..n {
                let sub_a = factor
                    .checked_mul(a[k * n + j])
                    .ok_or(InfluenceError::NumericOverflow)?;
                a[i * n + j] = a[i * n + j]
                    .checked_sub(sub_a)
                    .ok_or(InfluenceError::NumericOverflow)?;
                let sub_inv = factor
                    .checked_mul(inv[k * n + j])
                    .ok_or(InfluenceError::NumericOverflow)?;
                inv[i * n + j] = inv[i * n + j]
                    .checked_sub(sub_inv)
                    .ok_or(InfluenceError::NumericOverflow)?;
            }
        }
    }

    InfluenceMatrix::from_dense(
        inv.chunks(n.max(1))
            .take(n)
            .map(|row| row.to_vec())
            .collect(),
    )
}

/// Dense row-major copy of the grid with empty cells as zero.
fn dense(matrix: &InfluenceMatrix) -> Vec<Decimal> {
    let n = matrix.size();
    let mut out = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            out.push(matrix.value(row, col));
        }
    }
    out
}

fn swap_rows(cells: &mut [Decimal], n: usize, r1: usize, r2: usize) {
    for j in 0..n {
        cells.swap(r1 * n + j, r2 * n + j);
    }
}
