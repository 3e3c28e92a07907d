//! Round-by-round forward propagation.

use rust_decimal::Decimal;

use crate::error::{InfluenceError, Result};
use crate::matrix::InfluenceMatrix;

use super::{round_fixed, StateVector};

/// Propagate a state vector through the influence matrix for `rounds` rounds.
///
/// Returns the full sequence of intermediate states in order, each the state
/// after one more round; `rounds = 0` yields an empty sequence. Returning
/// every round lets the caller inspect which round produced which value
/// without recomputing; use [`propagate_last`] when only the final state
/// matters.
///
/// One round advances the vector with the matrix columns as the
/// outgoing-influence direction: `v'[j] = sum_i v[i] * M[i][j]` (the vector
/// is a row vector multiplying the matrix on the left). Empty cells
/// contribute zero. Each component of `v'` is rounded to ten fractional
/// digits before it feeds the next round, so precision noise stays bounded
/// across arbitrarily many rounds.
///
/// Fails with [`InfluenceError::DimensionMismatch`] before any computation
/// when `initial` does not match the matrix size, and with
/// [`InfluenceError::NumericOverflow`] when a round produces a value outside
/// the representable decimal range.
pub fn propagate(
    initial: &[Decimal],
    matrix: &InfluenceMatrix,
    rounds: usize,
) -> Result<Vec<StateVector>> {
    let n = matrix.size();
    if initial.len() != n {
        return Err(InfluenceError::dimension_mismatch(n, initial.len()));
    }

    let mut sequence = Vec::with_capacity(rounds);
    let mut current: StateVector = initial.to_vec();

    for _ in 0..rounds {
        current = step(&current, matrix)?;
        sequence.push(current.clone());
    }

    Ok(sequence)
}

/// Propagate and keep only the state after the final round.
///
/// `rounds = 0` returns the initial vector unchanged.
pub fn propagate_last(
    initial: &[Decimal],
    matrix: &InfluenceMatrix,
    rounds: usize,
) -> Result<StateVector> {
    let n = matrix.size();
    if initial.len() != n {
        return Err(InfluenceError::dimension_mismatch(n, initial.len()));
    }

    let mut current: StateVector = initial.to_vec();
    for _ in 0..rounds {
        current = step(&current, matrix)?;
    }
    Ok(current)
}

/// One propagation round: row vector times matrix, rounded per component.
///
/// Decimal operators panic on overflow, so every product and sum goes
/// through the checked variants; a value outside the representable range
/// surfaces as [`InfluenceError::NumericOverflow`].
pub(crate) fn step(current: &[Decimal], matrix: &InfluenceMatrix) -> Result<StateVector> {
    let n = matrix.size();
    (0..n)
        .map(|col| {
            let mut sum = Decimal::ZERO;
            for row in 0..n {
                if let Some(cell) = matrix.get(row, col) {
                    let term = current[row]
                        .checked_mul(cell)
                        .ok_or(InfluenceError::NumericOverflow)?;
                    sum = sum
                        .checked_add(term)
                        .ok_or(InfluenceError::NumericOverflow)?;
                }
            }
            Ok(round_fixed(sum))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_matrix() -> InfluenceMatrix {
        InfluenceMatrix::from_dense(vec![
            vec![dec!(1), dec!(0.2), dec!(0.3)],
            vec![dec!(0.1), dec!(1), dec!(0.2)],
            vec![dec!(0.3), dec!(-0.1), dec!(1)],
        ])
        .unwrap()
    }

    #[test]
    fn test_three_rounds_exact_values() {
        let initial = vec![dec!(0.1), dec!(0), dec!(0)];
        let rounds = propagate(&initial, &sample_matrix(), 3).unwrap();

        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[0], vec![dec!(0.1), dec!(0.02), dec!(0.03)]);
        assert_eq!(rounds[1], vec![dec!(0.111), dec!(0.037), dec!(0.064)]);
        assert_eq!(rounds[2], vec![dec!(0.1339), dec!(0.0528), dec!(0.1047)]);
    }

    #[test]
    fn test_zero_vector_stays_zero() {
        let initial = vec![dec!(0), dec!(0), dec!(0)];
        let rounds = propagate(&initial, &sample_matrix(), 5).unwrap();

        assert_eq!(rounds.len(), 5);
        for state in rounds {
            assert_eq!(state, vec![dec!(0), dec!(0), dec!(0)]);
        }
    }

    #[test]
    fn test_zero_rounds_yields_empty_sequence() {
        let initial = vec![dec!(0.1), dec!(0), dec!(0)];
        let rounds = propagate(&initial, &sample_matrix(), 0).unwrap();
        assert!(rounds.is_empty());
    }

    #[test]
    fn test_empty_cells_contribute_zero() {
        // Sparse matrix straight from the builder path: only (0,1) is set.
        let mut matrix = InfluenceMatrix::new(2);
        matrix.set(0, 1, dec!(2));

        let rounds = propagate(&[dec!(3), dec!(1)], &matrix, 1).unwrap();
        // Column 0 has no recorded influence at all, column 1 gets 3 * 2.
        assert_eq!(rounds[0], vec![dec!(0), dec!(6)]);
    }

    #[test]
    fn test_components_round_to_ten_digits() {
        let matrix = InfluenceMatrix::from_dense(vec![vec![dec!(0.9)]]).unwrap();
        let rounds = propagate(&[dec!(0.12345678901234)], &matrix, 1).unwrap();
        // 0.12345678901234 * 0.9 = 0.111111110111106, rounded half away
        // from zero at the tenth fractional digit.
        assert_eq!(rounds[0], vec![dec!(0.1111111101)]);
    }

    #[test]
    fn test_overflow_is_typed_error() {
        let matrix =
            InfluenceMatrix::from_dense(vec![vec![dec!(100000000000000000000)]]).unwrap();
        let err = propagate(&[dec!(100000000000000000000)], &matrix, 1).unwrap_err();
        assert_eq!(err, InfluenceError::NumericOverflow);
    }

    #[test]
    fn test_dimension_mismatch_fails_before_computation() {
        let initial = vec![dec!(0.1), dec!(0)];
        let err = propagate(&initial, &sample_matrix(), 2).unwrap_err();
        assert_eq!(
            err,
            InfluenceError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_propagate_last_matches_full_sequence() {
        let initial = vec![dec!(0.1), dec!(0), dec!(0)];
        let matrix = sample_matrix();

        let full = propagate(&initial, &matrix, 3).unwrap();
        let last = propagate_last(&initial, &matrix, 3).unwrap();
        assert_eq!(&last, full.last().unwrap());

        // Zero rounds: the initial state itself.
        let unchanged = propagate_last(&initial, &matrix, 0).unwrap();
        assert_eq!(unchanged, initial);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let initial = vec![dec!(0.1), dec!(0), dec!(0)];
        let matrix = sample_matrix();

        let first = propagate(&initial, &matrix, 2).unwrap();
        let second = propagate(&initial, &matrix, 2).unwrap();
        assert_eq!(first, second);
        assert_eq!(initial, vec![dec!(0.1), dec!(0), dec!(0)]);
    }
}
