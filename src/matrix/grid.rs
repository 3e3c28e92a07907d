//! The square influence grid.

use rust_decimal::Decimal;

use crate::error::{InfluenceError, Result};

/// Square grid of optional signed interaction strengths (row-major).
///
/// Rows are influencing variables, columns are influenced variables. `None`
/// means "no recorded interaction" and reads as zero through [`value`].
///
/// [`value`]: InfluenceMatrix::value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluenceMatrix {
    cells: Vec<Option<Decimal>>,
    size: usize,
}

impl InfluenceMatrix {
    /// Create an empty `size` x `size` matrix.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![None; size * size],
            size,
        }
    }

    /// Build a matrix from a raw row-major grid, as supplied by an editable
    /// matrix widget. Fails with [`InfluenceError::NotSquare`] when any row
    /// length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<Option<Decimal>>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in &rows {
            if row.len() != size {
                return Err(InfluenceError::NotSquare {
                    rows: size,
                    columns: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { cells, size })
    }

    /// Build a fully-populated matrix from dense row-major values.
    pub fn from_dense(rows: Vec<Vec<Decimal>>) -> Result<Self> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        )
    }

    /// Matrix dimension (variable count).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell `(row, col)`; `None` for no recorded interaction.
    pub fn get(&self, row: usize, col: usize) -> Option<Decimal> {
        self.cells[row * self.size + col]
    }

    /// Set cell `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: Decimal) {
        self.cells[row * self.size + col] = Some(value);
    }

    /// Numeric value of cell `(row, col)`; empty cells read as zero.
    pub fn value(&self, row: usize, col: usize) -> Decimal {
        self.get(row, col).unwrap_or(Decimal::ZERO)
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Decimal>]> {
        self.cells.chunks(self.size)
    }

    /// Sum of absolute interaction strengths across a row: how strongly the
    /// variable acts on the rest of the network (its outgoing footprint).
    pub fn active_sum(&self, row: usize) -> Decimal {
        (0..self.size).map(|col| self.value(row, col).abs()).sum()
    }

    /// Sum of absolute interaction strengths down a column: how strongly the
    /// rest of the network acts on the variable (its incoming footprint).
    pub fn passive_sum(&self, col: usize) -> Decimal {
        (0..self.size).map(|row| self.value(row, col).abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_matrix_reads_zero() {
        let m = InfluenceMatrix::new(3);
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(1, 2), None);
        assert_eq!(m.value(1, 2), Decimal::ZERO);
    }

    #[test]
    fn test_set_and_get() {
        let mut m = InfluenceMatrix::new(2);
        m.set(0, 1, dec!(-1.5));
        assert_eq!(m.get(0, 1), Some(dec!(-1.5)));
        assert_eq!(m.value(0, 1), dec!(-1.5));
        // Overwrite
        m.set(0, 1, dec!(2));
        assert_eq!(m.get(0, 1), Some(dec!(2)));
    }

    #[test]
    fn test_from_rows_rejects_ragged_grid() {
        let err = InfluenceMatrix::from_rows(vec![
            vec![None, Some(dec!(1))],
            vec![Some(dec!(2))],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            InfluenceError::NotSquare {
                rows: 2,
                columns: 1
            }
        );
    }

    #[test]
    fn test_from_dense() {
        let m = InfluenceMatrix::from_dense(vec![
            vec![dec!(1), dec!(0.2)],
            vec![dec!(0.1), dec!(1)],
        ])
        .unwrap();
        assert_eq!(m.value(0, 1), dec!(0.2));
        assert_eq!(m.value(1, 1), dec!(1));

        let rows: Vec<_> = m.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Some(dec!(1)), Some(dec!(0.2))][..]);
    }

    #[test]
    fn test_footprint_sums_use_absolute_values() {
        let mut m = InfluenceMatrix::new(3);
        m.set(0, 1, dec!(-1));
        m.set(0, 2, dec!(2));
        m.set(1, 0, dec!(1));

        assert_eq!(m.active_sum(0), dec!(3));
        assert_eq!(m.active_sum(1), dec!(1));
        assert_eq!(m.active_sum(2), dec!(0));

        assert_eq!(m.passive_sum(0), dec!(1));
        assert_eq!(m.passive_sum(1), dec!(1));
        assert_eq!(m.passive_sum(2), dec!(2));
    }
}
