//! Assembling the influence matrix from sparse interaction records.

use std::collections::HashMap;

use crate::error::{InfluenceError, Result};
use crate::matrix::InfluenceMatrix;
use crate::network::{Interaction, Variable, VariableId};

/// Build the square influence matrix for an ordered variable list.
///
/// The position of each variable in `variables` defines its row and column.
/// For every interaction, cell `(pos(source), pos(target))` is set to the
/// interaction value. Runs in O(V + E) and never mutates its inputs.
///
/// Contract details:
/// - Self-loops (`source == target`) are silently dropped; the diagonal
///   stays empty no matter what the input contains.
/// - An interaction referencing an id that is not in `variables` rejects
///   the whole batch with [`InfluenceError::UnknownVariable`]. A partially
///   built matrix would silently change solver output downstream.
/// - Duplicate `(source, target)` pairs: the last occurrence in input order
///   wins.
pub fn build_matrix(variables: &[Variable], interactions: &[Interaction]) -> Result<InfluenceMatrix> {
    let index: HashMap<VariableId, usize> = variables
        .iter()
        .enumerate()
        .map(|(pos, var)| (var.id, pos))
        .collect();

    let mut matrix = InfluenceMatrix::new(variables.len());

    for interaction in interactions {
        if interaction.is_self_loop() {
            continue;
        }
        let row = resolve(&index, interaction.source)?;
        let col = resolve(&index, interaction.target)?;
        matrix.set(row, col, interaction.value);
    }

    Ok(matrix)
}

fn resolve(index: &HashMap<VariableId, usize>, id: VariableId) -> Result<usize> {
    index
        .get(&id)
        .copied()
        .ok_or_else(|| InfluenceError::unknown_variable(id.0))
}
