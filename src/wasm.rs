//! WASM bindings for Influence Core.
//!
//! This module provides JavaScript-friendly bindings for use in web
//! front ends that render the matrix and vectors as editable tables.
//!
//! Decimals cross the boundary as strings in both directions: JavaScript
//! numbers are binary floats and would reintroduce exactly the
//! representation drift the decimal engine exists to avoid. Incoming cell
//! strings pass through the lenient boundary parser (comma or period
//! separator, zero on parse failure), matching how the editable widgets
//! treat free-text input.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSolver } from 'influence_core';
//!
//! await init();
//!
//! const solver = new WasmSolver(["1", "0,2", "0.1", "1"], 2);
//! const rounds = solver.propagate(["0.1", "0"], 3); // 3 * 2 flat strings
//! const solution = solver.solve(["0.1", "0"]);
//! console.log(solution.result, solution.determinant);
//! ```

use wasm_bindgen::prelude::*;

use rust_decimal::Decimal;

use crate::matrix::InfluenceMatrix;
use crate::network::parse_cell;
use crate::solver;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible influence matrix solver.
///
/// Wraps an [`InfluenceMatrix`] built from flat row-major cell strings and
/// exposes both solving strategies to JavaScript.
#[wasm_bindgen]
pub struct WasmSolver {
    matrix: InfluenceMatrix,
}

#[wasm_bindgen]
impl WasmSolver {
    /// Create a solver from flat row-major cell strings.
    ///
    /// # Arguments
    /// * `cells` - `size * size` cell values as free-text strings
    /// * `size` - Matrix dimension (number of variables)
    #[wasm_bindgen(constructor)]
    pub fn new(cells: Vec<String>, size: usize) -> Result<WasmSolver, JsValue> {
        if cells.len() != size * size {
            return Err(JsValue::from_str(&format!(
                "expected {} cells for a {size}x{size} matrix, got {}",
                size * size,
                cells.len()
            )));
        }

        let rows: Vec<Vec<Option<Decimal>>> = cells
            .chunks(size.max(1))
            .take(size)
            .map(|row| row.iter().map(|cell| Some(parse_cell(cell))).collect())
            .collect();

        let matrix = InfluenceMatrix::from_rows(rows)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmSolver { matrix })
    }

    /// Matrix dimension this solver was built with.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Propagate an initial vector for the given number of rounds.
    ///
    /// Returns `rounds * size` strings: the per-round state vectors in
    /// order, flattened row by row.
    #[wasm_bindgen]
    pub fn propagate(&self, initial: Vec<String>, rounds: usize) -> Result<Vec<String>, JsValue> {
        let initial = parse_vector(&initial);
        let sequence = solver::propagate(&initial, &self.matrix, rounds)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(sequence
            .iter()
            .flat_map(|state| state.iter().map(Decimal::to_string))
            .collect())
    }

    /// Solve for the starting vector that reaches `goal` in one round.
    #[wasm_bindgen]
    pub fn solve(&self, goal: Vec<String>) -> Result<WasmSolution, JsValue> {
        let goal = parse_vector(&goal);
        let solution = solver::solve(&goal, &self.matrix)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmSolution { solution })
    }
}

/// Outcome of a one-step solve, exposed to JavaScript as strings.
#[wasm_bindgen]
pub struct WasmSolution {
    solution: solver::Solution,
}

#[wasm_bindgen]
impl WasmSolution {
    /// Starting vector predicted to reach the goal in one round.
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> Vec<String> {
        self.solution.result.iter().map(Decimal::to_string).collect()
    }

    /// The result vector propagated once through the original matrix.
    #[wasm_bindgen(getter)]
    pub fn actual(&self) -> Vec<String> {
        self.solution.actual.iter().map(Decimal::to_string).collect()
    }

    /// The inverted matrix, flattened row-major.
    #[wasm_bindgen(getter)]
    pub fn inverse(&self) -> Vec<String> {
        let n = self.solution.inverse.size();
        let mut out = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                out.push(self.solution.inverse.value(row, col).to_string());
            }
        }
        out
    }

    /// Determinant of the original matrix.
    #[wasm_bindgen(getter)]
    pub fn determinant(&self) -> String {
        self.solution.determinant.to_string()
    }
}

fn parse_vector(raw: &[String]) -> Vec<Decimal> {
    raw.iter().map(|cell| parse_cell(cell)).collect()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
