//! Influence matrix representation and construction.
//!
//! The influence matrix is a square grid of signed decimal interaction
//! strengths, indexed by variable position. Cell `(i, j)` holds the recorded
//! influence of variable `i` on variable `j`; an empty cell means no recorded
//! interaction and contributes zero to every computation. The diagonal of a
//! built matrix is always empty: a variable does not influence itself.
//!
//! Matrices arrive by one of two routes:
//! - [`build_matrix`] assembles the grid from validated variable and
//!   interaction records (the import path)
//! - [`InfluenceMatrix::from_rows`] accepts a raw grid from the editing
//!   layer, which may carry diagonal values (e.g. identity-like sample
//!   matrices used for experimentation)

mod builder;
mod grid;

pub use builder::build_matrix;
pub use grid::InfluenceMatrix;
