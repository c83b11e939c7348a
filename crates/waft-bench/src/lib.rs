//! Benchmark profiles for the waft learning workspace.
//!
//! Provides deterministic layout builders shared by the bench targets so
//! results are comparable across runs and machines.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use waft_core::{CellKind, GridLayout};

/// Build a `rows x cols` labyrinth layout: every odd row is a wall with
/// a doorway every third column, a goal sits in the top-right corner and
/// a pit in the bottom-left.
///
/// The pattern is fully deterministic, so repeated benchmark runs compute
/// the same field.
///
/// # Panics
///
/// Panics if the dimensions are rejected by [`GridLayout::new`] (zero or
/// absurdly large).
pub fn labyrinth(rows: usize, cols: usize) -> GridLayout {
    let mut cells = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let kind = if r == 0 && c == cols - 1 {
                CellKind::Goal
            } else if r == rows - 1 && c == 0 {
                CellKind::Pit
            } else if r % 2 == 1 && c % 3 != 0 {
                CellKind::Wall
            } else {
                CellKind::Empty
            };
            cells.push(kind);
        }
    }
    GridLayout::new(rows, cols, cells).expect("labyrinth dimensions are valid")
}
