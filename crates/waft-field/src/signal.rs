//! The cached scalar signal field and its gradient probes.

use std::collections::VecDeque;

use smallvec::SmallVec;
use waft_core::{Action, CellKind, GridLayout};

use crate::emitter::{self, Emitter};

/// A dense scalar scent field over a grid layout.
///
/// Each cell holds the sum over all emitters of `strength / (1 + d)`,
/// where `d` is the shortest walk distance (unit steps, walls impassable)
/// from the emitter. Cells an emitter cannot reach receive no contribution
/// from it; wall cells are never reached, so they read 0.0 and are
/// meaningful only by convention.
///
/// The field is computed eagerly at construction and is immutable
/// afterwards; shared readers need no synchronization. [`compute`] may be
/// re-run and is deterministic and idempotent.
///
/// [`compute`]: SignalField::compute
///
/// # Examples
///
/// ```
/// use waft_core::GridLayout;
/// use waft_field::SignalField;
///
/// let layout = GridLayout::parse("..G").unwrap();
/// let field = SignalField::new(&layout);
///
/// // Distance 0 at the emitter, decaying by 1/(1 + d) away from it.
/// assert_eq!(field.read(0, 2), 1.0);
/// assert_eq!(field.read(0, 1), 0.5);
/// assert_eq!(field.read(0, 0), 1.0 / 3.0);
/// ```
#[derive(Clone, Debug)]
pub struct SignalField {
    rows: u32,
    cols: u32,
    walls: Vec<bool>,
    emitters: Vec<Emitter>,
    values: Vec<f64>,
}

impl SignalField {
    /// Build a field from a layout: derive the emitter set, snapshot the
    /// wall mask, and compute the combined signal.
    pub fn new(layout: &GridLayout) -> Self {
        let walls = layout
            .iter()
            .map(|(_, kind)| kind == CellKind::Wall)
            .collect();
        let mut field = Self {
            rows: layout.rows(),
            cols: layout.cols(),
            walls,
            emitters: emitter::derive(layout),
            values: vec![0.0; layout.cell_count()],
        };
        field.compute();
        field
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// The emitter set, in row-major derivation order.
    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    /// The full row-major value buffer, for overlay and debug display.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The cached combined signal at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn read(&self, row: u32, col: u32) -> f64 {
        self.values[self.index(row, col)]
    }

    /// The signal at each of the 4 axis neighbours of `(row, col)`, in
    /// up, right, down, left order.
    ///
    /// A probe toward an out-of-bounds or wall neighbour returns the
    /// center cell's own value: the perceived gradient flattens to "no
    /// change" against obstacles rather than signaling a penalty or the
    /// blocked direction's true value. Deliberate modeling assumption;
    /// agents near edges sense flatter surroundings than interior agents.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn gradient(&self, row: u32, col: u32) -> [f64; Action::COUNT] {
        let own = self.read(row, col);
        let mut probes = [own; Action::COUNT];
        for action in Action::ALL {
            let (dr, dc) = action.offset();
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if self.open(nr, nc) {
                probes[action.index()] = self.values[self.rank(nr, nc)];
            }
        }
        probes
    }

    /// Recompute the field from the stored emitters and wall mask.
    ///
    /// Runs one breadth-first search per emitter over the 4-connected,
    /// wall-excluding adjacency graph and accumulates `strength / (1 + d)`
    /// for every reachable cell. Deterministic and idempotent: repeated
    /// calls yield bit-identical values. Cost is O(emitters x cells).
    pub fn compute(&mut self) {
        self.values.fill(0.0);
        for i in 0..self.emitters.len() {
            let source = self.emitters[i];
            self.accumulate(source);
        }
    }

    /// Accumulate one emitter's decayed contribution into the field.
    fn accumulate(&mut self, source: Emitter) {
        let start = (source.pos.row as i32, source.pos.col as i32);
        let mut visited = vec![false; self.values.len()];
        let mut queue = VecDeque::new();

        visited[self.rank(start.0, start.1)] = true;
        queue.push_back((start.0, start.1, 0u32));

        while let Some((r, c, dist)) = queue.pop_front() {
            let rank = self.rank(r, c);
            self.values[rank] += source.strength / (1.0 + dist as f64);
            for (nr, nc) in self.neighbours(r, c) {
                let next_rank = self.rank(nr, nc);
                if !visited[next_rank] {
                    visited[next_rank] = true;
                    queue.push_back((nr, nc, dist + 1));
                }
            }
        }
    }

    /// The 4-connected non-wall neighbours of `(r, c)`.
    fn neighbours(&self, r: i32, c: i32) -> SmallVec<[(i32, i32); 4]> {
        let mut result = SmallVec::new();
        for action in Action::ALL {
            let (dr, dc) = action.offset();
            let (nr, nc) = (r + dr, c + dc);
            if self.open(nr, nc) {
                result.push((nr, nc));
            }
        }
        result
    }

    /// Whether `(r, c)` is in bounds and not a wall.
    fn open(&self, r: i32, c: i32) -> bool {
        r >= 0
            && r < self.rows as i32
            && c >= 0
            && c < self.cols as i32
            && !self.walls[self.rank(r, c)]
    }

    /// Row-major rank for signed in-bounds coordinates.
    fn rank(&self, r: i32, c: i32) -> usize {
        (r as usize) * (self.cols as usize) + (c as usize)
    }

    /// Row-major rank for unsigned coordinates, with the fail-fast check.
    fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "position ({row}, {col}) out of bounds for {}x{} field",
            self.rows,
            self.cols,
        );
        (row as usize) * (self.cols as usize) + (col as usize)
    }
}
