//! Flat contiguous Q-value storage.

use waft_core::Action;

/// A dense table of action values: one `f64` per `(state, action)` pair,
/// stored as a single contiguous buffer indexed
/// `state * Action::COUNT + action`.
///
/// The flat shape keeps per-state reads on one cache line and leaves no
/// pointer-chasing between states. States are opaque ranks here; the
/// agents own the mapping from grid positions or perceptual encodings to
/// ranks.
#[derive(Clone, Debug, PartialEq)]
pub struct QTable {
    values: Vec<f64>,
    states: usize,
}

impl QTable {
    /// Create a table with every entry at 0.0.
    pub fn zeroed(states: usize) -> Self {
        Self {
            values: vec![0.0; states * Action::COUNT],
            states,
        }
    }

    /// Number of states.
    pub fn states(&self) -> usize {
        self.states
    }

    /// The 4 action values for a state, as an owned snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `state >= self.states()`.
    pub fn values(&self, state: usize) -> [f64; Action::COUNT] {
        let slice = self.slice(state);
        [slice[0], slice[1], slice[2], slice[3]]
    }

    /// The 4 action values for a state, borrowed in place.
    ///
    /// # Panics
    ///
    /// Panics if `state >= self.states()`.
    pub fn slice(&self, state: usize) -> &[f64] {
        let base = self.base(state);
        &self.values[base..base + Action::COUNT]
    }

    /// Mutable access to one `(state, action)` entry.
    ///
    /// # Panics
    ///
    /// Panics if `state >= self.states()`.
    pub fn value_mut(&mut self, state: usize, action: Action) -> &mut f64 {
        let base = self.base(state);
        &mut self.values[base + action.index()]
    }

    /// The maximum action value in a state.
    ///
    /// # Panics
    ///
    /// Panics if `state >= self.states()`.
    pub fn max(&self, state: usize) -> f64 {
        self.slice(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Zero every entry.
    pub fn reset(&mut self) {
        self.values.fill(0.0);
    }

    fn base(&self, state: usize) -> usize {
        assert!(
            state < self.states,
            "state rank {state} out of bounds for {} states",
            self.states,
        );
        state * Action::COUNT
    }
}
