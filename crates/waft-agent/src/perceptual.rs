//! The gradient-indexed tabular Q-learning agent.

use std::sync::Arc;

use waft_core::{Action, GridPos, Transition};
use waft_field::SignalField;

use crate::agent::Agent;
use crate::config::{LearningConfig, PerceptionConfig};
use crate::policy::ActionSelector;
use crate::table::QTable;

/// Size of the perceptual state space: 3 bins ^ 4 directions.
pub const PERCEPT_STATES: usize = 81;

/// Base-3 positional weights for the up, right, down, left bins.
const BIN_WEIGHTS: [usize; Action::COUNT] = [27, 9, 3, 1];

/// Tabular Q-learning over a discretized perception of the signal field's
/// local gradient: one value per `(perceptual state, action)` pair.
///
/// The state is what the agent senses, not where it stands: each of the
/// four gradient probes is binned into worse / neutral / better against
/// the configured threshold, and the four bins combine into an index in
/// `[0, 81)`. Two positions that sense the same bins share
/// one table row, which is the generalization mechanism.
///
/// The Bellman machinery is identical to the positional agent's; only the
/// state addressing differs.
#[derive(Clone, Debug)]
pub struct PerceptualAgent {
    field: Arc<SignalField>,
    q: QTable,
    /// Live-editable hyperparameters; the caller mutates these freely
    /// between learning steps.
    pub config: LearningConfig,
    /// Live-editable binning width for the state encoding.
    pub perception: PerceptionConfig,
    selector: ActionSelector,
    updates: u64,
}

impl PerceptualAgent {
    /// Create an agent perceiving through the given field, with an
    /// all-zero 81x4 table.
    pub fn new(
        field: Arc<SignalField>,
        config: LearningConfig,
        perception: PerceptionConfig,
        selector: ActionSelector,
    ) -> Self {
        Self {
            field,
            q: QTable::zeroed(PERCEPT_STATES),
            config,
            perception,
            selector,
            updates: 0,
        }
    }

    /// The field this agent perceives through.
    pub fn field(&self) -> &Arc<SignalField> {
        &self.field
    }

    /// Swap the perceived field, keeping the learned table.
    ///
    /// This is how learned behavior transfers to a new layout: the table
    /// is indexed by sensed gradients, so it stays meaningful as long as
    /// the new layout shares the old one's emitter semantics.
    pub fn set_field(&mut self, field: Arc<SignalField>) {
        self.field = field;
    }

    /// Discretize the local gradient at `pos` into a state in `[0, 81)`.
    ///
    /// Per direction (up, right, down, left): `delta` is the probe minus
    /// the cell's own signal, binned 0 if `delta < -threshold`, 2 if
    /// `delta > threshold`, else 1. Deltas exactly at the threshold land
    /// in the neutral bin; the comparisons are strict. The bins combine
    /// with base-3 weights [27, 9, 3, 1].
    ///
    /// Pure and deterministic: identical (position, field, threshold)
    /// always yields the same index.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds for the field.
    pub fn state_index(&self, pos: GridPos) -> usize {
        let here = self.field.read(pos.row, pos.col);
        let probes = self.field.gradient(pos.row, pos.col);
        let threshold = self.perception.threshold;

        let mut index = 0;
        for (probe, weight) in probes.iter().zip(BIN_WEIGHTS) {
            let delta = probe - here;
            let bin = if delta < -threshold {
                0
            } else if delta > threshold {
                2
            } else {
                1
            };
            index += bin * weight;
        }
        index
    }

    /// Apply the epsilon-greedy policy to the sensed state's values.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of bounds for the field.
    pub fn act(&mut self, state: GridPos) -> Action {
        let values = self.q.values(self.state_index(state));
        self.selector.select(self.config.epsilon, &values)
    }

    /// Absorb one observed transition, addressing both ends by their
    /// perceptual state index.
    ///
    /// # Panics
    ///
    /// Panics if either position in the transition is out of bounds for
    /// the field.
    pub fn learn(&mut self, transition: &Transition) {
        let state = self.state_index(transition.state);
        let next = self.state_index(transition.next_state);
        let target = if transition.done {
            transition.reward
        } else {
            transition.reward + self.config.gamma * self.q.max(next)
        };
        let entry = self.q.value_mut(state, transition.action);
        *entry += self.config.alpha * (target - *entry);
        self.updates += 1;
    }

    /// Zero all 81x4 entries. The update counter keeps running.
    pub fn reset_q(&mut self) {
        self.q.reset();
    }

    /// Snapshot of the 4 action values for a perceptual state; a pure
    /// read for renderers and debug overlays.
    ///
    /// # Panics
    ///
    /// Panics if `state >= PERCEPT_STATES`.
    pub fn q_values(&self, state: usize) -> [f64; Action::COUNT] {
        self.q.values(state)
    }

    /// Number of learning updates applied since construction.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Agent for PerceptualAgent {
    fn choose_action(&mut self, state: GridPos) -> Action {
        self.act(state)
    }

    fn update(&mut self, transition: &Transition) {
        self.learn(transition);
    }

    fn reset(&mut self) {
        self.reset_q();
    }
}
