//! The transition record produced by one environment step.

use crate::action::Action;
use crate::layout::GridPos;

/// One `(state, action, reward, next_state, done)` tuple.
///
/// Produced by the environment collaborator after applying an action and
/// consumed by `Agent::update`. When `done` is true, `next_state` is the
/// terminal position and its action values must not leak into the update
/// target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Position the action was taken from.
    pub state: GridPos,
    /// The action applied.
    pub action: Action,
    /// Immediate reward observed for the step.
    pub reward: f64,
    /// Resulting position.
    pub next_state: GridPos,
    /// Whether `next_state` ended the episode.
    pub done: bool,
}
