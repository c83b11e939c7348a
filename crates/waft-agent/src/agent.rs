//! The agent capability trait.

use waft_core::{Action, GridPos, Transition};

/// The capability surface an environment driver needs from any learning
/// agent: pick an action for the current position, absorb one observed
/// transition, and forget what has been learned.
///
/// The grid-indexed and perception-indexed variants are two concrete
/// implementations selected at composition time; callers hold whichever
/// concrete type they constructed (or a `Box<dyn Agent>`) and never
/// inspect the variant at runtime.
///
/// The driving loop is strictly sequential: observe the state, call
/// [`choose_action`](Agent::choose_action), apply the action externally,
/// then [`update`](Agent::update) with the observed transition. Both
/// calls are synchronous, non-blocking, and in-memory.
pub trait Agent {
    /// Select an action for the given grid position.
    fn choose_action(&mut self, state: GridPos) -> Action;

    /// Absorb one observed transition into the value table.
    fn update(&mut self, transition: &Transition);

    /// Zero the value table. Hyperparameters and diagnostic counters are
    /// untouched.
    fn reset(&mut self);
}
