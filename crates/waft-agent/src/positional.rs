//! The grid-indexed tabular Q-learning agent.

use waft_core::{Action, GridPos, Transition};

use crate::agent::Agent;
use crate::config::LearningConfig;
use crate::policy::ActionSelector;
use crate::table::QTable;

/// Tabular Q-learning over absolute grid positions: one value per
/// `(row, col, action)` triple.
///
/// The update is standard off-policy temporal difference control:
///
/// ```text
/// target = reward                              if done
///        = reward + gamma * max(Q[next])       otherwise
/// Q[s][a] += alpha * (target - Q[s][a])
/// ```
///
/// The max over next-state actions makes the update independent of the
/// action the policy actually takes next, which is what lets the agent
/// learn the greedy-optimal policy while following an exploratory one.
///
/// # Examples
///
/// ```
/// use waft_agent::{ActionSelector, LearningConfig, PositionalAgent};
/// use waft_core::{Action, GridPos, Transition};
///
/// let mut agent = PositionalAgent::new(
///     1,
///     3,
///     LearningConfig {
///         alpha: 0.5,
///         ..LearningConfig::default()
///     },
///     ActionSelector::from_seed(0),
/// );
///
/// agent.learn(&Transition {
///     state: GridPos::new(0, 1),
///     action: Action::Right,
///     reward: 1.0,
///     next_state: GridPos::new(0, 2),
///     done: true,
/// });
/// assert_eq!(agent.q_values(0, 1)[Action::Right.index()], 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct PositionalAgent {
    rows: u32,
    cols: u32,
    q: QTable,
    /// Live-editable hyperparameters; the caller mutates these freely
    /// between learning steps.
    pub config: LearningConfig,
    selector: ActionSelector,
    updates: u64,
}

impl PositionalAgent {
    /// Create an agent for a `rows x cols` grid with an all-zero table.
    pub fn new(rows: u32, cols: u32, config: LearningConfig, selector: ActionSelector) -> Self {
        Self {
            rows,
            cols,
            q: QTable::zeroed((rows as usize) * (cols as usize)),
            config,
            selector,
            updates: 0,
        }
    }

    /// Apply the epsilon-greedy policy to the position's action values.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of bounds.
    pub fn act(&mut self, state: GridPos) -> Action {
        let values = self.q.values(self.rank(state));
        self.selector.select(self.config.epsilon, &values)
    }

    /// Absorb one observed transition.
    ///
    /// # Panics
    ///
    /// Panics if either position in the transition is out of bounds.
    pub fn learn(&mut self, transition: &Transition) {
        let state = self.rank(transition.state);
        let next = self.rank(transition.next_state);
        let target = if transition.done {
            transition.reward
        } else {
            transition.reward + self.config.gamma * self.q.max(next)
        };
        let entry = self.q.value_mut(state, transition.action);
        *entry += self.config.alpha * (target - *entry);
        self.updates += 1;
    }

    /// Zero every table entry. The update counter keeps running; it is
    /// diagnostic only and has no behavioral effect.
    pub fn reset_q(&mut self) {
        self.q.reset();
    }

    /// Snapshot of the 4 action values at `(row, col)`; a pure read for
    /// renderers and debug overlays.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn q_values(&self, row: u32, col: u32) -> [f64; Action::COUNT] {
        self.q.values(self.rank(GridPos::new(row, col)))
    }

    /// Number of learning updates applied since construction.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    fn rank(&self, pos: GridPos) -> usize {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position ({}, {}) out of bounds for {}x{} agent",
            pos.row,
            pos.col,
            self.rows,
            self.cols,
        );
        (pos.row as usize) * (self.cols as usize) + (pos.col as usize)
    }
}

impl Agent for PositionalAgent {
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
