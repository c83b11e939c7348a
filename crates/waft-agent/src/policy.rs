//! Epsilon-greedy action selection with uniform tie-breaking.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use waft_core::Action;

/// The shared stochastic policy core: epsilon-greedy selection over a
/// 4-value action vector, with uniform random tie-breaking among maximal
/// actions.
///
/// The random source is injected rather than ambient: construct with
/// [`from_seed`](ActionSelector::from_seed) for exactly reproducible
/// training runs, or [`from_entropy`](ActionSelector::from_entropy) for
/// OS-seeded runs.
///
/// Deterministic argmax without tie-breaking would be a correctness bug
/// here: a freshly zeroed table makes every state a 4-way tie, and always
/// resolving ties the same way produces a systematic directional bias.
///
/// # Examples
///
/// ```
/// use waft_agent::ActionSelector;
/// use waft_core::Action;
///
/// let mut selector = ActionSelector::from_seed(7);
/// // With epsilon 0 and a unique maximum, selection is greedy.
/// let action = selector.select(0.0, &[0.0, 3.0, 0.0, 0.0]);
/// assert_eq!(action, Action::Right);
/// ```
#[derive(Clone, Debug)]
pub struct ActionSelector {
    rng: ChaCha8Rng,
}

impl ActionSelector {
    /// Create a selector with a fixed seed. Identical seeds produce
    /// identical draw sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Select an action for the given value vector.
    ///
    /// With probability `epsilon`, returns an action drawn uniformly from
    /// all four; the draw never consults `values`. Otherwise returns a
    /// uniform draw from the set of actions attaining the maximum value.
    pub fn select(&mut self, epsilon: f64, values: &[f64; Action::COUNT]) -> Action {
        if self.rng.random::<f64>() < epsilon {
            return Action::ALL[self.rng.random_range(0..Action::COUNT)];
        }

        let mut best: SmallVec<[usize; Action::COUNT]> = SmallVec::new();
        best.push(0);
        for i in 1..Action::COUNT {
            if values[i] > values[best[0]] {
                best.clear();
                best.push(i);
            } else if values[i] == values[best[0]] {
                best.push(i);
            }
        }
        Action::ALL[best[self.rng.random_range(0..best.len())]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_picks_unique_maximum() {
        let mut selector = ActionSelector::from_seed(1);
        for _ in 0..100 {
            assert_eq!(selector.select(0.0, &[0.0, 0.0, 5.0, 0.0]), Action::Down);
        }
    }

    #[test]
    fn tie_break_is_roughly_uniform() {
        // All-zero values at epsilon 0: every draw is a 4-way tie.
        let mut selector = ActionSelector::from_seed(42);
        let mut counts = [0usize; Action::COUNT];
        let trials = 4000;
        for _ in 0..trials {
            counts[selector.select(0.0, &[0.0; 4]).index()] += 1;
        }
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (850..=1150).contains(&count),
                "action {i} selected {count}/{trials} times, expected ~1000",
            );
        }
    }

    #[test]
    fn partial_tie_break_stays_within_tied_set() {
        let mut selector = ActionSelector::from_seed(9);
        let mut seen = [false; Action::COUNT];
        for _ in 0..200 {
            let action = selector.select(0.0, &[2.0, -1.0, 2.0, 0.0]);
            assert!(matches!(action, Action::Up | Action::Down));
            seen[action.index()] = true;
        }
        assert!(seen[Action::Up.index()], "Up never drawn from the tie set");
        assert!(
            seen[Action::Down.index()],
            "Down never drawn from the tie set"
        );
    }

    #[test]
    fn epsilon_one_explores_every_action() {
        // Exploration must ignore the values entirely: the worst action
        // still appears under a saturated epsilon.
        let mut selector = ActionSelector::from_seed(3);
        let mut seen = [false; Action::COUNT];
        for _ in 0..200 {
            seen[selector.select(1.0, &[100.0, 0.0, 0.0, 0.0]).index()] = true;
        }
        assert_eq!(seen, [true; Action::COUNT]);
    }

    #[test]
    fn epsilon_above_one_is_always_explore() {
        let mut selector = ActionSelector::from_seed(5);
        let mut greedy_only = true;
        for _ in 0..200 {
            if selector.select(1.5, &[100.0, 0.0, 0.0, 0.0]) != Action::Up {
                greedy_only = false;
            }
        }
        assert!(!greedy_only, "epsilon > 1 must keep exploring");
    }

    #[test]
    fn same_seed_replays_identically() {
        let draw = |seed: u64| -> Vec<Action> {
            let mut selector = ActionSelector::from_seed(seed);
            (0..64).map(|_| selector.select(0.3, &[0.0; 4])).collect()
        };
        assert_eq!(draw(11), draw(11));
        assert_ne!(draw(11), draw(12));
    }
}
