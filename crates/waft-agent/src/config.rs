//! Mutable learning and perception configuration.

/// Hyperparameters for the Bellman update and the epsilon-greedy policy.
///
/// The struct is a plain public field on each agent: the caller mutates
/// it freely between learning steps, no synchronization implied. Values
/// outside the nominal ranges are accepted and produce degenerate but
/// defined behavior: `epsilon > 1.0` always explores, `alpha = 0.0`
/// never updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LearningConfig {
    /// Learning rate, nominally in `(0, 1]`.
    pub alpha: f64,
    /// Discount factor, nominally in `[0, 1]`.
    pub gamma: f64,
    /// Exploration probability, nominally in `[0, 1]`.
    pub epsilon: f64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            gamma: 0.9,
            epsilon: 0.1,
        }
    }
}

/// Binning width for the perceptual state encoding.
///
/// A gradient delta within `[-threshold, threshold]` lands in the neutral
/// bin. A non-positive threshold degenerates the neutral bin to zero
/// width, which is a valid but aggressive configuration, not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerceptionConfig {
    /// Neutral-bin half width, nominally `> 0`.
    pub threshold: f64,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self { threshold: 0.01 }
    }
}
