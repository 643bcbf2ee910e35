//! Variation pipeline configuration.
//!
//! [`VariationConfig`] holds the parameters of one crossover + mutation
//! step.

use crate::error::ConfigError;

/// How many crossover points each recombination uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverPoints {
    /// Always exactly this many points (capped by the parents' length).
    Fixed(usize),

    /// A fresh count drawn uniformly from `[0, min(|p1|, |p2|)]` on every
    /// recombination.
    Uniform,
}

impl Default for CrossoverPoints {
    fn default() -> Self {
        CrossoverPoints::Fixed(1)
    }
}

/// Configuration for a [`Variation`](super::Variation) pipeline.
///
/// # Defaults
///
/// ```
/// use u_genops::variation::{CrossoverPoints, VariationConfig};
///
/// let config = VariationConfig::default();
/// assert_eq!(config.crossover_points, CrossoverPoints::Fixed(1));
/// assert!(config.copy_tail);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genops::variation::{CrossoverPoints, VariationConfig};
///
/// let config = VariationConfig::default()
///     .with_crossover_points(CrossoverPoints::Fixed(3))
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariationConfig {
    /// Crossover point policy.
    pub crossover_points: CrossoverPoints,

    /// Per-element probability of mutation (0.0–1.0).
    ///
    /// Typical range: 1/L to 0.05 for a genome of length L.
    pub mutation_rate: f64,

    /// Whether to append the longer parent's tail beyond the shorter
    /// parent's length.
    pub copy_tail: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for VariationConfig {
    fn default() -> Self {
        Self {
            crossover_points: CrossoverPoints::default(),
            mutation_rate: 0.01,
            copy_tail: true,
            seed: None,
        }
    }
}

impl VariationConfig {
    /// Sets the crossover point policy.
    pub fn with_crossover_points(mut self, points: CrossoverPoints) -> Self {
        self.crossover_points = points;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables copying the longer parent's tail.
    pub fn with_copy_tail(mut self, copy_tail: bool) -> Self {
        self.copy_tail = copy_tail;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
