//! Error types.
//!
//! The operators themselves never fail at runtime; only configuration and
//! operator construction can be rejected.

use thiserror::Error;

/// Invalid configuration for a variation pipeline or mutation operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Mutation rate is NaN, infinite, or outside `[0, 1]`.
    #[error("mutation_rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),

    /// An alphabet mutator needs at least one symbol to draw from.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
}
