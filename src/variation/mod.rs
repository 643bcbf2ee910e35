//! Variation pipeline.
//!
//! Glue for an evolutionary loop that is not part of this crate: given two
//! parents, produce a mutated child with reproducible randomness.
//!
//! # Key Types
//!
//! - [`VariationConfig`]: crossover point policy, mutation rate, tail
//!   handling, seed
//! - [`Variation`]: owns the generators and runs crossover then mutation

mod config;
mod runner;

pub use config::{CrossoverPoints, VariationConfig};
pub use runner::Variation;
