//! Genetic variation operators over generic sequences.
//!
//! Provides the building blocks a genetic algorithm applies to its
//! individuals, without prescribing the rest of the loop:
//!
//! - **Edit distance**: Levenshtein distance over any two forward-iterable
//!   sequences using two rolling rows.
//! - **Mutation**: In-place, per-element stochastic replacement with a
//!   pluggable replacement operator.
//! - **Region sampling**: A lazy iterator partitioning `[0, n)` into at
//!   most `k` random contiguous regions in one selection-sampling pass,
//!   without storing any index list.
//! - **Crossover**: K-point crossover driven by region sampling, writing
//!   the child through an output sink so the caller controls allocation.
//! - **Variation**: A seeded crossover + mutation pipeline with
//!   configuration and validation.
//!
//! # Architecture
//!
//! Operators are free functions generic over element type, parent
//! container, output sink and random generator. Capability mismatches
//! (different element types, an output that cannot accept the elements)
//! are compile errors. Fitness, selection and population management are
//! left to the caller.

pub mod crossover;
pub mod distance;
pub mod error;
pub mod mutation;
pub mod random;
pub mod sampling;
pub mod util;
pub mod variation;
