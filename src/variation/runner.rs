//! Seeded crossover + mutation pipeline.
//!
//! [`Variation`] bundles the three independent generators the operators
//! need (parent choice, crossover boundaries, mutation coin flips) with a
//! [`VariationConfig`], so a caller's evolutionary loop only hands over
//! parents and gets children back.

use super::config::{CrossoverPoints, VariationConfig};
use crate::crossover::crossover;
use crate::error::ConfigError;
use crate::mutation::mutate;
use crate::random::{create_rng, create_unseeded_rng};
use crate::util::{max_sequence_len, min_sequence_len, SmartInsertable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Crossover + mutation with owned, independently seeded generators.
///
/// ```
/// use u_genops::variation::{Variation, VariationConfig};
///
/// let config = VariationConfig::default().with_mutation_rate(0.0).with_seed(42);
/// let mut variation = Variation::new(config).unwrap();
///
/// let child: String = variation.recombine("AAAAAA".chars(), "BBBBBB".chars());
/// assert_eq!(child.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Variation<R = StdRng> {
    config: VariationConfig,
    parent_rng: R,
    boundary_rng: R,
    mutation_rng: R,
}

impl Variation<StdRng> {
    /// Creates a pipeline whose generators derive from `config.seed`
    /// (or from thread-local entropy when unset).
    pub fn new(config: VariationConfig) -> Result<Self, ConfigError> {
        let mut master = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_unseeded_rng(),
        };
        let parent_rng = StdRng::from_rng(&mut master);
        let boundary_rng = StdRng::from_rng(&mut master);
        let mutation_rng = StdRng::from_rng(&mut master);
        Self::with_rngs(config, parent_rng, boundary_rng, mutation_rng)
    }
}

impl<R: Rng> Variation<R> {
    /// Creates a pipeline from caller-supplied generators. `config.seed` is
    /// ignored.
    pub fn with_rngs(
        config: VariationConfig,
        parent_rng: R,
        boundary_rng: R,
        mutation_rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            parent_rng,
            boundary_rng,
            mutation_rng,
        })
    }

    pub fn config(&self) -> &VariationConfig {
        &self.config
    }

    /// Crossover point count for parents whose shorter length is
    /// `working_len`.
    fn points_for(&mut self, working_len: usize) -> usize {
        match self.config.crossover_points {
            CrossoverPoints::Fixed(k) => k,
            CrossoverPoints::Uniform => self.boundary_rng.random_range(0..=working_len),
        }
    }

    /// Recombines two parents into a new container of type `C`.
    pub fn recombine<C, T, P1, P2>(&mut self, parent1: P1, parent2: P2) -> C
    where
        C: Default + SmartInsertable<T>,
        P1: IntoIterator<Item = T>,
        P2: IntoIterator<Item = T>,
        P1::IntoIter: Clone,
        P2::IntoIter: Clone,
    {
        let p1 = parent1.into_iter();
        let p2 = parent2.into_iter();
        let working_len = min_sequence_len(p1.clone(), p2.clone());
        let points = self.points_for(working_len);

        let mut child = C::default();
        child.reserve_or_noop(if self.config.copy_tail {
            max_sequence_len(p1.clone(), p2.clone())
        } else {
            working_len
        });
        crossover(
            points,
            &mut self.parent_rng,
            &mut self.boundary_rng,
            p1,
            p2,
            child.smart_inserter(),
            self.config.copy_tail,
        );

        debug!(
            crossover_points = points,
            working_len,
            copy_tail = self.config.copy_tail,
            "recombined parents"
        );
        child
    }

    /// Mutates `individual` in place at the configured rate.
    pub fn mutate<'a, T, I, M>(&mut self, individual: I, op: M)
    where
        T: 'a,
        I: IntoIterator<Item = &'a mut T>,
        M: FnMut(&T) -> T,
    {
        mutate(individual, self.config.mutation_rate, op, &mut self.mutation_rng);
    }

    /// Recombines two parents, then mutates the child.
    ///
    /// ```
    /// use u_genops::variation::{Variation, VariationConfig};
    ///
    /// let config = VariationConfig::default().with_mutation_rate(1.0).with_seed(7);
    /// let mut variation = Variation::new(config).unwrap();
    ///
    /// let child: Vec<u8> = variation.offspring(vec![1u8; 5], vec![2u8; 5], |_| 0);
    /// assert_eq!(child, [0; 5]);
    /// ```
    pub fn offspring<C, T, P1, P2, M>(&mut self, parent1: P1, parent2: P2, op: M) -> C
    where
        C: Default + SmartInsertable<T>,
        for<'a> &'a mut C: IntoIterator<Item = &'a mut T>,
        P1: IntoIterator<Item = T>,
        P2: IntoIterator<Item = T>,
        P1::IntoIter: Clone,
        P2::IntoIter: Clone,
        M: FnMut(&T) -> T,
    {
        let mut child: C = self.recombine(parent1, parent2);
        self.mutate(&mut child, op);
        child
    }
}
