//! Per-element stochastic mutation.
//!
//! - [`mutate`]: replaces each element with probability `rate`, using a
//!   caller-supplied operator
//! - [`AlphabetMutator`]: an operator drawing replacements uniformly from a
//!   fixed alphabet

use crate::error::ConfigError;
use crate::random::create_unseeded_rng;
use rand::rngs::StdRng;
use rand::Rng;

/// Mutates `individual` in place.
///
/// For every element a uniform `f64` in `[0, 1)` is drawn from `rng`; when
/// it is below `rate` the element is replaced by `op(&element)`. The
/// operator may inspect the current value or ignore it.
///
/// - `rate <= 0.0` never replaces anything, `rate >= 1.0` replaces everything.
/// - Exactly one draw per element; an empty individual consumes no entropy.
/// - Never allocates.
///
/// ```
/// use u_genops::mutation::mutate;
/// use u_genops::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let mut genome = vec![1, 2, 3];
/// mutate(&mut genome, 1.0, |g: &i32| g * 10, &mut rng);
/// assert_eq!(genome, [10, 20, 30]);
/// ```
pub fn mutate<'a, T, I, M, R>(individual: I, rate: f64, mut op: M, rng: &mut R)
where
    T: 'a,
    I: IntoIterator<Item = &'a mut T>,
    M: FnMut(&T) -> T,
    R: Rng + ?Sized,
{
    for element in individual {
        if rng.random::<f64>() < rate {
            *element = op(&*element);
        }
    }
}

/// Mutation operator returning a uniformly chosen symbol from an alphabet.
///
/// Owns its generator, so it can be handed to [`mutate`] as a closure while
/// the per-element coin flips use a separate generator.
///
/// ```
/// use u_genops::mutation::{mutate, AlphabetMutator};
/// use u_genops::random::create_rng;
///
/// let mut symbols = AlphabetMutator::new(vec!['A', 'C', 'G', 'T'], create_rng(1)).unwrap();
/// let mut genome: Vec<char> = "AAAAAAAA".chars().collect();
/// mutate(&mut genome, 0.5, |_| symbols.next_value(), &mut create_rng(2));
/// assert!(genome.iter().all(|c| "ACGT".contains(*c)));
/// ```
#[derive(Debug, Clone)]
pub struct AlphabetMutator<T, R = StdRng> {
    alphabet: Vec<T>,
    rng: R,
}

impl<T: Clone, R: Rng> AlphabetMutator<T, R> {
    /// Creates a mutator over `alphabet`.
    ///
    /// Returns [`ConfigError::EmptyAlphabet`] when `alphabet` is empty.
    pub fn new(alphabet: Vec<T>, rng: R) -> Result<Self, ConfigError> {
        if alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(Self { alphabet, rng })
    }

    /// Draws the next replacement symbol.
    pub fn next_value(&mut self) -> T {
        let idx = self.rng.random_range(0..self.alphabet.len());
        self.alphabet[idx].clone()
    }

    /// Draws a replacement for `current`, which is ignored.
    pub fn mutate_one(&mut self, _current: &T) -> T {
        self.next_value()
    }

    /// The symbols this mutator draws from.
    pub fn alphabet(&self) -> &[T] {
        &self.alphabet
    }
}

/// ASCII alphanumerics, punctuation and space.
pub fn printable_ascii() -> Vec<char> {
    (0u8..=127)
        .map(char::from)
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_punctuation() || *c == ' ')
        .collect()
}

impl<R: Rng> AlphabetMutator<char, R> {
    /// Mutator over [`printable_ascii`].
    pub fn printable_ascii(rng: R) -> Self {
        Self {
            alphabet: printable_ascii(),
            rng,
        }
    }
}

impl AlphabetMutator<char> {
    /// Printable-ASCII mutator seeded from thread-local entropy.
    pub fn printable_ascii_unseeded() -> Self {
        Self::printable_ascii(create_unseeded_rng())
    }
}
