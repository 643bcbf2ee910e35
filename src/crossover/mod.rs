//! K-point crossover over arbitrary sequences.
//!
//! - [`crossover`]: writes the child into any [`OutputSink`] and returns the
//!   sink; allocates nothing itself
//! - [`crossover_into`]: convenience form building a fresh container
//!
//! Parents may be different container types as long as they yield the same
//! element type, and neither needs random access or a known length.
//!
//! # References
//!
//! - De Jong (1975), *An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems* (multi-point crossover)

use crate::sampling::RegionSampler;
use crate::util::{max_sequence_len, min_sequence_len, skip_n, OutputSink, SmartInsertable};
use rand::Rng;
use tracing::trace;

/// Produces a child by alternating spans of `parent1` and `parent2`.
///
/// # Algorithm
///
/// 1. The working length is `min(|parent1|, |parent2|)`.
/// 2. A fair coin on `parent_rng` picks the starting parent.
/// 3. A [`RegionSampler`] on `boundary_rng` splits `[0, working length)`
///    into `crossover_points + 1` regions (fewer if the parents are short).
/// 4. Each region is copied from the active parent, then the active parent
///    flips. Both parents advance past every region, so positions stay
///    aligned.
/// 5. With `copy_tail`, whatever lies beyond the working length (only the
///    longer parent has anything there) is appended, so no genetic material
///    past the shorter parent is lost.
///
/// Returns `out` after the last write so the caller can keep appending.
///
/// `crossover_points == 0` copies the whole working prefix from one parent.
///
/// # Complexity
/// O(|parent1| + |parent2|) time, O(1) extra memory
///
/// ```
/// use u_genops::crossover::crossover;
/// use u_genops::random::create_rng;
/// use u_genops::util::SmartInsertable;
///
/// let mut child = String::new();
/// crossover(
///     2,
///     &mut create_rng(1),
///     &mut create_rng(2),
///     "AAAAAAAA".chars(),
///     "BBBBBBBB".chars(),
///     child.smart_inserter(),
///     true,
/// );
/// assert_eq!(child.len(), 8);
/// assert!(child.chars().all(|c| c == 'A' || c == 'B'));
/// ```
pub fn crossover<T, P1, P2, O, R1, R2>(
    crossover_points: usize,
    parent_rng: &mut R1,
    boundary_rng: &mut R2,
    parent1: P1,
    parent2: P2,
    mut out: O,
    copy_tail: bool,
) -> O
where
    P1: IntoIterator<Item = T>,
    P2: IntoIterator<Item = T>,
    P1::IntoIter: Clone,
    P2::IntoIter: Clone,
    O: OutputSink<T>,
    R1: Rng + ?Sized,
    R2: Rng + ?Sized,
{
    let mut p1 = parent1.into_iter();
    let mut p2 = parent2.into_iter();
    let working_len = min_sequence_len(p1.clone(), p2.clone());

    let mut from_first = parent_rng.random_bool(0.5);
    let regions = RegionSampler::new(boundary_rng, working_len, crossover_points.saturating_add(1));

    for region in regions {
        let span = region.len();
        trace!(
            from = region.from,
            to = region.to,
            parent = if from_first { 1 } else { 2 },
            "copying crossover span"
        );
        if from_first {
            p1.by_ref().take(span).for_each(|x| out.put(x));
            skip_n(&mut p2, span);
        } else {
            p2.by_ref().take(span).for_each(|x| out.put(x));
            skip_n(&mut p1, span);
        }
        from_first = !from_first;
    }

    if copy_tail {
        // At most one parent extends past the working length.
        p1.for_each(|x| out.put(x));
        p2.for_each(|x| out.put(x));
    }
    out
}

/// Crossover into a new container of type `C`.
///
/// Reserves room for the longer parent when `C` supports reservation,
/// inserts through [`SmartInsertable::smart_inserter`], and always copies
/// the trailing tail.
///
/// ```
/// use u_genops::crossover::crossover_into;
/// use u_genops::random::create_rng;
///
/// let child: Vec<u8> = crossover_into(
///     1,
///     &mut create_rng(3),
///     &mut create_rng(4),
///     [0u8; 6],
///     [1u8; 6],
/// );
/// assert_eq!(child.len(), 6);
/// ```
pub fn crossover_into<C, T, P1, P2, R1, R2>(
    crossover_points: usize,
    parent_rng: &mut R1,
    boundary_rng: &mut R2,
    parent1: P1,
    parent2: P2,
) -> C
where
    C: Default + SmartInsertable<T>,
    P1: IntoIterator<Item = T>,
    P2: IntoIterator<Item = T>,
    P1::IntoIter: Clone,
    P2::IntoIter: Clone,
    R1: Rng + ?Sized,
    R2: Rng + ?Sized,
{
    let p1 = parent1.into_iter();
    let p2 = parent2.into_iter();

    let mut child = C::default();
    child.reserve_or_noop(max_sequence_len(p1.clone(), p2.clone()));
    crossover(
        crossover_points,
        parent_rng,
        boundary_rng,
        p1,
        p2,
        child.smart_inserter(),
        true,
    );
    child
}
