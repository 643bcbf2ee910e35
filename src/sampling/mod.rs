//! Region sampling over an integer population.
//!
//! [`RegionSampler`] partitions `[0, population_size)` into at most `k`
//! contiguous, non-overlapping, covering [`Region`]s whose boundaries are
//! chosen pseudorandomly in a single selection-sampling pass. No index list
//! is materialized: each boundary is produced on demand and forgotten once
//! the next one is found.
//!
//! This is what k-point crossover needs: `k - 1` cut points inside the
//! sequence, with the final region always running to the end.
//!
//! # References
//!
//! - Knuth, *TAOCP Vol. 2*, §3.4.2, Algorithm S (selection sampling)
//! - Vitter (1985), "Random Sampling with a Reservoir"

use rand::Rng;
use std::iter::FusedIterator;
use std::ops::Range;

/// A half-open span `[from, to)` produced by a [`RegionSampler`].
///
/// `id` counts regions from the front (0-based); `reverse_id` counts how
/// many regions follow this one, so the last region has `reverse_id == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub id: usize,
    pub reverse_id: usize,
    pub from: usize,
    pub to: usize,
}

impl Region {
    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.to == self.from
    }

    /// Whether this is the final region of its traversal.
    pub fn is_last(&self) -> bool {
        self.reverse_id == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }
}

/// Lazily enumerates a random partition of `[0, population_size)`.
///
/// Yields exactly `min(num_regions, population_size)` regions (one empty
/// region when `num_regions == 1` and the population is empty). Regions are
/// contiguous, non-overlapping, non-empty for a non-empty population, and
/// the last one always ends at `population_size`.
///
/// The sampler mutably borrows its generator for its whole lifetime, so the
/// generator cannot be dropped or used elsewhere while regions are still
/// being drawn. A traversal consumes entropy and cannot be replayed; the
/// type is deliberately not `Clone`. To sample again, construct a new
/// sampler.
///
/// # Algorithm
///
/// For each position `i = 1, 2, …, population_size` a uniform integer is
/// drawn from `[0, remaining)`, where `remaining` counts the positions not
/// yet probed. Position `i` becomes a boundary when the draw is below the
/// number of boundaries still wanted (`reverse_id`). The last accepted
/// boundary is moved to `population_size` so the partition always covers
/// the whole population.
///
/// # Complexity
/// O(population_size) draws over a full traversal, O(1) memory
///
/// ```
/// use u_genops::random::create_rng;
/// use u_genops::sampling::RegionSampler;
///
/// let mut rng = create_rng(42);
/// let regions: Vec<_> = RegionSampler::new(&mut rng, 10, 3).collect();
/// assert_eq!(regions.len(), 3);
/// assert_eq!(regions[0].from, 0);
/// assert_eq!(regions[2].to, 10);
/// assert!(regions.windows(2).all(|w| w[0].to == w[1].from));
/// ```
#[derive(Debug)]
pub struct RegionSampler<'r, R: ?Sized> {
    rng: Option<&'r mut R>,
    population_size: usize,
    remaining: usize,
    previous_boundary: usize,
    probe: usize,
    region: Region,
}

impl<'r, R: Rng + ?Sized> RegionSampler<'r, R> {
    /// Creates a sampler over `[0, population_size)` producing at most
    /// `num_regions` regions.
    ///
    /// With `num_regions >= 2` the first region is drawn immediately.
    pub fn new(rng: &'r mut R, population_size: usize, num_regions: usize) -> Self {
        let mut sampler = Self {
            rng: Some(rng),
            population_size,
            remaining: population_size,
            previous_boundary: 0,
            probe: 1,
            region: Region {
                id: 0,
                reverse_id: num_regions.min(population_size),
                from: 0,
                to: 0,
            },
        };

        match num_regions {
            0 => {
                sampler.region.reverse_id = 0;
                sampler.rng = None;
            }
            1 => {
                sampler.region.reverse_id = 0;
                sampler.region.to = population_size;
            }
            _ => sampler.advance(),
        }
        sampler
    }

    /// Draws the next region, or ends the traversal after the last one.
    fn advance(&mut self) {
        if self.region.reverse_id == 0 {
            self.rng = None;
            return;
        }
        let Some(rng) = self.rng.as_deref_mut() else {
            return;
        };

        loop {
            // reverse_id <= remaining holds throughout, so the final
            // position is always accepted and this cannot underflow.
            debug_assert!(self.region.reverse_id <= self.remaining);
            self.remaining -= 1;
            let draw = rng.random_range(0..=self.remaining);
            let position = self.probe;
            self.probe += 1;

            if draw < self.region.reverse_id {
                if self.previous_boundary > 0 {
                    self.region.id += 1;
                }
                self.region.from = self.previous_boundary;
                self.region.reverse_id -= 1;
                self.region.to = if self.region.reverse_id > 0 {
                    position
                } else {
                    self.population_size
                };
                self.previous_boundary = position;
                return;
            }
        }
    }
}

impl<R: ?Sized> RegionSampler<'_, R> {
    /// The end-of-traversal sentinel.
    pub fn end() -> Self {
        Self {
            rng: None,
            population_size: 0,
            remaining: 0,
            previous_boundary: 0,
            probe: 0,
            region: Region::default(),
        }
    }

    /// Whether the traversal is over.
    pub fn is_end(&self) -> bool {
        self.rng.is_none()
    }

    /// The region the next call to `next()` will yield, if any.
    pub fn peek(&self) -> Option<&Region> {
        self.rng.as_ref().map(|_| &self.region)
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    fn pending(&self) -> usize {
        if self.rng.is_some() {
            1 + self.region.reverse_id
        } else {
            0
        }
    }
}

impl<R: ?Sized> Default for RegionSampler<'_, R> {
    fn default() -> Self {
        Self::end()
    }
}

/// Two samplers are equal when both have ended, or when both draw from the
/// same generator and sit on the same region.
impl<R: ?Sized> PartialEq for RegionSampler<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self.rng.as_deref(), other.rng.as_deref()) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b) && self.region == other.region,
            _ => false,
        }
    }
}

impl<R: Rng + ?Sized> Iterator for RegionSampler<'_, R> {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        self.rng.as_ref()?;
        let region = self.region;
        self.advance();
        Some(region)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pending();
        (n, Some(n))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for RegionSampler<'_, R> {}

impl<R: Rng + ?Sized> FusedIterator for RegionSampler<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    fn sample(seed: u64, population_size: usize, num_regions: usize) -> Vec<Region> {
        let mut rng = create_rng(seed);
        RegionSampler::new(&mut rng, population_size, num_regions).collect()
    }

    fn assert_partition(regions: &[Region], population_size: usize) {
        assert!(!regions.is_empty());
        assert_eq!(regions[0].from, 0);
        assert_eq!(regions.last().map(|r| r.to), Some(population_size));
        for w in regions.windows(2) {
            assert_eq!(w[0].to, w[1].from, "gap or overlap in {regions:?}");
        }
        for (i, r) in regions.iter().enumerate() {
            assert_eq!(r.id, i);
            assert_eq!(r.reverse_id, regions.len() - 1 - i);
            assert!(!r.is_empty(), "empty region in {regions:?}");
        }
    }

    #[test]
    fn test_zero_regions_is_immediately_exhausted() {
        let mut rng = create_rng(42);
        let mut s = RegionSampler::new(&mut rng, 10, 0);
        assert!(s.is_end());
        assert_eq!(s.len(), 0);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn test_zero_regions_draws_nothing() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        assert_eq!(RegionSampler::new(&mut a, 10, 0).count(), 0);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_single_region_covers_everything() {
        let regions = sample(42, 17, 1);
        assert_eq!(
            regions,
            vec![Region {
                id: 0,
                reverse_id: 0,
                from: 0,
                to: 17
            }]
        );
    }

    #[test]
    fn test_single_region_draws_nothing() {
        let mut a = create_rng(5);
        let mut b = create_rng(5);
        assert_eq!(RegionSampler::new(&mut a, 100, 1).count(), 1);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_single_region_of_empty_population() {
        let regions = sample(1, 0, 1);
        assert_eq!(regions.len(), 1);
        assert!(regions[0].is_empty());
    }

    #[test]
    fn test_empty_population_many_regions() {
        assert!(sample(1, 0, 4).is_empty());
    }

    #[test]
    fn test_exact_region_count() {
        for seed in 0..50 {
            assert_eq!(sample(seed, 20, 5).len(), 5);
            assert_eq!(sample(seed, 3, 10).len(), 3);
        }
    }

    #[test]
    fn test_regions_saturate_population() {
        // As many regions as indices: every region has length one.
        let regions = sample(42, 6, 6);
        assert_partition(&regions, 6);
        assert!(regions.iter().all(|r| r.len() == 1));
    }

    #[test]
    fn test_partition_many_seeds() {
        for seed in 0..200 {
            let regions = sample(seed, 30, 4);
            assert_partition(&regions, 30);
        }
    }

    #[test]
    fn test_every_cut_point_is_reachable() {
        let mut seen = [false; 5];
        for seed in 0..500 {
            let regions = sample(seed, 5, 2);
            seen[regions[0].to] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s), "unreached cut points: {seen:?}");
    }

    #[test]
    fn test_same_seed_same_regions() {
        assert_eq!(sample(77, 50, 6), sample(77, 50, 6));
    }

    #[test]
    fn test_exact_size_tracks_progress() {
        let mut rng = create_rng(42);
        let mut s = RegionSampler::new(&mut rng, 40, 4);
        assert_eq!(s.len(), 4);
        s.next();
        assert_eq!(s.len(), 3);
        let rest: Vec<_> = s.by_ref().collect();
        assert_eq!(rest.len(), 3);
        assert_eq!(s.len(), 0);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn test_peek_matches_next() {
        let mut rng = create_rng(8);
        let mut s = RegionSampler::new(&mut rng, 25, 3);
        while let Some(expected) = s.peek().copied() {
            assert_eq!(s.next(), Some(expected));
        }
        assert!(s.is_end());
    }

    #[test]
    fn test_equality_contract() {
        let end_a: RegionSampler<'_, rand::rngs::StdRng> = RegionSampler::default();
        let end_b = RegionSampler::end();
        assert!(end_a == end_b);

        let mut rng = create_rng(3);
        let mut live = RegionSampler::new(&mut rng, 10, 2);
        assert!(live != end_a);
        live.by_ref().for_each(drop);
        assert!(live == end_a);
    }

    #[test]
    fn test_region_helpers() {
        let r = Region {
            id: 1,
            reverse_id: 0,
            from: 3,
            to: 8,
        };
        assert_eq!(r.len(), 5);
        assert!(!r.is_empty());
        assert!(r.is_last());
        assert_eq!(r.range(), 3..8);
    }

    #[test]
    fn test_dyn_rng() {
        let mut rng = create_rng(4);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let regions: Vec<_> = RegionSampler::new(dyn_rng, 12, 3).collect();
        assert_partition(&regions, 12);
    }

    proptest! {
        #[test]
        fn prop_regions_partition_population(
            seed in any::<u64>(),
            population_size in 1usize..200,
            num_regions in 1usize..20,
        ) {
            let regions = sample(seed, population_size, num_regions);
            prop_assert_eq!(regions.len(), num_regions.min(population_size));
            prop_assert_eq!(regions[0].from, 0);
            prop_assert_eq!(regions[regions.len() - 1].to, population_size);
            for w in regions.windows(2) {
                prop_assert_eq!(w[0].to, w[1].from);
                prop_assert!(w[0].reverse_id > w[1].reverse_id);
            }
            prop_assert_eq!(regions.iter().map(Region::len).sum::<usize>(), population_size);
        }
    }
}
