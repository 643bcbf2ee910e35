//! Edit distance between sequences.
//!
//! - [`levenshtein`]: minimum number of single-element insertions,
//!   deletions and substitutions turning one sequence into another
//! - [`pairwise_levenshtein`]: all pairwise distances within a set of
//!   sequences (row-parallel with the `parallel` feature)
//!
//! # References
//!
//! - Levenshtein (1966), "Binary codes capable of correcting deletions,
//!   insertions, and reversals"
//! - Wagner & Fischer (1974), "The String-to-String Correction Problem"

use crate::util::{min_of, sequence_len};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Levenshtein edit distance between `a` and `b`.
///
/// Works over any two iterables yielding the same element type: slices,
/// vectors, linked lists, `str::chars()`, and so on. `a` is traversed once;
/// `b` is re-traversed for every element of `a`, so its iterator must be
/// `Clone`. Random access and a known length are not required.
///
/// # Algorithm
///
/// Wagner–Fischer with two rolling rows of length `|b| + 1`. Row 0 is
/// `0..=|b|`; each element of `a` derives the next row left to right from
/// `min(delete + 1, insert + 1, substitute + cost)`, then the rows swap.
///
/// # Complexity
/// O(|a|·|b|) time, O(|b|) space
///
/// ```
/// use u_genops::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten".chars(), "sitting".chars()), 3);
/// assert_eq!(levenshtein(&[1, 2, 3], &[1, 3]), 1);
/// ```
pub fn levenshtein<A, B, T>(a: A, b: B) -> usize
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    B::IntoIter: Clone,
    T: PartialEq,
{
    let b = b.into_iter();
    let b_len = sequence_len(b.clone());

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut cur_row: Vec<usize> = vec![0; b_len + 1];

    for (i, x) in a.into_iter().enumerate() {
        cur_row[0] = i + 1;
        for (j, y) in b.clone().enumerate() {
            let insert_cost = cur_row[j] + 1;
            let subst_cost = prev_row[j] + usize::from(x != y);
            let delete_cost = prev_row[j + 1] + 1;
            cur_row[j + 1] = min_of(delete_cost, [insert_cost, subst_cost]);
        }
        std::mem::swap(&mut prev_row, &mut cur_row);
    }

    prev_row[b_len]
}

/// Levenshtein distances between every pair of `sequences`.
///
/// Returns the condensed upper triangle: distances for `(0,1), (0,2), …,
/// (0,n-1), (1,2), …, (n-2,n-1)`, i.e. `n·(n-1)/2` entries.
///
/// Each sequence only needs to be viewable as a slice: `Vec<T>`, `&[T]`,
/// arrays, or `String` compared byte-wise.
///
/// With the `parallel` feature, rows are computed on the rayon pool; the
/// output is identical to the sequential result.
pub fn pairwise_levenshtein<S, T>(sequences: &[S]) -> Vec<usize>
where
    S: AsRef<[T]> + Sync,
    T: PartialEq,
{
    let n = sequences.len();
    let row = |i: usize| -> Vec<usize> {
        ((i + 1)..n)
            .map(|j| levenshtein(sequences[i].as_ref(), sequences[j].as_ref()))
            .collect()
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<usize>> = (0..n).into_par_iter().map(row).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<usize>> = (0..n).map(row).collect();

    rows.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{BTreeSet, LinkedList, VecDeque};

    fn lev(a: &str, b: &str) -> usize {
        levenshtein(a.chars(), b.chars())
    }

    #[test]
    fn test_known_values() {
        assert_eq!(lev("kitten", "sitting"), 3);
        assert_eq!(lev("Saturday", "Sunday"), 3);
        assert_eq!(lev("thou shalt not", "you should not"), 5);
        assert_eq!(lev("house", "mouse"), 1);
        assert_eq!(lev("flaw", "lawn"), 2);
    }

    #[test]
    fn test_empty_sequences() {
        assert_eq!(lev("", ""), 0);
        assert_eq!(levenshtein(Vec::<char>::new(), Vec::<char>::new()), 0);
        assert_eq!(lev("", "abc"), 3);
        assert_eq!(lev("abcd", ""), 4);
    }

    #[test]
    fn test_mixed_containers() {
        let car = vec!['c', 'a', 'r'];
        let bat = ['b', 'a', 't'];
        assert_eq!(levenshtein(&car, &bat), 2);

        let vsauce = vec!['V', 's', 'a', 'u', 'c', 'e'];
        let apple: Vec<char> = "apple sauce".chars().collect();
        assert_eq!(levenshtein(&vsauce, &apple), 6);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(lev("αβδε", "αβ_δε"), 1);
        assert_eq!(lev("αβδε", "αγδ"), 2);
    }

    #[test]
    fn test_forward_only_sequences() {
        let kitten: LinkedList<char> = "kitten".chars().collect();
        let sitting: VecDeque<char> = "sitting".chars().collect();
        assert_eq!(levenshtein(&kitten, &sitting), 3);

        let sitting_list: LinkedList<char> = "sitting".chars().collect();
        assert_eq!(levenshtein(&kitten, &sitting_list), 3);

        // inexact size hint on b
        let evens = (0..10).filter(|x| x % 2 == 0);
        assert_eq!(levenshtein(vec![0, 2, 4, 6, 9], evens), 1);
    }

    #[test]
    fn test_ordered_set_as_sequence() {
        // Sets are not sequences, but iterate in a defined order.
        let a: BTreeSet<char> = "abc".chars().collect();
        let b: BTreeSet<char> = "abd".chars().collect();
        assert_eq!(levenshtein(&a, &b), 1);
    }

    #[test]
    fn test_bytes() {
        assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
    }

    #[test]
    fn test_pairwise_levenshtein() {
        let seqs = vec![
            "abc".chars().collect::<Vec<_>>(),
            "abd".chars().collect::<Vec<_>>(),
            "xyz".chars().collect::<Vec<_>>(),
        ];
        let d = pairwise_levenshtein(&seqs);
        // (0,1), (0,2), (1,2)
        assert_eq!(d, vec![1, 3, 3]);
    }

    #[test]
    fn test_pairwise_levenshtein_small_inputs() {
        let none: Vec<Vec<u8>> = Vec::new();
        assert!(pairwise_levenshtein(&none).is_empty());

        let one = vec![vec![1u8, 2, 3]];
        assert!(pairwise_levenshtein(&one).is_empty());
    }

    #[test]
    fn test_pairwise_levenshtein_borrowed_slices() {
        let words: [&[u8]; 3] = [b"kitten", b"sitting", b"mitten"];
        assert_eq!(pairwise_levenshtein(&words), vec![3, 1, 3]);
    }

    #[test]
    fn test_pairwise_levenshtein_count() {
        let seqs: Vec<Vec<u8>> = (0..6).map(|i| vec![i; i as usize]).collect();
        assert_eq!(pairwise_levenshtein(&seqs).len(), 15);
    }

    proptest! {
        #[test]
        fn prop_identity(a in proptest::collection::vec(0u8..4, 0..24)) {
            prop_assert_eq!(levenshtein(&a, &a), 0);
        }

        #[test]
        fn prop_symmetry(
            a in proptest::collection::vec(0u8..4, 0..24),
            b in proptest::collection::vec(0u8..4, 0..24),
        ) {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }

        #[test]
        fn prop_bounded_by_lengths(
            a in proptest::collection::vec(0u8..4, 0..24),
            b in proptest::collection::vec(0u8..4, 0..24),
        ) {
            let d = levenshtein(&a, &b);
            prop_assert!(d >= a.len().abs_diff(b.len()));
            prop_assert!(d <= a.len().max(b.len()));
        }

        #[test]
        fn prop_triangle_inequality(
            a in proptest::collection::vec(0u8..3, 0..12),
            b in proptest::collection::vec(0u8..3, 0..12),
            c in proptest::collection::vec(0u8..3, 0..12),
        ) {
            prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
        }
    }
}
