//! Generic helpers shared by the operators.
//!
//! - [`min_of`]: fold-based minimum over comparable values
//! - [`sequence_len`], [`min_sequence_len`], [`max_sequence_len`]: length of
//!   forward-only sequences, O(1) when the iterator knows its exact size
//! - [`insert`]: compile-time selection of an insertion strategy for output
//!   containers ([`SmartInsertable`])

pub mod insert;

pub use insert::{
    back_inserter, front_inserter, positional_inserter, BackInsert, BackInserter, FrontInsert,
    FrontInserter, OutputSink, PositionalInsert, PositionalInserter, SliceWriter, SmartInsertable,
};

/// Returns the smallest of `first` and every value in `rest`.
///
/// Ties keep the earlier value. Works with any `PartialOrd` type; a value
/// that does not compare (e.g. NaN) never replaces the running minimum.
///
/// ```
/// use u_genops::util::min_of;
///
/// assert_eq!(min_of(4, [2, 9, 2]), 2);
/// assert_eq!(min_of(1.5, []), 1.5);
/// ```
pub fn min_of<T, I>(first: T, rest: I) -> T
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    rest.into_iter()
        .fold(first, |best, v| if v < best { v } else { best })
}

/// Number of items in `seq`.
///
/// O(1) when the iterator reports an exact size hint (slices, vectors,
/// deques, ranges), otherwise one O(n) pass.
///
/// # Precondition
/// `seq` is finite.
pub fn sequence_len<I: IntoIterator>(seq: I) -> usize {
    let iter = seq.into_iter();
    match iter.size_hint() {
        (lo, Some(hi)) if lo == hi => lo,
        _ => iter.count(),
    }
}

/// Length of the shorter of two sequences.
///
/// When both sides know their exact size this is O(1); otherwise both are
/// walked in lockstep until the first one ends, so a long sequence paired
/// with a short one costs only the short length.
pub fn min_sequence_len<A, B>(a: A, b: B) -> usize
where
    A: IntoIterator,
    B: IntoIterator,
{
    let a = a.into_iter();
    let b = b.into_iter();
    match (a.size_hint(), b.size_hint()) {
        ((alo, Some(ahi)), (blo, Some(bhi))) if alo == ahi && blo == bhi => alo.min(blo),
        _ => a.zip(b).count(),
    }
}

/// Length of the longer of two sequences.
pub fn max_sequence_len<A, B>(a: A, b: B) -> usize
where
    A: IntoIterator,
    B: IntoIterator,
{
    sequence_len(a).max(sequence_len(b))
}

/// Advances `iter` by `n` items, discarding them.
pub(crate) fn skip_n<I: Iterator>(iter: &mut I, n: usize) {
    if n > 0 {
        iter.nth(n - 1);
    }
}
