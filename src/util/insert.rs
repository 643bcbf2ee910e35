//! Output sinks and smart insertion.
//!
//! Operators that produce sequences write through an [`OutputSink`] so the
//! caller decides where the elements land: a growing container, a
//! preallocated slice, or anything else that accepts values one at a time.
//!
//! [`SmartInsertable`] picks the insertion strategy for a container at
//! compile time. Back insertion is preferred; containers without a notion
//! of "back" (sets, heaps) fall back to positional insertion. Front
//! insertion is available explicitly via [`front_inserter`].

use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Accepts values one at a time.
pub trait OutputSink<T> {
    /// Writes one value.
    fn put(&mut self, value: T);
}

impl<T, S: OutputSink<T> + ?Sized> OutputSink<T> for &mut S {
    fn put(&mut self, value: T) {
        (**self).put(value);
    }
}

// ============================================================================
// Insertion capabilities
// ============================================================================

/// Containers that can append at the back.
pub trait BackInsert<T> {
    fn push_back(&mut self, value: T);
}

/// Containers that can prepend at the front.
pub trait FrontInsert<T> {
    fn push_front(&mut self, value: T);
}

/// Containers whose insertion position is decided by the container itself.
pub trait PositionalInsert<T> {
    fn insert_value(&mut self, value: T);
}

impl<T> BackInsert<T> for Vec<T> {
    fn push_back(&mut self, value: T) {
        self.push(value);
    }
}

impl BackInsert<char> for String {
    fn push_back(&mut self, value: char) {
        self.push(value);
    }
}

impl<T> BackInsert<T> for VecDeque<T> {
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }
}

impl<T> BackInsert<T> for LinkedList<T> {
    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }
}

impl<T> FrontInsert<T> for VecDeque<T> {
    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }
}

impl<T> FrontInsert<T> for LinkedList<T> {
    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }
}

impl<T: Ord> PositionalInsert<T> for BTreeSet<T> {
    fn insert_value(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T: Eq + Hash, S: BuildHasher> PositionalInsert<T> for HashSet<T, S> {
    fn insert_value(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T: Ord> PositionalInsert<T> for BinaryHeap<T> {
    fn insert_value(&mut self, value: T) {
        self.push(value);
    }
}

// ============================================================================
// Inserters
// ============================================================================

/// Sink appending to the back of a container.
#[derive(Debug)]
pub struct BackInserter<'a, C: ?Sized> {
    container: &'a mut C,
}

/// Sink prepending to the front of a container.
///
/// Elements end up in reverse order of insertion.
#[derive(Debug)]
pub struct FrontInserter<'a, C: ?Sized> {
    container: &'a mut C,
}

/// Sink handing each value to the container's own insert.
#[derive(Debug)]
pub struct PositionalInserter<'a, C: ?Sized> {
    container: &'a mut C,
}

impl<T, C: BackInsert<T> + ?Sized> OutputSink<T> for BackInserter<'_, C> {
    fn put(&mut self, value: T) {
        self.container.push_back(value);
    }
}

impl<T, C: FrontInsert<T> + ?Sized> OutputSink<T> for FrontInserter<'_, C> {
    fn put(&mut self, value: T) {
        self.container.push_front(value);
    }
}

impl<T, C: PositionalInsert<T> + ?Sized> OutputSink<T> for PositionalInserter<'_, C> {
    fn put(&mut self, value: T) {
        self.container.insert_value(value);
    }
}

/// Sink appending to the back of `container`.
pub fn back_inserter<C: ?Sized>(container: &mut C) -> BackInserter<'_, C> {
    BackInserter { container }
}

/// Sink prepending to the front of `container`.
pub fn front_inserter<C: ?Sized>(container: &mut C) -> FrontInserter<'_, C> {
    FrontInserter { container }
}

/// Sink inserting into `container` at the position it chooses.
pub fn positional_inserter<C: ?Sized>(container: &mut C) -> PositionalInserter<'_, C> {
    PositionalInserter { container }
}

/// Sink writing into caller-provided storage without allocating.
///
/// # Panics
/// [`put`](OutputSink::put) panics once the slice is full.
#[derive(Debug)]
pub struct SliceWriter<'a, T> {
    slots: &'a mut [T],
    written: usize,
}

impl<'a, T> SliceWriter<'a, T> {
    pub fn new(slots: &'a mut [T]) -> Self {
        Self { slots, written: 0 }
    }

    /// Number of slots written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Number of slots still free.
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.written
    }
}

impl<T> OutputSink<T> for SliceWriter<'_, T> {
    fn put(&mut self, value: T) {
        assert!(
            self.written < self.slots.len(),
            "slice writer overflow: capacity {}",
            self.slots.len()
        );
        self.slots[self.written] = value;
        self.written += 1;
    }
}

// ============================================================================
// Smart insertion
// ============================================================================

/// A container that knows its preferred way of accepting new elements.
///
/// ```
/// use u_genops::util::{OutputSink, SmartInsertable};
/// use std::collections::BTreeSet;
///
/// let mut v: Vec<u8> = Vec::new();
/// v.smart_inserter().put(3);
/// assert_eq!(v, [3]);
///
/// let mut s: BTreeSet<i32> = BTreeSet::new();
/// let mut out = s.smart_inserter();
/// out.put(2);
/// out.put(1);
/// assert_eq!(s.into_iter().collect::<Vec<_>>(), [1, 2]);
/// ```
pub trait SmartInsertable<T> {
    /// The sink returned by [`smart_inserter`](Self::smart_inserter).
    type Inserter<'a>: OutputSink<T>
    where
        Self: 'a;

    /// Returns a sink inserting into `self`.
    fn smart_inserter(&mut self) -> Self::Inserter<'_>;

    /// Reserves room for `additional` elements when the container supports
    /// it; otherwise does nothing.
    fn reserve_or_noop(&mut self, _additional: usize) {}
}

impl<T> SmartInsertable<T> for Vec<T> {
    type Inserter<'a> = BackInserter<'a, Self> where Self: 'a;

    fn smart_inserter(&mut self) -> Self::Inserter<'_> {
        back_inserter(self)
    }

    fn reserve_or_noop(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl SmartInsertable<char> for String {
    type Inserter<'a> = BackInserter<'a, Self> where Self: 'a;

    fn smart_inserter(&mut self) -> Self::Inserter<'_> {
        back_inserter(self)
    }

    fn reserve_or_noop(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T> SmartInsertable<T> for VecDeque<T> {
    type Inserter<'a> = BackInserter<'a, Self> where Self: 'a;

    fn smart_inserter(&mut self) -> Self::Inserter<'_> {
        back_inserter(self)
    }

    fn reserve_or_noop(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T> SmartInsertable<T> for LinkedList<T> {
    type Inserter<'a> = BackInserter<'a, Self> where Self: 'a;

    fn smart_inserter(&mut self) -> Self::Inserter<'_> {
        back_inserter(self)
    }
}

impl<T: Ord> SmartInsertable<T> for BTreeSet<T> {
    type Inserter<'a> = PositionalInserter<'a, Self> where Self: 'a;

    fn smart_inserter(&mut self) -> Self::Inserter<'_> {
        positional_inserter(self)
    }
}

impl<T: Eq + Hash, S: BuildHasher> SmartInsertable<T> for HashSet<T, S> {
    type Inserter<'a> = PositionalInserter<'a, Self> where Self: 'a;

    fn smart_inserter(&mut self) -> Self::Inserter<'_> {
        positional_inserter(self)
    }

    fn reserve_or_noop(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T: Ord> SmartInsertable<T> for BinaryHeap<T> {
    type Inserter<'a> = PositionalInserter<'a, Self> where Self: 'a;

    fn smart_inserter(&mut self) -> Self::Inserter<'_> {
        positional_inserter(self)
    }

    fn reserve_or_noop(&mut self, additional: usize) {
        self.reserve(additional);
    }
}
