/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Immutable set stored as a sorted, deduplicated boxed slice.

mod iter;
mod merge;
mod ops;

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;
use std::num::NonZeroUsize;
use std::ops::Bound;
use std::ops::Index;
use std::ops::Range;
use std::ops::RangeBounds;

use allocative::Allocative;
use equivalent::Comparable;
use serde::Deserialize;
use serde::Serialize;

use crate::equality::EqAny;
use crate::equality::Equality;
use crate::error::SortedSetError;
pub use crate::sorted_set::iter::IntoIter;
pub use crate::sorted_set::iter::Iter;

/// An immutable set with values guaranteed to be sorted and unique.
///
/// Behaves as a sequence (positional access, slicing, ascending iteration)
/// and as a set (membership and set algebra). Operations that combine sets
/// return a new `SortedSet`.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Allocative)]
pub struct SortedSet<T> {
    inner: Box<[T]>,
}

fn is_strictly_increasing<T: Ord>(elems: &[T]) -> bool {
    elems.windows(2).all(|w| w[0] < w[1])
}

/// Resolve `range` against a sequence of `len` elements.
///
/// Bounds past the end are clamped, and an inverted range is empty.
fn clamp_range(range: impl RangeBounds<usize>, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    let end = end.min(len);
    start.min(end)..end
}

impl<T> SortedSet<T> {
    /// Construct an empty `SortedSet`.
    #[inline]
    pub fn new() -> SortedSet<T> {
        SortedSet {
            inner: Box::default(),
        }
    }

    /// Return the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.inner.iter(),
        }
    }

    /// Get the element at the given position.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Get the element at the given position, or an error naming the bounds.
    pub fn try_get_index(&self, index: usize) -> Result<&T, SortedSetError> {
        self.inner.get(index).ok_or(SortedSetError::OutOfRange {
            index,
            len: self.inner.len(),
        })
    }

    /// The smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.inner.first()
    }

    /// The largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    /// The elements as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Return the sorted elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }
}

impl<T> SortedSet<T>
where
    T: Ord,
{
    /// Construct without sorting or deduplicating.
    ///
    /// Caller must guarantee that `inner` is strictly increasing.
    #[inline]
    pub fn new_unchecked(inner: Vec<T>) -> Self {
        debug_assert!(
            is_strictly_increasing(&inner),
            "SortedSet::new_unchecked called with unsorted or duplicated elements"
        );
        SortedSet {
            inner: inner.into_boxed_slice(),
        }
    }

    /// Construct from elements which are expected to be strictly increasing
    /// already, reporting the first position where they are not.
    pub fn try_from_sorted(inner: Vec<T>) -> Result<Self, SortedSetError> {
        match inner.windows(2).position(|w| w[0] >= w[1]) {
            Some(index) => Err(SortedSetError::NotSorted { index: index + 1 }),
            None => Ok(SortedSet {
                inner: inner.into_boxed_slice(),
            }),
        }
    }

    /// Number of elements strictly less than `value`.
    ///
    /// This is where `value` would be inserted to keep the sequence sorted.
    #[inline]
    pub fn rank<Q>(&self, value: &Q) -> usize
    where
        Q: ?Sized + Comparable<T>,
    {
        self.inner
            .partition_point(|e| value.compare(e) == Ordering::Greater)
    }

    /// Position of `value`, if present.
    #[inline]
    fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        Q: ?Sized + Comparable<T>,
    {
        let index = self.rank(value);
        match self.inner.get(index) {
            Some(e) if value.compare(e) == Ordering::Equal => Some(index),
            _ => None,
        }
    }

    /// Get the element in the set equal to `value`.
    #[inline]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        Q: ?Sized + Comparable<T>,
    {
        self.position(value).map(|index| &self.inner[index])
    }

    /// Check if the set contains the given value.
    ///
    /// Computes in **O(log n)** time.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized + Comparable<T>,
    {
        self.position(value).is_some()
    }

    /// Position of `value` in ascending order.
    pub fn index_of<Q>(&self, value: &Q) -> Result<usize, SortedSetError>
    where
        Q: ?Sized + Comparable<T> + Debug,
    {
        debug_assert!(is_strictly_increasing(&self.inner));
        self.position(value)
            .ok_or_else(|| SortedSetError::NotFound(format!("{value:?}")))
    }

    /// `1` if `value` is present, `0` otherwise.
    ///
    /// Elements are unique, so this is a membership test.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        Q: ?Sized + Comparable<T>,
    {
        debug_assert!(is_strictly_increasing(&self.inner));
        usize::from(self.contains(value))
    }

    /// Elements at the positions covered by `range`.
    ///
    /// Bounds past the end are clamped, so this never fails.
    pub fn slice<R>(&self, range: R) -> SortedSet<T>
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        let range = clamp_range(range, self.inner.len());
        SortedSet {
            inner: self.inner[range].into(),
        }
    }

    /// Every `step`-th element at the positions covered by `range`,
    /// starting with the first.
    ///
    /// The result is ascending whatever the stride. A backward stride would
    /// only differ in which positions it picks, so choose the range start
    /// accordingly instead.
    pub fn slice_step<R>(&self, range: R, step: NonZeroUsize) -> SortedSet<T>
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        let range = clamp_range(range, self.inner.len());
        SortedSet::new_unchecked(
            self.inner[range]
                .iter()
                .step_by(step.get())
                .cloned()
                .collect(),
        )
    }

    /// Sorted union of the elements of both sets.
    pub fn concat(&self, other: &SortedSet<T>) -> SortedSet<T>
    where
        T: Clone,
    {
        SortedSet::new_unchecked(merge::union(&self.inner, &other.inner))
    }

    /// An empty set when `n <= 0`, otherwise a copy of this set.
    ///
    /// Duplicates cannot exist, so repeating the elements changes nothing
    /// beyond whether the result has any.
    pub fn repeat(&self, n: i64) -> SortedSet<T>
    where
        T: Clone,
    {
        if n <= 0 {
            SortedSet::new()
        } else {
            self.clone()
        }
    }

    /// Elements in this set or in `other`.
    pub fn union(&self, other: impl IntoIterator<Item = T>) -> SortedSet<T>
    where
        T: Clone,
    {
        self | &SortedSet::from_iter(other)
    }

    /// Elements in both this set and `other`.
    pub fn intersection(&self, other: impl IntoIterator<Item = T>) -> SortedSet<T>
    where
        T: Clone,
    {
        self & &SortedSet::from_iter(other)
    }

    /// Elements in this set but not in `other`.
    pub fn difference(&self, other: impl IntoIterator<Item = T>) -> SortedSet<T>
    where
        T: Clone,
    {
        self - &SortedSet::from_iter(other)
    }

    /// Elements in exactly one of this set and `other`.
    pub fn symmetric_difference(&self, other: impl IntoIterator<Item = T>) -> SortedSet<T>
    where
        T: Clone,
    {
        self ^ &SortedSet::from_iter(other)
    }

    /// Every element of this set is in `other`.
    pub fn is_subset(&self, other: impl IntoIterator<Item = T>) -> bool {
        merge::is_subset(&self.inner, &SortedSet::from_iter(other).inner)
    }

    /// Every element of `other` is in this set.
    pub fn is_superset(&self, other: impl IntoIterator<Item = T>) -> bool {
        merge::is_subset(&SortedSet::from_iter(other).inner, &self.inner)
    }

    /// No element is in both this set and `other`.
    pub fn is_disjoint(&self, other: impl IntoIterator<Item = T>) -> bool {
        merge::is_disjoint(&self.inner, &SortedSet::from_iter(other).inner)
    }
}

impl<T> EqAny for SortedSet<T>
where
    T: Ord + 'static,
{
    fn eq_any(&self, other: &dyn Any) -> Equality {
        match other.downcast_ref::<SortedSet<T>>() {
            Some(other) => Equality::from_bool(self.inner == other.inner),
            None => Equality::Incomparable,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Constructor-shaped: `SortedSet([1, 2])`, or `SortedSet()` when empty.
impl<T: Debug> Debug for SortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            f.write_str("SortedSet()")
        } else {
            f.debug_tuple("SortedSet").field(&&*self.inner).finish()
        }
    }
}

/// Set literal: `{1, 2}`.
impl<T: Display> Display for SortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.inner.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            Display::fmt(e, f)?;
        }
        f.write_str("}")
    }
}

impl<T> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        SortedSet::new()
    }
}

impl<T> Index<usize> for SortedSet<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<T> AsRef<[T]> for SortedSet<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.inner
    }
}

impl<T> From<Vec<T>> for SortedSet<T>
where
    T: Ord,
{
    fn from(mut inner: Vec<T>) -> SortedSet<T> {
        // Stable sort, so the first of several equal inputs is kept.
        inner.sort();
        inner.dedup();
        SortedSet {
            inner: inner.into_boxed_slice(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SortedSet<T>
where
    T: Ord,
{
    #[inline]
    fn from(array: [T; N]) -> SortedSet<T> {
        SortedSet::from(Vec::from(array))
    }
}

impl<T> From<SortedSet<T>> for Vec<T> {
    #[inline]
    fn from(set: SortedSet<T>) -> Vec<T> {
        set.into_vec()
    }
}

impl<T> FromIterator<T> for SortedSet<T>
where
    T: Ord,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SortedSet::from(Vec::from_iter(iter))
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.inner.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for SortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.inner.iter())
    }
}

/// Input is sorted and deduplicated, like any other construction.
impl<'de, T> Deserialize<'de> for SortedSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(SortedSet::from)
    }
}
