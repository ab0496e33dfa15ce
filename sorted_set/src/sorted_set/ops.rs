/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Operator forms of the set operations, in the style of `BTreeSet`.

use std::ops::Add;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::BitXor;
use std::ops::Mul;
use std::ops::Sub;

use crate::sorted_set::SortedSet;
use crate::sorted_set::merge;

/// `a + b` is [`SortedSet::concat`].
impl<T: Ord + Clone> Add<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn add(self, rhs: &SortedSet<T>) -> SortedSet<T> {
        self.concat(rhs)
    }
}

/// `s * n` is [`SortedSet::repeat`].
impl<T: Ord + Clone> Mul<i64> for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn mul(self, n: i64) -> SortedSet<T> {
        self.repeat(n)
    }
}

/// `n * s` is [`SortedSet::repeat`].
impl<T: Ord + Clone> Mul<&SortedSet<T>> for i64 {
    type Output = SortedSet<T>;

    fn mul(self, set: &SortedSet<T>) -> SortedSet<T> {
        set.repeat(self)
    }
}

impl<T: Ord + Clone> BitOr<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn bitor(self, rhs: &SortedSet<T>) -> SortedSet<T> {
        SortedSet::new_unchecked(merge::union(&self.inner, &rhs.inner))
    }
}

impl<T: Ord + Clone> BitAnd<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn bitand(self, rhs: &SortedSet<T>) -> SortedSet<T> {
        SortedSet::new_unchecked(merge::intersection(&self.inner, &rhs.inner))
    }
}

impl<T: Ord + Clone> Sub<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn sub(self, rhs: &SortedSet<T>) -> SortedSet<T> {
        SortedSet::new_unchecked(merge::difference(&self.inner, &rhs.inner))
    }
}

impl<T: Ord + Clone> BitXor<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn bitxor(self, rhs: &SortedSet<T>) -> SortedSet<T> {
        SortedSet::new_unchecked(merge::symmetric_difference(&self.inner, &rhs.inner))
    }
}
