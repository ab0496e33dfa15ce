/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Linear merges over strictly increasing slices.
//!
//! Every output is itself strictly increasing, so callers may wrap it
//! without re-sorting.

use std::cmp::Ordering;

pub(crate) fn union<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                out.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

pub(crate) fn intersection<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Elements of `a` not in `b`.
pub(crate) fn difference<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i].clone());
                i += 1;
            }
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out
}

pub(crate) fn symmetric_difference<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Every element of `a` is in `b`.
pub(crate) fn is_subset<T: Ord>(a: &[T], b: &[T]) -> bool {
    if a.len() > b.len() {
        return false;
    }
    let mut j = 0;
    for x in a {
        loop {
            match b.get(j).map(|y| x.cmp(y)) {
                None | Some(Ordering::Less) => return false,
                Some(Ordering::Greater) => j += 1,
                Some(Ordering::Equal) => {
                    j += 1;
                    break;
                }
            }
        }
    }
    true
}

pub(crate) fn is_disjoint<T: Ord>(a: &[T], b: &[T]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::sorted_set::merge;

    #[test]
    fn test_union() {
        assert_eq!(vec![1, 2, 3, 4], merge::union(&[1, 2, 3], &[2, 3, 4]));
        assert_eq!(vec![1, 2], merge::union(&[], &[1, 2]));
        assert_eq!(vec![1, 2], merge::union(&[1, 2], &[]));
    }

    #[test]
    fn test_intersection() {
        assert_eq!(vec![2, 3], merge::intersection(&[1, 2, 3], &[2, 3, 4]));
        assert_eq!(Vec::<i32>::new(), merge::intersection(&[1, 3], &[2, 4]));
    }

    #[test]
    fn test_difference() {
        assert_eq!(vec![1], merge::difference(&[1, 2, 3], &[2, 3, 4]));
        assert_eq!(vec![4], merge::difference(&[2, 3, 4], &[1, 2, 3]));
        assert_eq!(vec![1, 5, 9], merge::difference(&[1, 5, 9], &[0, 2, 8]));
    }

    #[test]
    fn test_symmetric_difference() {
        assert_eq!(
            vec![1, 4],
            merge::symmetric_difference(&[1, 2, 3], &[2, 3, 4])
        );
        assert_eq!(
            Vec::<i32>::new(),
            merge::symmetric_difference(&[1, 2], &[1, 2])
        );
    }

    #[test]
    fn test_is_subset() {
        assert!(merge::is_subset::<i32>(&[], &[]));
        assert!(merge::is_subset(&[], &[1]));
        assert!(merge::is_subset(&[2, 4], &[1, 2, 3, 4]));
        assert!(!merge::is_subset(&[2, 5], &[1, 2, 3, 4]));
        assert!(!merge::is_subset(&[0, 2], &[1, 2, 3, 4]));
        assert!(!merge::is_subset(&[1, 2, 3], &[1, 2]));
    }

    #[test]
    fn test_is_disjoint() {
        assert!(merge::is_disjoint(&[1, 3, 5], &[2, 4, 6]));
        assert!(!merge::is_disjoint(&[1, 3, 5], &[5, 7]));
        assert!(merge::is_disjoint::<i32>(&[], &[1]));
    }
}
