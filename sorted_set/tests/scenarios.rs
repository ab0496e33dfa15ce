/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Behaviour of `SortedSet` as seen by a caller of the public API.

use std::collections::BTreeSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sorted_set::SortedSet;
use sorted_set::SortedSetError;
use sorted_set::equality::EqAny;
use sorted_set::equality::Equality;

static_assertions::assert_impl_all!(SortedSet<u32>: Send, Sync);

#[test]
fn test_construct_and_query() {
    let s = SortedSet::from([5, 3, 5, 1, 4, 3]);
    assert_eq!(vec![1, 3, 4, 5], s.iter().copied().collect::<Vec<_>>());
    assert_eq!(4, s.len());
    assert!(s.contains(&3));
    assert!(!s.contains(&2));
    assert_eq!(Ok(2), s.index_of(&4));
    assert!(matches!(s.index_of(&2), Err(SortedSetError::NotFound(_))));
}

#[test]
fn test_slice_from_one() {
    assert_eq!(
        SortedSet::from([2, 3]),
        SortedSet::from([1, 2, 3]).slice(1..)
    );
}

#[test]
fn test_equality_is_order_insensitive() {
    assert_eq!(SortedSet::from([1, 2]), SortedSet::from([2, 1]));
    assert_eq!(
        Equality::Incomparable,
        SortedSet::from([1, 2]).eq_any(&[1, 2])
    );
}

#[test]
fn test_repeat() {
    let s = SortedSet::from([1, 2, 3]);
    assert!(s.repeat(0).is_empty());
    assert_eq!(vec![1, 2, 3], s.repeat(2).into_vec());
}

#[test]
fn test_set_algebra() {
    let s = SortedSet::from([1, 2, 3]);
    assert_eq!(vec![1, 2, 3, 4], s.union([2, 3, 4]).into_vec());
    assert_eq!(vec![2, 3], s.intersection([2, 3, 4]).into_vec());
    assert_eq!(vec![1, 4], s.symmetric_difference([2, 3, 4]).into_vec());
}

fn random_values(rng: &mut SmallRng, max_len: usize, range: u32) -> Vec<u32> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(0..range)).collect()
}

#[test]
fn test_agrees_with_btree_set() {
    let mut rng = SmallRng::seed_from_u64(17);
    for _ in 0..200 {
        let xs = random_values(&mut rng, 40, 50);
        let ys = random_values(&mut rng, 40, 50);

        let s = SortedSet::from_iter(xs.iter().copied());
        let t = SortedSet::from_iter(ys.iter().copied());
        let bs = BTreeSet::from_iter(xs.iter().copied());
        let bt = BTreeSet::from_iter(ys.iter().copied());

        assert_eq!(bs.iter().collect::<Vec<_>>(), s.iter().collect::<Vec<_>>());
        assert!(s.as_slice().windows(2).all(|w| w[0] < w[1]));
        for x in 0..50 {
            assert_eq!(bs.contains(&x), s.contains(&x));
            assert_eq!(s.contains(&x), s.index_of(&x).is_ok());
            assert_eq!(usize::from(bs.contains(&x)), s.count(&x));
        }
        for (i, x) in s.iter().enumerate() {
            assert_eq!(Ok(i), s.index_of(x));
        }

        assert_eq!(
            bs.union(&bt).copied().collect::<Vec<_>>(),
            s.union(ys.iter().copied()).into_vec()
        );
        assert_eq!(
            bs.intersection(&bt).copied().collect::<Vec<_>>(),
            s.intersection(ys.iter().copied()).into_vec()
        );
        assert_eq!(
            bs.difference(&bt).copied().collect::<Vec<_>>(),
            s.difference(ys.iter().copied()).into_vec()
        );
        assert_eq!(
            bs.symmetric_difference(&bt).copied().collect::<Vec<_>>(),
            s.symmetric_difference(ys.iter().copied()).into_vec()
        );
        assert_eq!(bs.is_subset(&bt), s.is_subset(ys.iter().copied()));
        assert_eq!(bs.is_superset(&bt), s.is_superset(ys.iter().copied()));
        assert_eq!(bs.is_disjoint(&bt), s.is_disjoint(ys.iter().copied()));
        assert_eq!(bs == bt, s == t);
    }
}

#[test]
fn test_round_trip_and_idempotence() {
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..50 {
        let s = SortedSet::from(random_values(&mut rng, 30, 100));
        assert_eq!(s, SortedSet::from_iter(s.iter().copied()));
        assert_eq!(s, s.union(s.clone()));
        assert_eq!(s, s.intersection(s.clone()));
        assert!(s.difference(s.clone()).is_empty());
    }
}

#[test]
fn test_shared_across_threads() {
    let s = SortedSet::from_iter(0..1000u32);
    std::thread::scope(|scope| {
        for t in 0..4u32 {
            let s = &s;
            scope.spawn(move || {
                for i in (t..1000).step_by(4) {
                    assert_eq!(1, s.count(&i));
                }
            });
        }
    });
}
