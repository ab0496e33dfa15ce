/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! An immutable set stored as a sorted, deduplicated sequence.
//!
//! [`SortedSet`] is both a sequence (indexing, slicing, ordered iteration)
//! and a set (membership, union, intersection and friends).
//! Lookups are binary searches over the backing slice.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod equality;
mod error;
pub mod sorted_set;

pub use equivalent::Comparable;

pub use crate::equality::Equality;
pub use crate::error::SortedSetError;
pub use crate::sorted_set::SortedSet;
