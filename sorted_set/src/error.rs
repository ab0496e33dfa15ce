/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

/// Errors produced by fallible [`SortedSet`](crate::SortedSet) queries.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum SortedSetError {
    /// The queried item is not an element of the set.
    #[error("{0} not found")]
    NotFound(String),
    /// Positional access past the end of the set.
    #[error("index {index} is out of range for a set of length {len}")]
    OutOfRange {
        /// Requested position.
        index: usize,
        /// Number of elements in the set.
        len: usize,
    },
    /// Presorted input was not strictly increasing.
    #[error("elements are not strictly increasing at index {index}")]
    NotSorted {
        /// Position of the first element not greater than its predecessor.
        index: usize,
    },
}
