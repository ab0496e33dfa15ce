/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Equality between values whose types are only known at runtime.
//!
//! Comparing a value against something of an unrelated type does not fail:
//! it yields [`Equality::Incomparable`], and the caller decides whether to
//! try the comparison the other way around or treat the values as unequal.

use std::any::Any;

/// Outcome of a type-erased equality check.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Equality {
    /// Both values have the same type and are equal.
    Equal,
    /// Both values have the same type and differ.
    NotEqual,
    /// The values cannot be compared by this implementation.
    Incomparable,
}

impl Equality {
    /// `Equal` or `NotEqual`.
    #[inline]
    pub fn from_bool(eq: bool) -> Equality {
        if eq {
            Equality::Equal
        } else {
            Equality::NotEqual
        }
    }

    /// Whether the check reached a verdict.
    #[inline]
    pub fn is_comparable(self) -> bool {
        self != Equality::Incomparable
    }

    /// Swap `Equal` and `NotEqual`; `Incomparable` stays.
    #[inline]
    pub fn negate(self) -> Equality {
        match self {
            Equality::Equal => Equality::NotEqual,
            Equality::NotEqual => Equality::Equal,
            Equality::Incomparable => Equality::Incomparable,
        }
    }

    /// Run `fallback` only when this check was inconclusive.
    #[inline]
    pub fn or_else(self, fallback: impl FnOnce() -> Equality) -> Equality {
        match self {
            Equality::Incomparable => fallback(),
            verdict => verdict,
        }
    }

    /// Treat incomparable values as unequal.
    #[inline]
    pub fn unwrap_or_unequal(self) -> bool {
        self == Equality::Equal
    }
}

/// Equality against an arbitrary `&dyn Any`.
pub trait EqAny: Any {
    /// Compare `self` with `other`.
    ///
    /// Must return [`Equality::Incomparable`] rather than panic when `other`
    /// is of a type this implementation does not understand.
    fn eq_any(&self, other: &dyn Any) -> Equality;

    /// `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

/// Compare two type-erased values.
///
/// Asks `lhs` first, then `rhs`, and falls back to "not equal" when neither
/// side knows how to compare against the other.
pub fn equals(lhs: &dyn EqAny, rhs: &dyn EqAny) -> bool {
    lhs.eq_any(rhs.as_any())
        .or_else(|| rhs.eq_any(lhs.as_any()))
        .unwrap_or_unequal()
}

/// Type-erased inequality, with the same fallback order as [`equals`].
pub fn not_equals(lhs: &dyn EqAny, rhs: &dyn EqAny) -> bool {
    !equals(lhs, rhs)
}
