// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Ordering Predicates
//!
//! A small trait-based abstraction over total orderings so that collections
//! and iterators can be generic over how elements compare without requiring
//! `T: Ord` on the element type itself.
//!
//! ## Highlights
//!
//! - [`Compare`] is the caller-supplied ordering predicate used by
//!   `MinHeap` and the merging iterator.
//! - [`NaturalOrder`] is a zero-sized comparator delegating to [`Ord`] and
//!   serves as the default type parameter wherever a comparator appears.
//! - [`OrderBy`] adapts any `Fn(&T, &T) -> Ordering` closure into a
//!   [`Compare`] implementation.
//!
//! ## Usage
//!
//! ```rust
//! use std::cmp::Ordering;
//! use fairlead_core::cmp::{Compare, NaturalOrder, OrderBy};
//!
//! let natural = NaturalOrder;
//! assert_eq!(natural.compare(&1, &2), Ordering::Less);
//!
//! let reverse = OrderBy::new(|a: &i32, b: &i32| b.cmp(a));
//! assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total ordering over values of type `T`.
///
/// Implementors must be consistent: for any `a`, `b`, `c`, the reported
/// ordering must be antisymmetric and transitive, exactly as required of
/// [`Ord`]. Collections built on a `Compare` instance assume this and do not
/// re-validate it.
pub trait Compare<T> {
    /// Compares two values, returning their relative ordering.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` orders strictly before `b`.
    #[inline]
    fn compares_lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// The natural ordering of a type, delegating to its [`Ord`] implementation.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fairlead_core::cmp::{Compare, NaturalOrder};
///
/// assert_eq!(NaturalOrder.compare(&3, &3), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// An ordering predicate backed by a comparison closure.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fairlead_core::cmp::{Compare, OrderBy};
///
/// // Order pairs by their second component only.
/// let by_second = OrderBy::new(|a: &(i32, i32), b: &(i32, i32)| a.1.cmp(&b.1));
/// assert_eq!(by_second.compare(&(9, 1), &(0, 2)), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrderBy<F> {
    f: F,
}

impl<F> OrderBy<F> {
    /// Creates a new `OrderBy` from a comparison closure.
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Compare<T> for OrderBy<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b)
    }
}
