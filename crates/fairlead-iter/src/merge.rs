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

//! # K-Way Sorted Merge
//!
//! [`MergingIterator`] combines N independently sorted peekable sources into
//! one globally ordered lazy sequence, consuming exactly one element from
//! exactly one source per yielded element.
//!
//! ## Motivation
//!
//! The engine ranks sources in a [`MinHeap`] by their currently buffered head
//! element. Yielding advances the winning source, which changes its rank; the
//! heap's [`PeekMut`] handle scopes that mutation so the heap is repaired by
//! a single root sift-down instead of a rebuild. Sources never buffer more
//! than their one-element lookahead, so merging is lazy end to end.
//!
//! ## Tie-breaking
//!
//! When two sources' heads compare equal, which source is drained first is
//! unspecified (heap mechanics, not a stable merge). Callers that need
//! stability must tag elements with a source index and fold it into the
//! ordering.
//!
//! ## Usage
//!
//! ```rust
//! use fairlead_iter::merge::MergingIterator;
//! use fairlead_iter::peek::IteratorExt;
//!
//! let merged: Vec<i32> = MergingIterator::new(vec![
//!     vec![0, 2, 4, 6, 8].into_iter().boxed_peek(),
//!     vec![1, 3, 5, 7, 9].into_iter().boxed_peek(),
//! ])
//! .collect();
//! assert_eq!(merged, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```

use crate::peek::{BoxedPeek, Peek};
use fairlead_core::cmp::{Compare, NaturalOrder};
use fairlead_core::collections::min_heap::{MinHeap, PeekMut};
use std::cmp::Ordering;
use std::iter::FusedIterator;

/// Ranks two sources by their buffered head elements.
///
/// Every source inside the merge heap has a buffered head; a source without
/// one is a broken invariant, reported as a panic rather than an ordering.
struct HeadCmp<C> {
    cmp: C,
}

impl<'a, T, C: Compare<T>> Compare<BoxedPeek<'a, T>> for HeadCmp<C> {
    #[inline]
    fn compare(&self, a: &BoxedPeek<'a, T>, b: &BoxedPeek<'a, T>) -> Ordering {
        match (a.peeked(), b.peeked()) {
            (Some(x), Some(y)) => self.cmp.compare(x, y),
            _ => panic!("merge source in the heap has no buffered head"),
        }
    }
}

/// A lazy k-way merge over N sorted peekable sources.
///
/// Yields all elements of all sources in combined sorted order under the
/// supplied ordering, assuming each source is itself sorted under it.
/// Elements are returned by value, so the iterator is freely movable and no
/// heap handle outlives a call to `next`.
///
/// Empty sources are dropped at construction and evicted as they run dry;
/// once every source is exhausted the iterator is terminally empty.
///
/// # Examples
///
/// Merging with a caller-supplied ordering:
///
/// ```rust
/// use fairlead_core::cmp::OrderBy;
/// use fairlead_iter::merge::MergingIterator;
/// use fairlead_iter::peek::IteratorExt;
///
/// let reverse = OrderBy::new(|a: &i32, b: &i32| b.cmp(a));
/// let merged: Vec<i32> = MergingIterator::with_cmp(
///     vec![
///         vec![9, 5, 1].into_iter().boxed_peek(),
///         vec![8, 4].into_iter().boxed_peek(),
///     ],
///     reverse,
/// )
/// .collect();
/// assert_eq!(merged, vec![9, 8, 5, 4, 1]);
/// ```
pub struct MergingIterator<'a, T, C = NaturalOrder> {
    heap: MinHeap<BoxedPeek<'a, T>, HeadCmp<C>>,
}

impl<'a, T: Ord> MergingIterator<'a, T> {
    /// Builds a merge over `sources` under the natural ordering of `T`.
    ///
    /// Already exhausted sources are dropped before the heap is built; a
    /// collection of zero sources yields an empty sequence.
    #[inline]
    pub fn new(sources: Vec<BoxedPeek<'a, T>>) -> Self {
        Self::with_cmp(sources, NaturalOrder)
    }
}

impl<'a, T, C: Compare<T>> MergingIterator<'a, T, C> {
    /// Builds a merge over `sources` under the ordering `cmp`.
    ///
    /// Each surviving source has its head buffered as a side effect of the
    /// exhaustion check, which the heap's ranking depends on.
    pub fn with_cmp(mut sources: Vec<BoxedPeek<'a, T>>, cmp: C) -> Self {
        sources.retain_mut(|source| source.peek().is_some());
        Self {
            heap: MinHeap::from_vec_with(sources, HeadCmp { cmp }),
        }
    }

    /// Returns the number of sources that still have elements to yield.
    #[inline]
    pub fn live_sources(&self) -> usize {
        self.heap.len()
    }
}

impl<'a, T, C: Compare<T>> Iterator for MergingIterator<'a, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut top = self.heap.peek_mut()?;
        let item = top.next();
        debug_assert!(
            item.is_some(),
            "merge source in the heap has no buffered head"
        );
        if top.peek().is_none() {
            // The winning source ran dry: evict it and repair the heap.
            PeekMut::pop(top);
        }
        // Otherwise releasing `top` re-sifts the heap with the source's
        // new head.
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut lower = 0usize;
        let mut upper = Some(0usize);
        for source in self.heap.iter() {
            let (lo, hi) = source.size_hint();
            lower = lower.saturating_add(lo);
            upper = match (upper, hi) {
                (Some(u), Some(h)) => u.checked_add(h),
                _ => None,
            };
        }
        (lower, upper)
    }
}

impl<'a, T, C: Compare<T>> FusedIterator for MergingIterator<'a, T, C> {}
