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

//! # Binary Min-Heap with Exclusive Root Mutation
//!
//! An array-backed binary min-heap ordered by a caller-supplied
//! [`Compare`] predicate, with a scoped [`PeekMut`] handle that grants
//! exclusive mutable access to the root and repairs the heap when released.
//!
//! ## Motivation
//!
//! The k-way merging iterator ranks N sources by their current head element.
//! Advancing the winning source changes its rank, so the heap must allow the
//! root's key to be mutated in place and then re-sifted. `PeekMut` expresses
//! that window as a mutable borrow of the heap: while the handle is alive,
//! the borrow checker statically rejects every other heap operation, so the
//! temporary heap-property violation at the root can never be observed.
//!
//! ## Highlights
//!
//! - Bulk O(n) bottom-up heapify at construction; elements are only added at
//!   construction time (the merge engine never needs a generic push).
//! - `peek`/`pop` with the usual swap-with-last, sift-down repair.
//! - [`PeekMut`] derefs to the root; releasing it re-sifts iff the root was
//!   mutably observed, while [`PeekMut::pop`] removes the root instead.
//! - Generic over the ordering via [`Compare`], defaulting to
//!   [`NaturalOrder`].
//!
//! ## Usage
//!
//! ```rust
//! use fairlead_core::collections::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::from_vec(vec![3, 6, 4, 1, 7]);
//!
//! let mut drained = Vec::new();
//! while let Some(x) = heap.pop() {
//!     drained.push(x);
//! }
//! assert_eq!(drained, vec![1, 3, 4, 6, 7]);
//! ```

use crate::cmp::{Compare, NaturalOrder};
use std::ops::{Deref, DerefMut};

/// An array-backed binary min-heap ordered by a [`Compare`] predicate.
///
/// Node `i`'s children live at `2i + 1` and `2i + 2`. The heap property
/// (parent orders at or before both children) holds on entry to and exit
/// from every public operation; only a live [`PeekMut`] may suspend it at
/// the root, and the exclusive borrow it holds keeps that window private.
///
/// # Examples
///
/// ```rust
/// use fairlead_core::cmp::OrderBy;
/// use fairlead_core::collections::min_heap::MinHeap;
///
/// // A max-heap is a min-heap under the reversed ordering.
/// let reverse = OrderBy::new(|a: &i32, b: &i32| b.cmp(a));
/// let mut heap = MinHeap::from_vec_with(vec![3, 6, 4, 1, 7], reverse);
/// assert_eq!(heap.pop(), Some(7));
/// assert_eq!(heap.pop(), Some(6));
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T, C = NaturalOrder> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap under the natural ordering of `T`.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            cmp: NaturalOrder,
        }
    }

    /// Builds a heap from `data` under the natural ordering of `T`.
    ///
    /// Heapifies in place, bottom-up, in O(n).
    #[inline]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_with(data, NaturalOrder)
    }
}

impl<T: Ord> Default for MinHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Builds a heap from `data` under the ordering `cmp`.
    ///
    /// Heapifies in place by sifting down every internal node from the last
    /// parent to the root, O(n).
    pub fn from_vec_with(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a shared reference to the smallest element, or `None` if the
    /// heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns an iterator over the elements in unspecified order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes and returns the smallest element, or `None` if the heap is
    /// empty.
    ///
    /// The root is replaced by the last element in array order and sifted
    /// down to repair the heap property.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.remove_root())
    }

    /// Grants exclusive mutable access to the smallest element, or `None` if
    /// the heap is empty.
    ///
    /// The returned [`PeekMut`] mutably borrows the heap, so the borrow
    /// checker rejects any other heap operation (including a second
    /// `peek_mut`) while the handle is alive:
    ///
    /// ```compile_fail
    /// use fairlead_core::collections::min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![3, 1, 2]);
    /// let root = heap.peek_mut().unwrap();
    /// heap.pop(); // error: the heap is exclusively borrowed by `root`
    /// drop(root);
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fairlead_core::collections::min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![2, 5, 9]);
    /// if let Some(mut root) = heap.peek_mut() {
    ///     *root = 7;
    /// } // releasing the handle re-sifts the mutated root
    /// assert_eq!(heap.pop(), Some(5));
    /// assert_eq!(heap.pop(), Some(7));
    /// ```
    #[inline]
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, T, C>> {
        if self.data.is_empty() {
            return None;
        }
        Some(PeekMut {
            heap: self,
            sift: false,
        })
    }

    /// Consumes the heap, returning the backing vector in unspecified order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Removes the root, replacing it with the last element in array order
    /// and sifting the new root down.
    fn remove_root(&mut self) -> T {
        debug_assert!(
            !self.data.is_empty(),
            "called `MinHeap::remove_root` on an empty heap"
        );
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        root
    }

    /// Restores the heap property for the subtree rooted at `pos`, assuming
    /// both child subtrees already satisfy it.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        debug_assert!(
            pos < len,
            "called `MinHeap::sift_down` with position out of bounds: the len is {} but the position is {}",
            len,
            pos
        );
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                return;
            }
            let mut smallest = pos;
            if self.cmp.compares_lt(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            let right = left + 1;
            if right < len && self.cmp.compares_lt(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }
            if smallest == pos {
                return;
            }
            self.data.swap(pos, smallest);
            pos = smallest;
        }
    }
}

/// A scoped handle granting exclusive mutable access to the root of a
/// [`MinHeap`].
///
/// While the handle is alive the root may order after its children; the heap
/// is repaired when the handle is released. A plain release sifts the root
/// down iff it was mutably observed, [`PeekMut::pop`] removes the root
/// instead.
///
/// Exclusivity is a compile-time guarantee, not a runtime check:
///
/// ```compile_fail
/// use fairlead_core::collections::min_heap::MinHeap;
///
/// let mut heap = MinHeap::from_vec(vec![3, 1, 2]);
/// let first = heap.peek_mut().unwrap();
/// let second = heap.peek_mut().unwrap(); // error: second exclusive borrow
/// drop(first);
/// ```
#[derive(Debug)]
pub struct PeekMut<'a, T, C: Compare<T>> {
    heap: &'a mut MinHeap<T, C>,
    sift: bool,
}

impl<T, C: Compare<T>> PeekMut<'_, T, C> {
    /// Removes and returns the root, consuming the handle.
    ///
    /// This replaces the sift-down-in-place that a plain release would
    /// perform: the root is swapped with the last element, removed, and the
    /// heap repaired.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fairlead_core::collections::min_heap::{MinHeap, PeekMut};
    ///
    /// let mut heap = MinHeap::from_vec(vec![2, 5, 9]);
    /// let root = heap.peek_mut().unwrap();
    /// assert_eq!(PeekMut::pop(root), 2);
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[inline]
    pub fn pop(mut this: Self) -> T {
        let root = this.heap.remove_root();
        // The heap is already repaired; suppress the sift on drop.
        this.sift = false;
        root
    }
}

impl<T, C: Compare<T>> Deref for PeekMut<'_, T, C> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        // The handle is only created for a non-empty heap, and no operation
        // can shrink the heap while it is borrowed.
        &self.heap.data[0]
    }
}

impl<T, C: Compare<T>> DerefMut for PeekMut<'_, T, C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.sift = true;
        &mut self.heap.data[0]
    }
}

impl<T, C: Compare<T>> Drop for PeekMut<'_, T, C> {
    #[inline]
    fn drop(&mut self) {
        if self.sift {
            self.heap.sift_down(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmp::OrderBy;

    fn drain<T, C: Compare<T>>(mut heap: MinHeap<T, C>) -> Vec<T> {
        let mut out = Vec::with_capacity(heap.len());
        while let Some(x) = heap.pop() {
            out.push(x);
        }
        out
    }

    #[test]
    fn test_new_and_default_are_empty() {
        let heap: MinHeap<i32> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        let heap: MinHeap<i32> = Default::default();
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn test_pop_on_empty_returns_none() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.pop(), None);
        assert!(heap.peek_mut().is_none());
    }

    #[test]
    fn test_from_vec_drains_sorted() {
        let heap = MinHeap::from_vec(vec![3, 6, 4, 1, 7]);
        assert_eq!(drain(heap), vec![1, 3, 4, 6, 7]);
    }

    #[test]
    fn test_single_and_two_elements() {
        let heap = MinHeap::from_vec(vec![42]);
        assert_eq!(drain(heap), vec![42]);

        let heap = MinHeap::from_vec(vec![2, 1]);
        assert_eq!(drain(heap), vec![1, 2]);
    }

    #[test]
    fn test_duplicates_preserve_cardinality() {
        let heap = MinHeap::from_vec(vec![5, 1, 5, 1, 5]);
        assert_eq!(drain(heap), vec![1, 1, 5, 5, 5]);
    }

    #[test]
    fn test_pops_are_non_decreasing_permutation() {
        let input = vec![9, 2, 8, 2, 7, 0, 5, 4, 4, 1, 6, 3];
        let heap = MinHeap::from_vec(input.clone());
        let drained = drain(heap);

        assert!(drained.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = input;
        expected.sort();
        assert_eq!(drained, expected);
    }

    #[test]
    fn test_peek_is_stable_and_non_consuming() {
        let heap = MinHeap::from_vec(vec![3, 6, 4, 1, 7]);
        for _ in 0..10 {
            assert_eq!(heap.peek(), Some(&1));
        }
        assert_eq!(heap.len(), 5);
        assert!(!heap.is_empty());
    }

    #[test]
    fn test_reverse_comparator_acts_as_max_heap() {
        let reverse = OrderBy::new(|a: &i32, b: &i32| b.cmp(a));
        let heap = MinHeap::from_vec_with(vec![3, 6, 4, 1, 7], reverse);
        assert_eq!(drain(heap), vec![7, 6, 4, 3, 1]);
    }

    #[test]
    fn test_peek_mut_release_resifts_mutated_root() {
        let mut heap = MinHeap::from_vec(vec![1, 3, 4, 6, 7]);
        {
            let mut root = heap.peek_mut().unwrap();
            assert_eq!(*root, 1);
            *root = 5;
        }
        // Same multiset as before except 1 replaced by 5, re-sorted.
        assert_eq!(drain(heap), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_peek_mut_without_mutation_leaves_heap_intact() {
        let mut heap = MinHeap::from_vec(vec![2, 5, 9]);
        {
            let root = heap.peek_mut().unwrap();
            assert_eq!(*root, 2);
        }
        assert_eq!(drain(heap), vec![2, 5, 9]);
    }

    #[test]
    fn test_peek_mut_pop_removes_root() {
        let mut heap = MinHeap::from_vec(vec![2, 5, 9]);
        let root = heap.peek_mut().unwrap();
        assert_eq!(PeekMut::pop(root), 2);
        assert_eq!(heap.len(), 2);
        assert_eq!(drain(heap), vec![5, 9]);
    }

    #[test]
    fn test_peek_mut_mutate_then_pop_returns_new_value() {
        let mut heap = MinHeap::from_vec(vec![2, 5, 9]);
        let mut root = heap.peek_mut().unwrap();
        *root = 11;
        assert_eq!(PeekMut::pop(root), 11);
        assert_eq!(drain(heap), vec![5, 9]);
    }

    #[test]
    fn test_iter_visits_every_element() {
        let heap = MinHeap::from_vec(vec![3, 1, 2]);
        let mut seen: Vec<i32> = heap.iter().copied().collect();
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_into_vec_preserves_cardinality() {
        let heap = MinHeap::from_vec(vec![4, 2, 4]);
        let mut v = heap.into_vec();
        v.sort();
        assert_eq!(v, vec![2, 4, 4]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut heap = MinHeap::from_vec(vec![3, 1, 2]);
        let copy = heap.clone();
        heap.pop();
        assert_eq!(copy.len(), 3);
        assert_eq!(drain(copy), vec![1, 2, 3]);
    }
}
