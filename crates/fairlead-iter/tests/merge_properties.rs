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

//! Randomized properties of the k-way merge and its supporting heap.

use fairlead_core::collections::min_heap::MinHeap;
use fairlead_iter::merge::MergingIterator;
use fairlead_iter::peek::{BoxedPeek, IteratorExt};
use proptest::prelude::*;

proptest! {
    /// Merging any collection of sorted sources yields the sorted
    /// concatenation of all inputs: sorted, a permutation, length-equal.
    #[test]
    fn merge_yields_sorted_permutation_of_all_inputs(
        sources in prop::collection::vec(
            prop::collection::vec(-1000i64..1000, 0..24),
            0..8,
        )
    ) {
        let sorted_sources: Vec<Vec<i64>> = sources
            .into_iter()
            .map(|mut s| {
                s.sort();
                s
            })
            .collect();

        let mut expected: Vec<i64> = sorted_sources.iter().flatten().copied().collect();
        expected.sort();

        let boxed: Vec<BoxedPeek<'static, i64>> = sorted_sources
            .into_iter()
            .map(|s| s.into_iter().boxed_peek())
            .collect();
        let merged: Vec<i64> = MergingIterator::new(boxed).collect();

        prop_assert_eq!(merged, expected);
    }

    /// Draining a heap yields a non-decreasing permutation of its input.
    #[test]
    fn heap_drains_sorted_permutation(input in prop::collection::vec(-1000i64..1000, 0..64)) {
        let mut heap = MinHeap::from_vec(input.clone());
        let mut drained = Vec::with_capacity(input.len());
        while let Some(x) = heap.pop() {
            drained.push(x);
        }

        prop_assert!(drained.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = input;
        expected.sort();
        prop_assert_eq!(drained, expected);
    }

    /// Mutating the root through `peek_mut` replaces exactly that element.
    #[test]
    fn heap_peek_mut_replaces_only_the_root(
        input in prop::collection::vec(-1000i64..1000, 1..32),
        replacement in -2000i64..2000,
    ) {
        let mut heap = MinHeap::from_vec(input.clone());
        let old_root = *heap.peek().unwrap();
        if let Some(mut root) = heap.peek_mut() {
            *root = replacement;
        }

        let mut drained = Vec::with_capacity(input.len());
        while let Some(x) = heap.pop() {
            drained.push(x);
        }
        prop_assert!(drained.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = input;
        let pos = expected.iter().position(|&x| x == old_root).unwrap();
        expected[pos] = replacement;
        expected.sort();
        prop_assert_eq!(drained, expected);
    }
}
