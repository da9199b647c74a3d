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

//! # Fairlead Iter
//!
//! Lazy, single-pass iteration building blocks on top of the standard
//! [`Iterator`] contract: a one-element lookahead adapter that is usable
//! through trait objects, and a k-way merging iterator that combines N
//! independently sorted sources into one globally ordered sequence.
//!
//! ## Modules
//!
//! - `peek`: The object-safe [`Peek`](peek::Peek) lookahead contract, the
//!   [`Peekable`](peek::Peekable) adapter buffering at most one element, the
//!   [`BoxedPeek`](peek::BoxedPeek) type-erased handle, and the
//!   [`IteratorExt`](peek::IteratorExt) extension trait.
//! - `merge`: The [`MergingIterator`](merge::MergingIterator) k-way merge,
//!   driven by a min-heap of sources ranked by their buffered heads.
//!
//! ## Purpose
//!
//! Everything here is pull-based and single-threaded: a consumer drives the
//! pipeline one `next` at a time, sources are read at most one element ahead,
//! and exhaustion is a terminal data condition rather than a blocking wait.

pub mod merge;
pub mod peek;
