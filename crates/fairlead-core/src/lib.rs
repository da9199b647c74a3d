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

//! # Fairlead Core
//!
//! Foundational building blocks for the Fairlead iteration toolkit. This
//! crate consolidates the reusable primitives that the higher-level iterator
//! crates compose: caller-supplied ordering predicates, integer helpers,
//! categorical I/O error mapping, a poison-free mutex wrapper, and an
//! array-backed binary min-heap with an exclusive root-mutation handle.
//!
//! ## Modules
//!
//! - `cmp`: The [`Compare`](cmp::Compare) ordering predicate trait together
//!   with the [`NaturalOrder`](cmp::NaturalOrder) and
//!   [`OrderBy`](cmp::OrderBy) comparators.
//! - `collections`: The [`MinHeap`](collections::min_heap::MinHeap) binary
//!   heap whose root can be mutated in place through a scoped
//!   [`PeekMut`](collections::min_heap::PeekMut) handle.
//! - `error`: Categorical I/O errors ([`ErrorKind`](error::ErrorKind),
//!   [`Error`](error::Error)) mapped from raw OS error codes.
//! - `num`: Generic power-of-two helpers over unsigned primitive integers.
//! - `sync`: A [`Mutex`](sync::Mutex) wrapper whose `lock` never surfaces
//!   poisoning at the call site.
//!
//! ## Purpose
//!
//! These primitives enable robust, generic code in lazy-iteration and merge
//! pipelines, reducing accidental bugs (index mixing, overflow, heap-order
//! violations) while keeping runtime overhead minimal.
//!
//! Refer to each module for detailed APIs and examples.

pub mod cmp;
pub mod collections;
pub mod error;
pub mod num;
pub mod sync;
