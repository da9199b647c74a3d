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

//! # One-Element Lookahead
//!
//! The standard library's `Peekable` exposes `peek` as an inherent method,
//! which makes it unusable behind a trait object. This module defines an
//! object-safe lookahead contract, [`Peek`], so that heterogeneous peekable
//! sources can be stored and driven through one interface — the k-way merge
//! ranks its sources exactly this way.
//!
//! ## Highlights
//!
//! - [`Peek`] extends [`Iterator`] with `peek` (fill the one-slot buffer on
//!   demand) and `peeked` (observe the buffer without pulling).
//! - [`Peekable`] wraps any iterator, fusing it so exhaustion is terminal:
//!   once `next` returns `None`, every later call does too.
//! - [`BoxedPeek`] is the uniform handle for sources of differing concrete
//!   types; `Box<dyn Peek>` implements both `Iterator` and `Peek`.
//! - [`IteratorExt`] adds `lookahead()` and `boxed_peek()` to every iterator.
//!
//! ## Usage
//!
//! ```rust
//! use fairlead_iter::peek::{IteratorExt, Peek};
//!
//! let mut iter = vec![1, 2, 3].into_iter().lookahead();
//! assert_eq!(iter.peek(), Some(&1));
//! assert_eq!(iter.peek(), Some(&1)); // peeking again does not advance
//! assert_eq!(iter.next(), Some(1));  // exactly one next retires the peek
//! assert_eq!(iter.next(), Some(2));
//! ```

use std::fmt;
use std::iter::{Fuse, FusedIterator};

/// An iterator with one-element lookahead, usable through trait objects.
///
/// The buffered element, if present, is exactly the element the next call to
/// `next` returns; the wrapped source is never queried while the buffer is
/// occupied.
pub trait Peek: Iterator {
    /// Returns a reference to the next element without consuming it, pulling
    /// one element from the underlying source into the buffer if needed.
    ///
    /// Returns `None` iff the sequence is exhausted.
    fn peek(&mut self) -> Option<&Self::Item>;

    /// Returns the buffered element without pulling from the underlying
    /// source.
    ///
    /// Returns `None` both when the sequence is exhausted and when no peek
    /// has occurred since the last consumption; call [`Peek::peek`] to
    /// distinguish the two.
    fn peeked(&self) -> Option<&Self::Item>;
}

impl<P: Peek + ?Sized> Peek for Box<P> {
    #[inline]
    fn peek(&mut self) -> Option<&Self::Item> {
        (**self).peek()
    }

    #[inline]
    fn peeked(&self) -> Option<&Self::Item> {
        (**self).peeked()
    }
}

/// A type-erased peekable source yielding elements of type `T`.
pub type BoxedPeek<'a, T> = Box<dyn Peek<Item = T> + 'a>;

/// An iterator adapter buffering at most one look-ahead element.
///
/// The wrapped iterator is fused, so exhaustion is terminal even if the
/// underlying iterator would resume after returning `None`. The merge engine
/// relies on this: once a source signals exhaustion it is evicted for good.
pub struct Peekable<I: Iterator> {
    iter: Fuse<I>,
    peeked: Option<I::Item>,
}

impl<I: Iterator> Peekable<I> {
    /// Wraps `iter`, starting with an empty lookahead buffer.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            peeked: None,
        }
    }
}

impl<I: Iterator> Iterator for Peekable<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.peeked.take() {
            Some(value) => Some(value),
            None => self.iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.peeked.is_some());
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|u| u.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> FusedIterator for Peekable<I> {}

impl<I: ExactSizeIterator> ExactSizeIterator for Peekable<I> {}

impl<I: Iterator> Peek for Peekable<I> {
    #[inline]
    fn peek(&mut self) -> Option<&I::Item> {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.peeked.as_ref()
    }

    #[inline]
    fn peeked(&self) -> Option<&I::Item> {
        self.peeked.as_ref()
    }
}

impl<I> fmt::Debug for Peekable<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Peekable")
            .field("iter", &self.iter)
            .field("peeked", &self.peeked)
            .finish()
    }
}

/// Lookahead adapters for every iterator.
///
/// # Examples
///
/// ```rust
/// use fairlead_iter::peek::{BoxedPeek, IteratorExt, Peek};
///
/// // Heterogeneous generators behind one handle type.
/// let mut sources: Vec<BoxedPeek<'_, i32>> = vec![
///     vec![1, 2].into_iter().boxed_peek(),
///     (0..3).map(|x| x * 10).boxed_peek(),
/// ];
/// assert_eq!(sources[0].peek(), Some(&1));
/// assert_eq!(sources[1].peek(), Some(&0));
/// ```
pub trait IteratorExt: Iterator {
    /// Wraps this iterator in a [`Peekable`] one-element lookahead adapter.
    #[inline]
    fn lookahead(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    /// Wraps this iterator in a [`Peekable`] and erases it behind a
    /// [`BoxedPeek`] handle.
    #[inline]
    fn boxed_peek<'a>(self) -> BoxedPeek<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(Peekable::new(self))
    }
}

impl<I: Iterator> IteratorExt for I {}
