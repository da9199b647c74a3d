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

//! # Poison-Free Mutex Wrapper
//!
//! A thin wrapper over [`std::sync::Mutex`] whose `lock` hands back the guard
//! directly instead of a poisoning `Result`. A panic in another thread while
//! it held the lock leaves the data in whatever state that thread produced;
//! callers here prefer continuing over propagating a `PoisonError` through
//! every lock site.

use std::sync::PoisonError;

/// A mutual-exclusion wrapper guarding a single owned value.
///
/// # Examples
///
/// ```rust
/// use fairlead_core::sync::Mutex;
///
/// let counter = Mutex::new(0);
/// {
///     let mut guard = counter.lock();
///     *guard += 1;
/// } // lock released here
/// assert_eq!(*counter.lock(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Mutex<T> {
    inner: std::sync::Mutex<T>,
}

impl<T> Mutex<T> {
    /// Creates a new mutex owning `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            inner: std::sync::Mutex::new(value),
        }
    }

    /// Acquires the lock, blocking the current thread until it is available.
    ///
    /// The returned guard both reads and writes the value and releases the
    /// lock when it goes out of scope. Poisoning is ignored: if a thread
    /// panicked while holding the lock, the guard is recovered as-is.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        MutexGuard {
            inner: self.inner.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Returns a mutable reference to the value, without locking.
    ///
    /// The exclusive borrow of `self` statically guarantees no guard exists.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consumes the mutex, returning the owned value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> From<T> for Mutex<T> {
    #[inline]
    fn from(value: T) -> Self {
        Mutex::new(value)
    }
}

/// A scoped guard granting shared and exclusive access to the value of a
/// [`Mutex`]. The lock is released when the guard is dropped.
#[derive(Debug)]
pub struct MutexGuard<'a, T> {
    inner: std::sync::MutexGuard<'a, T>,
}

impl<T> std::ops::Deref for MutexGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> std::ops::DerefMut for MutexGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}
