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

//! # Numeric Helpers
//!
//! Generic power-of-two utilities over unsigned primitive integers, written
//! once against `num_traits` instead of per-type.

use num_traits::{PrimInt, Unsigned};

/// Returns `true` if `x` is a power of two.
///
/// Zero is not a power of two.
///
/// # Examples
///
/// ```rust
/// use fairlead_core::num::is_power_of_two;
///
/// assert!(is_power_of_two(64u32));
/// assert!(!is_power_of_two(0u32));
/// assert!(!is_power_of_two(48u64));
/// ```
#[inline]
pub fn is_power_of_two<T>(x: T) -> bool
where
    T: PrimInt + Unsigned,
{
    x.count_ones() == 1
}

/// Returns the smallest power of two greater than or equal to `x`.
///
/// # Panics
///
/// Panics if the result does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// use fairlead_core::num::next_power_of_two;
///
/// assert_eq!(next_power_of_two(0u32), 1);
/// assert_eq!(next_power_of_two(5u32), 8);
/// assert_eq!(next_power_of_two(64u32), 64);
/// ```
#[inline]
pub fn next_power_of_two<T>(x: T) -> T
where
    T: PrimInt + Unsigned,
{
    let mut n = T::one();
    while n < x {
        assert!(
            n <= T::max_value() >> 1,
            "called `next_power_of_two` with a value whose next power of two overflows the integer type"
        );
        n = n << 1;
    }
    n
}
