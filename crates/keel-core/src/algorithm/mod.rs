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

use crate::iter::traits::{Cursor, Readable};
use num_traits::{One, Zero};
use std::borrow::Borrow;

/// Counts the forward steps from `first` to `last`.
///
/// `last` must be reachable from `first`; otherwise the count never ends.
///
/// # Examples
///
/// ```rust
/// # use keel_core::algorithm::distance;
/// # use keel_core::iter::slice::SliceCursor;
/// let data = [1, 2, 3];
/// assert_eq!(distance(SliceCursor::begin(&data), SliceCursor::end(&data)), 3);
/// ```
#[inline]
pub fn distance<I>(mut first: I, last: I) -> I::Difference
where
    I: Cursor,
{
    let mut n = <I::Difference as Zero>::zero();
    while first != last {
        first.increment();
        n = n + <I::Difference as One>::one();
    }
    n
}

/// Returns `true` if `[first1, last1)` orders strictly before
/// `[first2, last2)` under `<`.
///
/// Elements are compared pairwise until one pair decides; if one range is a
/// prefix of the other, the shorter range orders first.
///
/// # Examples
///
/// ```rust
/// # use keel_core::algorithm::lexicographical_compare;
/// # use keel_core::iter::slice::SliceCursor;
/// let abc = b"abc";
/// let abd = b"abd";
/// assert!(lexicographical_compare(
///     SliceCursor::begin(abc), SliceCursor::end(abc),
///     SliceCursor::begin(abd), SliceCursor::end(abd),
/// ));
/// ```
#[inline]
pub fn lexicographical_compare<I1, I2>(first1: I1, last1: I1, first2: I2, last2: I2) -> bool
where
    I1: Cursor + Readable,
    I2: Cursor + Readable<Value = I1::Value>,
    I1::Reference: Borrow<I1::Value>,
    I2::Reference: Borrow<I1::Value>,
    I1::Value: PartialOrd,
{
    lexicographical_compare_by(first1, last1, first2, last2, |a, b| a < b)
}

/// Returns `true` if `[first1, last1)` orders strictly before
/// `[first2, last2)` under the strict ordering `less`.
///
/// `less(a, b)` answers whether `a` orders before `b`. It is called in both
/// argument orders for each compared position.
///
/// # Examples
///
/// ```rust
/// # use keel_core::algorithm::lexicographical_compare_by;
/// # use keel_core::iter::slice::SliceCursor;
/// let upper = ["B", "A"];
/// let lower = ["b", "b"];
/// assert!(lexicographical_compare_by(
///     SliceCursor::begin(&upper), SliceCursor::end(&upper),
///     SliceCursor::begin(&lower), SliceCursor::end(&lower),
///     |a, b| a.to_lowercase() < b.to_lowercase(),
/// ));
/// ```
pub fn lexicographical_compare_by<I1, I2, F>(
    mut first1: I1,
    last1: I1,
    mut first2: I2,
    last2: I2,
    mut less: F,
) -> bool
where
    I1: Cursor + Readable,
    I2: Cursor + Readable<Value = I1::Value>,
    I1::Reference: Borrow<I1::Value>,
    I2::Reference: Borrow<I1::Value>,
    F: FnMut(&I1::Value, &I1::Value) -> bool,
{
    while first1 != last1 {
        if first2 == last2 {
            return false;
        }
        let lhs = first1.read();
        let rhs = first2.read();
        if less(rhs.borrow(), lhs.borrow()) {
            return false;
        }
        if less(lhs.borrow(), rhs.borrow()) {
            return true;
        }
        first1.increment();
        first2.increment();
    }
    first2 != last2
}

/// Renders `value` with its default `Display` formatting.
///
/// # Examples
///
/// ```rust
/// # use keel_core::algorithm::to_text;
/// assert_eq!(to_text(&42), "42");
/// assert_eq!(to_text(&-1.5), "-1.5");
/// ```
#[inline]
pub fn to_text<T>(value: &T) -> String
where
    T: std::fmt::Display + ?Sized,
{
    value.to_string()
}
