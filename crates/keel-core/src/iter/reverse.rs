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

//! # Reverse Cursors
//!
//! `ReverseCursor<I>` walks the sequence of its base cursor backward. It
//! holds exactly one base cursor, and the element it designates is the one
//! *before* the base position: a reverse cursor built from `end` reads the
//! last element, and one built from `begin` is the reverse end.
//!
//! ```text
//!            rend         rbegin
//!             |              |
//!   base:   begin  [a] [b] [c]  end
//!   reads:          a   b   c
//!                   ^ read of ReverseCursor(begin + 1)
//! ```
//!
//! Every operation is the mirror image of the base operation:
//!
//! - stepping forward decrements the base, stepping backward increments it;
//! - `r + n` moves the base by `-n`, and `r - n` moves it by `+n`;
//! - `r.at(n)` reads `base.at(-n - 1)`;
//! - ordering is inverted: `a < b` exactly when `a.base() > b.base()`;
//! - `&a - &b` is `b.base() - a.base()`.
//!
//! ```rust
//! use keel_core::iter::reverse::ReverseCursor;
//! use keel_core::iter::slice::SliceCursor;
//! use keel_core::iter::traits::{Cursor, Readable};
//!
//! let data = [1, 2, 3];
//! let mut rev = ReverseCursor::new(SliceCursor::end(&data));
//! let rend = ReverseCursor::new(SliceCursor::begin(&data));
//!
//! let mut seen = Vec::new();
//! while rev != rend {
//!     seen.push(*rev.read());
//!     rev.increment();
//! }
//! assert_eq!(seen, vec![3, 2, 1]);
//! ```

use crate::iter::traits::{
    BidirectionalCursor, Cursor, IteratorTraits, RandomAccessCursor, Readable,
};
use num_traits::One;
use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A cursor that walks its base cursor's sequence in the opposite direction.
///
/// The default value holds a default base cursor.
#[derive(Clone, Copy, Default, Debug)]
pub struct ReverseCursor<I> {
    base: I,
}

impl<I> ReverseCursor<I> {
    /// Creates a reverse cursor over `base`.
    ///
    /// The new cursor designates the element just before `base`.
    #[inline(always)]
    pub const fn new(base: I) -> Self {
        Self { base }
    }

    /// Returns a copy of the base cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::iter::reverse::ReverseCursor;
    /// # use keel_core::iter::slice::SliceCursor;
    /// let data = [1, 2];
    /// let rev = ReverseCursor::new(SliceCursor::end(&data));
    /// assert_eq!(rev.base(), SliceCursor::end(&data));
    /// ```
    #[inline(always)]
    pub fn base(&self) -> I
    where
        I: Clone,
    {
        self.base.clone()
    }

    /// Returns a reference to the base cursor.
    #[inline(always)]
    pub const fn base_ref(&self) -> &I {
        &self.base
    }

    /// Consumes the reverse cursor and returns the base cursor.
    #[inline(always)]
    pub fn into_base(self) -> I {
        self.base
    }

    /// Converts into a reverse cursor over another base type the current base
    /// converts into, keeping the position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::iter::reverse::ReverseCursor;
    /// let narrow = ReverseCursor::new(3u8);
    /// let wide: ReverseCursor<u64> = narrow.convert();
    /// assert_eq!(wide.into_base(), 3u64);
    /// ```
    #[inline]
    pub fn convert<J>(self) -> ReverseCursor<J>
    where
        I: Into<J>,
    {
        ReverseCursor::new(self.base.into())
    }
}

impl<I> ReverseCursor<I>
where
    I: RandomAccessCursor + Readable,
{
    /// Reads the element `n` positions further along the reversed sequence.
    ///
    /// Reads the base cursor at `-n - 1` directly, without building an
    /// intermediate reverse cursor. `r.at(n)` reads the same element as
    /// `(r + n).read()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::iter::reverse::ReverseCursor;
    /// # use keel_core::iter::slice::SliceCursor;
    /// let data = [1, 2, 3, 4];
    /// let rev = ReverseCursor::new(SliceCursor::end(&data));
    /// assert_eq!(*rev.at(0), 4);
    /// assert_eq!(*rev.at(3), 1);
    /// ```
    #[inline]
    pub fn at(&self, n: I::Difference) -> I::Reference {
        self.base.at(-n - I::Difference::one())
    }
}

impl<I> From<I> for ReverseCursor<I> {
    #[inline(always)]
    fn from(base: I) -> Self {
        Self::new(base)
    }
}

impl<I> std::hash::Hash for ReverseCursor<I>
where
    I: std::hash::Hash,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.base.hash(state);
    }
}

impl<I> std::fmt::Display for ReverseCursor<I>
where
    I: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reverse({})", self.base)
    }
}

impl<I> IteratorTraits for ReverseCursor<I>
where
    I: IteratorTraits,
{
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
    type Category = I::Category;
}

impl<I> Cursor for ReverseCursor<I>
where
    I: BidirectionalCursor,
{
    #[inline(always)]
    fn increment(&mut self) {
        self.base.decrement();
    }
}

impl<I> BidirectionalCursor for ReverseCursor<I>
where
    I: BidirectionalCursor,
{
    #[inline(always)]
    fn decrement(&mut self) {
        self.base.increment();
    }
}

impl<I> RandomAccessCursor for ReverseCursor<I>
where
    I: RandomAccessCursor,
{
    #[inline]
    fn advance_by(&mut self, n: I::Difference) {
        self.base.advance_by(-n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> I::Difference {
        other.base.distance_to(&self.base)
    }
}

impl<I> Readable for ReverseCursor<I>
where
    I: BidirectionalCursor + Readable,
{
    /// Reads the element just before the base position.
    ///
    /// The reverse cursor itself is left untouched; a copy of the base is
    /// stepped back and read.
    #[inline]
    fn read(&self) -> I::Reference {
        let mut previous = self.base.clone();
        previous.decrement();
        previous.read()
    }

    #[inline]
    fn pointer(&self) -> I::Pointer {
        let mut previous = self.base.clone();
        previous.decrement();
        previous.pointer()
    }
}

impl<I, J> PartialEq<ReverseCursor<J>> for ReverseCursor<I>
where
    I: PartialEq<J>,
{
    #[inline(always)]
    fn eq(&self, other: &ReverseCursor<J>) -> bool {
        self.base == other.base
    }
}

impl<I> Eq for ReverseCursor<I> where I: Eq {}

impl<I, J> PartialOrd<ReverseCursor<J>> for ReverseCursor<I>
where
    I: PartialOrd<J>,
{
    #[inline]
    fn partial_cmp(&self, other: &ReverseCursor<J>) -> Option<Ordering> {
        self.base.partial_cmp(&other.base).map(Ordering::reverse)
    }

    #[inline(always)]
    fn lt(&self, other: &ReverseCursor<J>) -> bool {
        self.base > other.base
    }

    #[inline(always)]
    fn le(&self, other: &ReverseCursor<J>) -> bool {
        self.base >= other.base
    }

    #[inline(always)]
    fn gt(&self, other: &ReverseCursor<J>) -> bool {
        self.base < other.base
    }

    #[inline(always)]
    fn ge(&self, other: &ReverseCursor<J>) -> bool {
        self.base <= other.base
    }
}

impl<I> Ord for ReverseCursor<I>
where
    I: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.base.cmp(&self.base)
    }
}

impl<I> Add<I::Difference> for ReverseCursor<I>
where
    I: RandomAccessCursor,
{
    type Output = Self;

    #[inline]
    fn add(mut self, n: I::Difference) -> Self {
        self.base.advance_by(-n);
        self
    }
}

impl<I> Sub<I::Difference> for ReverseCursor<I>
where
    I: RandomAccessCursor,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, n: I::Difference) -> Self {
        self.base.advance_by(n);
        self
    }
}

impl<I> AddAssign<I::Difference> for ReverseCursor<I>
where
    I: RandomAccessCursor,
{
    #[inline]
    fn add_assign(&mut self, n: I::Difference) {
        self.base.advance_by(-n);
    }
}

impl<I> SubAssign<I::Difference> for ReverseCursor<I>
where
    I: RandomAccessCursor,
{
    #[inline]
    fn sub_assign(&mut self, n: I::Difference) {
        self.base.advance_by(n);
    }
}

/// `&lhs - &rhs` is `rhs.base() - lhs.base()`: how many reverse steps lead
/// from `rhs` to `lhs`.
impl<I> Sub for &ReverseCursor<I>
where
    I: RandomAccessCursor,
{
    type Output = I::Difference;

    #[inline]
    fn sub(self, rhs: Self) -> I::Difference {
        self.base.distance_to(&rhs.base)
    }
}

macro_rules! impl_offset_plus_reverse_cursor {
    ($($t:ty),* $(,)?) => {
        $(
            impl<I> Add<ReverseCursor<I>> for $t
            where
                I: RandomAccessCursor<Difference = $t>,
            {
                type Output = ReverseCursor<I>;

                #[inline]
                fn add(self, rev: ReverseCursor<I>) -> ReverseCursor<I> {
                    rev + self
                }
            }
        )*
    };
}

impl_offset_plus_reverse_cursor!(i8, i16, i32, i64, i128, isize);
