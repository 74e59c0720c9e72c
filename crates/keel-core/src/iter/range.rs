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

//! # Cursor Ranges
//!
//! `CursorRange<I>` turns a half-open pair of cursors `[first, last)` into a
//! standard iterator, so cursor-based sequences plug into `for` loops,
//! adapters, and `collect`.
//!
//! ## Highlights
//!
//! - Implements `Iterator` for readable cursors, yielding each read.
//! - Supports `DoubleEndedIterator` when the cursor is bidirectional, and is
//!   always a `FusedIterator`.
//! - `reversed` swaps in `ReverseCursor` bounds: `[rev(last), rev(first))`.
//! - `len` and `is_empty` in one step for random-access cursors.
//!
//! ## Usage
//!
//! ```rust
//! use keel_core::iter::range::CursorRange;
//!
//! let data = [1, 2, 3];
//! let forward: Vec<i32> = CursorRange::from_slice(&data).copied().collect();
//! let backward: Vec<i32> = CursorRange::from_slice(&data).reversed().copied().collect();
//!
//! assert_eq!(forward, vec![1, 2, 3]);
//! assert_eq!(backward, vec![3, 2, 1]);
//! ```

use crate::iter::{
    reverse::ReverseCursor,
    slice::SliceCursor,
    traits::{BidirectionalCursor, Cursor, RandomAccessCursor, Readable},
};
use num_traits::{ToPrimitive, Zero};
use std::iter::FusedIterator;

/// The half-open range `[first, last)` between two cursors.
///
/// `last` must be reachable from `first` by forward steps.
#[derive(Debug, Clone)]
pub struct CursorRange<I> {
    front: I,
    back: I,
}

impl<I> CursorRange<I> {
    /// Creates the range `[first, last)`.
    #[inline]
    pub fn new(first: I, last: I) -> Self {
        Self {
            front: first,
            back: last,
        }
    }

    /// Returns the cursor at the front of what remains.
    #[inline(always)]
    pub fn first(&self) -> &I {
        &self.front
    }

    /// Returns the cursor one past the back of what remains.
    #[inline(always)]
    pub fn last(&self) -> &I {
        &self.back
    }

    /// Consumes the range and returns its bounds.
    #[inline]
    pub fn into_bounds(self) -> (I, I) {
        (self.front, self.back)
    }
}

impl<'a, T> CursorRange<SliceCursor<'a, T>> {
    /// The range over every element of `slice`.
    #[inline]
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self::new(SliceCursor::begin(slice), SliceCursor::end(slice))
    }
}

impl<I> CursorRange<I>
where
    I: BidirectionalCursor,
{
    /// The same elements in the opposite order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::iter::range::CursorRange;
    /// let data = ["x", "y"];
    /// let reversed: Vec<_> = CursorRange::from_slice(&data).reversed().collect();
    /// assert_eq!(reversed, vec![&"y", &"x"]);
    /// ```
    #[inline]
    pub fn reversed(self) -> CursorRange<ReverseCursor<I>> {
        CursorRange::new(ReverseCursor::new(self.back), ReverseCursor::new(self.front))
    }
}

impl<I> CursorRange<I>
where
    I: RandomAccessCursor,
{
    /// Number of elements left.
    ///
    /// # Panics
    ///
    /// Panics if the remaining length exceeds `usize::MAX`.
    #[inline]
    pub fn len(&self) -> usize {
        let dist = self.front.distance_to(&self.back);
        debug_assert!(
            dist >= I::Difference::zero(),
            "CursorRange: `last` precedes `first`"
        );
        dist.to_usize()
            .expect("CursorRange: remaining length exceeds usize::MAX")
    }

    /// Whether no elements are left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }
}

impl<I> Iterator for CursorRange<I>
where
    I: Cursor + Readable,
{
    type Item = I::Reference;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.read();
        self.front.increment();
        Some(item)
    }
}

impl<I> DoubleEndedIterator for CursorRange<I>
where
    I: BidirectionalCursor + Readable,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.decrement();
        Some(self.back.read())
    }
}

impl<I> FusedIterator for CursorRange<I> where I: Cursor + Readable {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_iteration() {
        let data = vec![10, 20, 30];
        let mut range = CursorRange::from_slice(&data);

        assert_eq!(range.next(), Some(&10));
        assert_eq!(range.next(), Some(&20));
        assert_eq!(range.next(), Some(&30));
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn test_double_ended_iteration_meets_in_the_middle() {
        let data = [1, 2, 3, 4, 5];
        let mut range = CursorRange::from_slice(&data);

        assert_eq!(range.next(), Some(&1));
        assert_eq!(range.next_back(), Some(&5));
        assert_eq!(range.next_back(), Some(&4));
        assert_eq!(range.next(), Some(&2));
        assert_eq!(range.next(), Some(&3));
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
    }

    #[test]
    fn test_reversed_matches_std_rev() {
        let data = [3, 1, 4, 1, 5, 9, 2, 6];
        let ours: Vec<_> = CursorRange::from_slice(&data).reversed().collect();
        let theirs: Vec<_> = data.iter().rev().collect();
        assert_eq!(ours, theirs);
    }

    #[test]
    fn test_reversed_twice_is_forward() {
        let data = ['k', 'e', 'e', 'l'];
        let twice: String = CursorRange::from_slice(&data)
            .reversed()
            .reversed()
            .copied()
            .collect();
        assert_eq!(twice, "keel");
    }

    #[test]
    fn test_len_and_is_empty() {
        let data = [1, 2, 3, 4];
        let mut range = CursorRange::from_slice(&data);
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());

        range.next();
        range.next_back();
        assert_eq!(range.len(), 2);

        let reversed = range.reversed();
        assert_eq!(reversed.len(), 2);

        let empty: CursorRange<SliceCursor<'_, i32>> = CursorRange::from_slice(&[]);
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_bounds_after_partial_iteration() {
        let data = [1, 2, 3];
        let mut range = CursorRange::from_slice(&data);
        range.next();
        let (first, last) = range.into_bounds();
        assert_eq!(first.position(), 1);
        assert_eq!(last.position(), 3);
    }
}
