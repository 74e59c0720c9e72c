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

//! # Slice Cursors
//!
//! `SliceCursor<'a, T>` is a random-access cursor over a borrowed slice. Its
//! position runs from `0` (the first element) to `len` (one past the last
//! element); reads borrow for the slice's lifetime, not the cursor's, so a
//! cursor can be copied, moved, and dropped while the references it handed
//! out live on.
//!
//! ```rust
//! use keel_core::iter::slice::SliceCursor;
//! use keel_core::iter::traits::{Cursor, RandomAccessCursor, Readable};
//!
//! let data = [1, 2, 3];
//! let mut cursor = SliceCursor::begin(&data);
//! assert_eq!(*cursor.read(), 1);
//!
//! cursor.increment();
//! assert_eq!(*cursor.read(), 2);
//! assert_eq!(cursor.distance_to(&SliceCursor::end(&data)), 2);
//! ```

use crate::iter::{
    category::RandomAccessIteratorTag,
    traits::{BidirectionalCursor, Cursor, IteratorTraits, RandomAccessCursor, Readable},
};

/// A random-access cursor into a borrowed slice.
///
/// Two cursors are equal when they share the same slice start and position;
/// they are ordered only when they walk the same slice. Comparisons against a
/// raw `*const T` go by address instead.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at `position` in `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `position > slice.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::iter::slice::SliceCursor;
    /// let data = [4, 5, 6];
    /// let cursor = SliceCursor::new(&data, 3);
    /// assert_eq!(cursor, SliceCursor::end(&data));
    /// ```
    #[inline]
    pub fn new(slice: &'a [T], position: usize) -> Self {
        assert!(
            position <= slice.len(),
            "Invalid cursor: position {} is past the end of a slice of length {}",
            position,
            slice.len()
        );
        Self { slice, position }
    }

    /// Creates a cursor at `position` in `slice` if the position is valid.
    ///
    /// Returns `None` if `position > slice.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::iter::slice::SliceCursor;
    /// let data = [4, 5, 6];
    /// assert!(SliceCursor::try_new(&data, 3).is_some());
    /// assert!(SliceCursor::try_new(&data, 4).is_none());
    /// ```
    #[inline]
    pub fn try_new(slice: &'a [T], position: usize) -> Option<Self> {
        if position <= slice.len() {
            Some(Self { slice, position })
        } else {
            None
        }
    }

    /// Cursor at the first element.
    #[inline(always)]
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, position: 0 }
    }

    /// Cursor one past the last element.
    #[inline(always)]
    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            position: slice.len(),
        }
    }

    /// Returns the position within the slice.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the slice the cursor walks.
    #[inline(always)]
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// Returns the element at the position, or `None` at the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::iter::slice::SliceCursor;
    /// let data = ['x'];
    /// assert_eq!(SliceCursor::begin(&data).try_read(), Some(&'x'));
    /// assert_eq!(SliceCursor::end(&data).try_read(), None);
    /// ```
    #[inline]
    pub fn try_read(&self) -> Option<&'a T> {
        self.slice.get(self.position)
    }

    #[inline(always)]
    fn same_slice(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    #[inline]
    fn default() -> Self {
        Self {
            slice: &[],
            position: 0,
        }
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.same_slice(other) && self.position == other.position
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.same_slice(other) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl<T> PartialEq<*const T> for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &*const T) -> bool {
        std::ptr::eq(self.pointer(), *other)
    }
}

impl<T> PartialOrd<*const T> for SliceCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &*const T) -> Option<std::cmp::Ordering> {
        self.pointer().partial_cmp(other)
    }
}

impl<T> From<SliceCursor<'_, T>> for *const T {
    /// Drops the borrow and keeps the address the cursor points at.
    #[inline(always)]
    fn from(cursor: SliceCursor<'_, T>) -> Self {
        cursor.pointer()
    }
}

impl<T> std::fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceCursor")
            .field("position", &self.position)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> std::fmt::Display for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SliceCursor({}/{})", self.position, self.slice.len())
    }
}

impl<'a, T> IteratorTraits for SliceCursor<'a, T> {
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = &'a T;
    type Category = RandomAccessIteratorTag;
}

impl<T> Cursor for SliceCursor<'_, T> {
    #[inline(always)]
    fn increment(&mut self) {
        debug_assert!(
            self.position < self.slice.len(),
            "called `increment` on a cursor at the end of its slice"
        );
        self.position += 1;
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline(always)]
    fn decrement(&mut self) {
        debug_assert!(
            self.position > 0,
            "called `decrement` on a cursor at the start of its slice"
        );
        self.position = self.position.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        let target = self.position.wrapping_add_signed(n);
        debug_assert!(
            target <= self.slice.len(),
            "called `advance_by` with an offset leaving the slice"
        );
        self.position = target;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(
            self.same_slice(other),
            "called `distance_to` on cursors of different slices"
        );
        other.position as isize - self.position as isize
    }
}

impl<'a, T> Readable for SliceCursor<'a, T> {
    /// Reads the element at the position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of its slice.
    #[inline]
    fn read(&self) -> &'a T {
        &self.slice[self.position]
    }

    #[inline]
    fn pointer(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.position)
    }
}
