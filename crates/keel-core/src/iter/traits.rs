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

//! # Iterator Traits and Cursor Capabilities
//!
//! A cursor is a position in a sequence that can be compared, stepped, and,
//! depending on its capabilities, read, stepped backward, or moved by an
//! arbitrary offset. This module defines the record of associated types
//! every cursor carries (`IteratorTraits`) and the capability traits that
//! generic algorithms bound on.
//!
//! ## The traits record
//!
//! `IteratorTraits` names five types: the value type, the signed difference
//! type, the pointer type, the reference type produced by a read, and the
//! category tag. A cursor type declares its record by implementing the
//! trait. Raw pointers get a synthesized record without declaring anything:
//!
//! | type | Value | Difference | Pointer | Reference | Category |
//! |------|-------|------------|---------|-----------|----------|
//! | `*const T` | `T` | `isize` | `*const T` | `*const T` | random access |
//! | `*mut T` | `T` | `isize` | `*mut T` | `*mut T` | random access |
//!
//! A raw pointer cannot name a borrow, so its reference type is the pointer
//! itself and reads stay behind `unsafe` at the call site.
//!
//! ## Capabilities
//!
//! - `Cursor`: equality and single forward steps.
//! - `Readable`: produces the reference (and pointer) at the position.
//! - `BidirectionalCursor`: single backward steps; category at least
//!   bidirectional.
//! - `RandomAccessCursor`: signed offsets and distances in one step;
//!   category random access.
//!
//! A type that implements none of these cannot be handed to the algorithms
//! or adapters of this crate; the mismatch is reported by the compiler.
//! Asking for the record of a type that is not a cursor is rejected the
//! same way:
//!
//! ```compile_fail
//! use keel_core::iter::traits::ValueOf;
//!
//! let value: ValueOf<String> = String::new();
//! ```

use crate::iter::category::{
    Bidirectional, IteratorCategory, RandomAccess, RandomAccessIteratorTag,
};
use num_traits::{PrimInt, Signed};

/// Signed integer type measuring the distance between two cursors.
pub trait Difference: PrimInt + Signed + std::fmt::Debug {}

impl<T> Difference for T where T: PrimInt + Signed + std::fmt::Debug {}

/// The record of associated types of a cursor.
pub trait IteratorTraits {
    /// The type of the elements the cursor points to.
    type Value;
    /// Signed type of the distance between two cursors.
    type Difference: Difference;
    /// Pointer to an element.
    type Pointer;
    /// What a read produces.
    type Reference;
    /// The capability tier of the cursor.
    type Category: IteratorCategory;
}

/// The value type of cursor `I`.
pub type ValueOf<I> = <I as IteratorTraits>::Value;

/// The difference type of cursor `I`.
pub type DifferenceOf<I> = <I as IteratorTraits>::Difference;

/// The pointer type of cursor `I`.
pub type PointerOf<I> = <I as IteratorTraits>::Pointer;

/// The reference type of cursor `I`.
pub type ReferenceOf<I> = <I as IteratorTraits>::Reference;

/// The category tag of cursor `I`.
pub type CategoryOf<I> = <I as IteratorTraits>::Category;

/// A position that can be compared and stepped forward.
pub trait Cursor: IteratorTraits + Clone + PartialEq {
    /// Steps one position forward.
    fn increment(&mut self);

    /// Steps one position forward and returns the position before the step.
    #[inline]
    fn post_increment(&mut self) -> Self {
        let previous = self.clone();
        self.increment();
        previous
    }
}

/// A position whose element can be read.
pub trait Readable: IteratorTraits {
    /// Reads the element at the position.
    ///
    /// The position must refer to an element; what happens otherwise is up
    /// to the implementing cursor.
    fn read(&self) -> Self::Reference;

    /// Returns a pointer to the element at the position.
    fn pointer(&self) -> Self::Pointer;
}

/// A cursor that also steps backward.
pub trait BidirectionalCursor: Cursor<Category: Bidirectional> {
    /// Steps one position backward.
    fn decrement(&mut self);

    /// Steps one position backward and returns the position before the step.
    #[inline]
    fn post_decrement(&mut self) -> Self {
        let previous = self.clone();
        self.decrement();
        previous
    }
}

/// A cursor that moves by arbitrary signed offsets in one step.
///
/// Ordering follows position: `a < b` when `a` precedes `b` in the sequence.
pub trait RandomAccessCursor: BidirectionalCursor<Category: RandomAccess> + PartialOrd {
    /// Moves by `n` positions; negative `n` moves backward.
    fn advance_by(&mut self, n: Self::Difference);

    /// Returns `other - self`: how many forward steps lead from `self` to `other`.
    fn distance_to(&self, other: &Self) -> Self::Difference;

    /// Returns a copy moved by `n` positions.
    #[inline]
    fn moved_by(&self, n: Self::Difference) -> Self {
        let mut moved = self.clone();
        moved.advance_by(n);
        moved
    }

    /// Reads the element `n` positions away.
    #[inline]
    fn at(&self, n: Self::Difference) -> Self::Reference
    where
        Self: Readable,
    {
        self.moved_by(n).read()
    }
}

macro_rules! impl_raw_pointer_cursor {
    ($ptr:ty) => {
        impl<T> IteratorTraits for $ptr {
            type Value = T;
            type Difference = isize;
            type Pointer = $ptr;
            type Reference = $ptr;
            type Category = RandomAccessIteratorTag;
        }

        impl<T> Cursor for $ptr {
            #[inline(always)]
            fn increment(&mut self) {
                *self = self.wrapping_add(1);
            }
        }

        impl<T> BidirectionalCursor for $ptr {
            #[inline(always)]
            fn decrement(&mut self) {
                *self = self.wrapping_sub(1);
            }
        }

        impl<T> RandomAccessCursor for $ptr {
            #[inline(always)]
            fn advance_by(&mut self, n: isize) {
                *self = self.wrapping_offset(n);
            }

            #[inline]
            fn distance_to(&self, other: &Self) -> isize {
                let size = std::mem::size_of::<T>();
                debug_assert!(size != 0, "called `distance_to` on pointers to a zero-sized type");
                (*other as usize).wrapping_sub(*self as usize) as isize / size.max(1) as isize
            }
        }
    };
}

impl_raw_pointer_cursor!(*const T);
impl_raw_pointer_cursor!(*mut T);

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn traits_of<I>() -> [TypeId; 5]
    where
        I: IteratorTraits,
        I::Value: 'static,
        I::Difference: 'static,
        I::Pointer: 'static,
        I::Reference: 'static,
    {
        [
            TypeId::of::<ValueOf<I>>(),
            TypeId::of::<DifferenceOf<I>>(),
            TypeId::of::<PointerOf<I>>(),
            TypeId::of::<ReferenceOf<I>>(),
            TypeId::of::<CategoryOf<I>>(),
        ]
    }

    #[test]
    fn test_const_pointer_traits_are_synthesized() {
        assert_eq!(
            traits_of::<*const u32>(),
            [
                TypeId::of::<u32>(),
                TypeId::of::<isize>(),
                TypeId::of::<*const u32>(),
                TypeId::of::<*const u32>(),
                TypeId::of::<RandomAccessIteratorTag>(),
            ]
        );
    }

    #[test]
    fn test_mut_pointer_traits_are_synthesized() {
        assert_eq!(
            traits_of::<*mut String>(),
            [
                TypeId::of::<String>(),
                TypeId::of::<isize>(),
                TypeId::of::<*mut String>(),
                TypeId::of::<*mut String>(),
                TypeId::of::<RandomAccessIteratorTag>(),
            ]
        );
    }

    #[test]
    fn test_raw_pointer_stepping() {
        let data = [10u64, 20, 30, 40];
        let begin = data.as_ptr();
        let end = begin.wrapping_add(data.len());

        let mut p = begin;
        p.increment();
        assert_eq!(p, begin.wrapping_add(1));
        let before = p.post_increment();
        assert_eq!(before, begin.wrapping_add(1));
        assert_eq!(p, begin.wrapping_add(2));

        p.decrement();
        assert_eq!(p, begin.wrapping_add(1));
        assert_eq!(p.post_decrement(), begin.wrapping_add(1));
        assert_eq!(p, begin);

        assert_eq!(begin.distance_to(&end), 4);
        assert_eq!(end.distance_to(&begin), -4);
        assert_eq!(begin.moved_by(3), end.wrapping_sub(1));
        assert!(begin < end);

        // SAFETY: `begin.moved_by(2)` points at the third element of `data`.
        assert_eq!(unsafe { *begin.moved_by(2) }, 30);
    }
}
