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

//! # Cursors
//!
//! The cursor model consumed by container implementations: capability tags,
//! the per-cursor traits record, concrete cursors, and the reversing adapter.
//!
//! ## Submodules
//!
//! - `category`: Zero-sized category tags (`InputIteratorTag`,
//!   `OutputIteratorTag`, `ForwardIteratorTag`, `BidirectionalIteratorTag`,
//!   `RandomAccessIteratorTag`) and the refinement lattice (`Input`,
//!   `Forward`, `Bidirectional`, `RandomAccess`, `Output`).
//! - `traits`: The `IteratorTraits` record (value, difference, pointer,
//!   reference, category), its raw-pointer rules, and the capability traits
//!   `Cursor`, `Readable`, `BidirectionalCursor`, `RandomAccessCursor`.
//! - `slice`: `SliceCursor<'a, T>`, a random-access cursor over a slice.
//! - `reverse`: `ReverseCursor<I>`, which walks its base cursor backward
//!   with inverted arithmetic and ordering.
//! - `range`: `CursorRange<I>`, which adapts `[first, last)` to the standard
//!   `Iterator` family.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod category;
pub mod range;
pub mod reverse;
pub mod slice;
pub mod traits;
