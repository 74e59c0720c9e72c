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

//! # Keel Core
//!
//! Foundations for building containers that behave like standard sequence
//! and associative containers. The crate supplies the cursor model that
//! container iterators implement, a reversing cursor adapter, a pair value
//! type, and compile-time type classification. It holds no containers
//! itself.
//!
//! ## Modules
//!
//! - `types`: Compile-time constants (`BoolConstant`, `TrueType`,
//!   `FalseType`), integral classification (`IsIntegral`, `Integral`,
//!   `is_integral`), and conditional types (`EnableIf`, `Select`).
//! - `iter`: Category tags and their refinement lattice, the
//!   `IteratorTraits` record with raw-pointer rules, the cursor capability
//!   traits, `SliceCursor`, `ReverseCursor`, and the `CursorRange` bridge to
//!   `Iterator`.
//! - `utils`: The `Pair` value type and `make_pair`.
//! - `algorithm`: `distance`, `lexicographical_compare`,
//!   `lexicographical_compare_by`, and `to_text`.
//!
//! ## Contracts
//!
//! Every contract is checked by the compiler: a cursor that lacks a
//! capability cannot be passed where it is required, and a type with no
//! traits record cannot be classified. Stepping a cursor outside its range
//! is a precondition violation that the cursor itself may or may not
//! detect; `SliceCursor` catches it in debug builds and on reads.
//!
//! ```rust
//! use keel_core::algorithm::distance;
//! use keel_core::iter::{range::CursorRange, reverse::ReverseCursor, slice::SliceCursor};
//!
//! let data = [1, 2, 3, 4];
//! let rbegin = ReverseCursor::new(SliceCursor::end(&data));
//! let rend = ReverseCursor::new(SliceCursor::begin(&data));
//!
//! assert_eq!(distance(rbegin, rend), 4);
//! assert_eq!(
//!     CursorRange::new(rbegin, rend).copied().collect::<Vec<_>>(),
//!     vec![4, 3, 2, 1]
//! );
//! ```

pub mod algorithm;
pub mod iter;
pub mod types;
pub mod utils;
