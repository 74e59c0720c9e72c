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

//! # Iterator Categories
//!
//! Zero-sized tags naming what a cursor can do, and marker traits that
//! arrange them into the refinement lattice
//!
//! ```text
//! Input <- Forward <- Bidirectional <- RandomAccess        Output
//! ```
//!
//! A tag implements the marker trait of its own category and of every
//! weaker one, so a bound such as `C: Forward` accepts the forward,
//! bidirectional, and random-access tags alike. `Output` stands apart.
//! Tags are never inspected at runtime; they exist to be named in bounds.
//!
//! ```rust
//! use keel_core::iter::category::{
//!     Bidirectional, BidirectionalIteratorTag, ForwardIteratorTag, RandomAccessIteratorTag,
//! };
//!
//! fn needs_bidirectional<C: Bidirectional>(_: C) -> &'static str {
//!     C::NAME
//! }
//!
//! assert_eq!(needs_bidirectional(RandomAccessIteratorTag), "random_access_iterator_tag");
//!
//! // Stronger tags narrow to weaker ones.
//! let tag: ForwardIteratorTag = BidirectionalIteratorTag.into();
//! assert_eq!(tag, ForwardIteratorTag);
//! ```

/// Common behavior of every category tag.
pub trait IteratorCategory:
    Copy + Default + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display + 'static
{
    /// Human-readable tag name.
    const NAME: &'static str;
}

/// Cursors that can be read while stepping forward once.
pub trait Input: IteratorCategory {}

/// Cursors that can be written through while stepping forward once.
pub trait Output: IteratorCategory {}

/// Multi-pass cursors stepping forward.
pub trait Forward: Input {}

/// Cursors that also step backward.
pub trait Bidirectional: Forward {}

/// Cursors that jump by arbitrary offsets in constant time.
pub trait RandomAccess: Bidirectional {}

macro_rules! define_tag {
    ($(#[$meta:meta])* $name:ident, $display:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name;

        impl IteratorCategory for $name {
            const NAME: &'static str = $display;
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", Self::NAME)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", Self::NAME)
            }
        }
    };
}

define_tag!(
    /// Tag of single-pass readable cursors.
    InputIteratorTag,
    "input_iterator_tag"
);
define_tag!(
    /// Tag of single-pass writable cursors.
    OutputIteratorTag,
    "output_iterator_tag"
);
define_tag!(
    /// Tag of multi-pass forward cursors.
    ForwardIteratorTag,
    "forward_iterator_tag"
);
define_tag!(
    /// Tag of cursors that step in both directions.
    BidirectionalIteratorTag,
    "bidirectional_iterator_tag"
);
define_tag!(
    /// Tag of cursors with constant-time offset arithmetic.
    RandomAccessIteratorTag,
    "random_access_iterator_tag"
);

impl Output for OutputIteratorTag {}

impl Input for InputIteratorTag {}

impl Input for ForwardIteratorTag {}
impl Forward for ForwardIteratorTag {}

impl Input for BidirectionalIteratorTag {}
impl Forward for BidirectionalIteratorTag {}
impl Bidirectional for BidirectionalIteratorTag {}

impl Input for RandomAccessIteratorTag {}
impl Forward for RandomAccessIteratorTag {}
impl Bidirectional for RandomAccessIteratorTag {}
impl RandomAccess for RandomAccessIteratorTag {}

macro_rules! impl_narrowing {
    ($from:ident => $($to:ident),+) => {
        $(
            impl From<$from> for $to {
                #[inline(always)]
                fn from(_: $from) -> Self {
                    $to
                }
            }
        )+
    };
}

impl_narrowing!(ForwardIteratorTag => InputIteratorTag);
impl_narrowing!(BidirectionalIteratorTag => ForwardIteratorTag, InputIteratorTag);
impl_narrowing!(
    RandomAccessIteratorTag => BidirectionalIteratorTag, ForwardIteratorTag, InputIteratorTag
);
