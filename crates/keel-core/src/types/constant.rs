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

//! # Compile-Time Constants
//!
//! Zero-sized types that carry a single constant value at the type level.
//! `BoolConstant<B>` is the outcome type of every classification in
//! [`crate::types`]; the per-width integer constants let generic code carry
//! sizes or offsets in a type without storing them.
//!
//! ```rust
//! use keel_core::types::constant::{FalseType, IntegralConstant, TrueType, UsizeConstant};
//!
//! assert!(TrueType::VALUE);
//! assert!(!FalseType::VALUE);
//! assert_eq!(UsizeConstant::<16>::VALUE, 16);
//! ```

/// A type that stands for a single compile-time value.
pub trait IntegralConstant: Copy + Default {
    /// The type of the carried value.
    type ValueType: Copy;

    /// The carried value.
    const VALUE: Self::ValueType;

    /// Returns the carried value.
    ///
    /// Useful when a constant is passed around as a zero-sized value rather
    /// than named as a type.
    #[inline(always)]
    fn value(self) -> Self::ValueType {
        Self::VALUE
    }
}

/// A compile-time boolean.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoolConstant<const B: bool>;

impl<const B: bool> IntegralConstant for BoolConstant<B> {
    type ValueType = bool;
    const VALUE: bool = B;
}

/// The compile-time `true`.
pub type TrueType = BoolConstant<true>;

/// The compile-time `false`.
pub type FalseType = BoolConstant<false>;

impl<const B: bool> std::fmt::Debug for BoolConstant<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoolConstant({})", B)
    }
}

impl<const B: bool> std::fmt::Display for BoolConstant<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", B)
    }
}

impl<const B: bool> From<BoolConstant<B>> for bool {
    #[inline(always)]
    fn from(_: BoolConstant<B>) -> Self {
        B
    }
}

macro_rules! impl_integer_constant {
    ($name:ident, $t:ty) => {
        #[doc = concat!("A compile-time `", stringify!($t), "`.")]
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<const V: $t>;

        impl<const V: $t> IntegralConstant for $name<V> {
            type ValueType = $t;
            const VALUE: $t = V;
        }

        impl<const V: $t> std::fmt::Debug for $name<V> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), V)
            }
        }

        impl<const V: $t> std::fmt::Display for $name<V> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", V)
            }
        }
    };
}

impl_integer_constant!(I8Constant, i8);
impl_integer_constant!(I16Constant, i16);
impl_integer_constant!(I32Constant, i32);
impl_integer_constant!(I64Constant, i64);
impl_integer_constant!(I128Constant, i128);
impl_integer_constant!(IsizeConstant, isize);
impl_integer_constant!(U8Constant, u8);
impl_integer_constant!(U16Constant, u16);
impl_integer_constant!(U32Constant, u32);
impl_integer_constant!(U64Constant, u64);
impl_integer_constant!(U128Constant, u128);
impl_integer_constant!(UsizeConstant, usize);
impl_integer_constant!(CharConstant, char);
