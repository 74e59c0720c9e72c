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

//! # Integral Classification
//!
//! `IsIntegral` answers, at compile time, whether a type is one of the
//! primitive integral types: `bool`, `char`, and every signed and unsigned
//! integer width. Floating-point and compound types answer `false`. A type
//! that has no `IsIntegral` impl at all cannot be classified, and asking is
//! a compile error.
//!
//! `Integral` is the bound form of the same question. Generic code that must
//! only accept integral types, for example a container constructor that
//! takes `(count, value)` and must not be confused with one that takes a
//! cursor pair, constrains its parameter with `T: Integral`.
//!
//! ```rust
//! use keel_core::types::integral::{is_integral, Integral};
//!
//! const _: () = assert!(is_integral::<u16>());
//! assert!(is_integral::<bool>());
//! assert!(!is_integral::<f32>());
//!
//! fn widen<T: Integral + Into<i128>>(value: T) -> i128 {
//!     value.into()
//! }
//! assert_eq!(widen(7u8), 7);
//! ```

use crate::types::constant::{FalseType, IntegralConstant, TrueType};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Compile-time classification of a type as integral or not.
pub trait IsIntegral {
    /// `TrueType` for integral types, `FalseType` otherwise.
    type Output: IntegralConstant<ValueType = bool>;

    /// The classification outcome as a plain `bool`.
    const VALUE: bool = <Self::Output as IntegralConstant>::VALUE;
}

/// Marker for the primitive integral types.
pub trait Integral:
    IsIntegral<Output = TrueType> + Copy + Eq + Ord + Hash + Debug + Display
{
}

/// Returns whether `T` is an integral type.
///
/// # Examples
///
/// ```rust
/// # use keel_core::types::integral::is_integral;
/// assert!(is_integral::<i32>());
/// assert!(is_integral::<char>());
/// assert!(!is_integral::<f64>());
/// assert!(!is_integral::<&i32>());
/// ```
#[inline(always)]
pub const fn is_integral<T>() -> bool
where
    T: IsIntegral + ?Sized,
{
    T::VALUE
}

macro_rules! impl_integral_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl IsIntegral for $t {
                type Output = TrueType;
            }

            impl Integral for $t {}
        )*
    };
}

macro_rules! impl_not_integral_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl IsIntegral for $t {
                type Output = FalseType;
            }
        )*
    };
}

impl_integral_for!(bool, char);
impl_integral_for!(i8, i16, i32, i64, i128, isize);
impl_integral_for!(u8, u16, u32, u64, u128, usize);

impl_not_integral_for!(f32, f64, (), str, String);

impl<T: ?Sized> IsIntegral for &T {
    type Output = FalseType;
}

impl<T: ?Sized> IsIntegral for &mut T {
    type Output = FalseType;
}

impl<T: ?Sized> IsIntegral for *const T {
    type Output = FalseType;
}

impl<T: ?Sized> IsIntegral for *mut T {
    type Output = FalseType;
}

impl<T> IsIntegral for [T] {
    type Output = FalseType;
}

impl<T, const N: usize> IsIntegral for [T; N] {
    type Output = FalseType;
}

impl<T> IsIntegral for Option<T> {
    type Output = FalseType;
}

impl<T> IsIntegral for Vec<T> {
    type Output = FalseType;
}

impl<T: ?Sized> IsIntegral for Box<T> {
    type Output = FalseType;
}

macro_rules! impl_not_integral_for_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> IsIntegral for ($($name,)+) {
            type Output = FalseType;
        }
    };
}

impl_not_integral_for_tuple!(A);
impl_not_integral_for_tuple!(A, B);
impl_not_integral_for_tuple!(A, B, C);
impl_not_integral_for_tuple!(A, B, C, D);
