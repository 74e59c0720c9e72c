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

//! # Conditional Types
//!
//! Type-level `if`. `EnableIf<T>` exists only for the `true` condition, so a
//! signature that names `EnableIfT<COND, T>` (or bounds on
//! `C: EnableIf<T>`) is only well-formed when the condition holds. `Select`
//! picks one of two types depending on the condition.
//!
//! Conditions are the [`BoolConstant`] types from
//! [`crate::types::constant`], which is also what every classification in
//! [`crate::types`] produces, so a classification result can be fed
//! straight into these traits.
//!
//! ```rust
//! use keel_core::types::condition::{Conditional, EnableIfT};
//!
//! let enabled: EnableIfT<true, u32> = 7;
//! let picked: Conditional<false, String, i64> = -1;
//! assert_eq!(enabled, 7u32);
//! assert_eq!(picked, -1i64);
//! ```
//!
//! A false condition leaves no type behind:
//!
//! ```compile_fail
//! use keel_core::types::condition::EnableIfT;
//!
//! let disabled: EnableIfT<false, u32> = 7;
//! ```

use crate::types::constant::BoolConstant;

/// A compile-time condition.
pub type Condition<const B: bool> = BoolConstant<B>;

/// Exposes `T` as `Type` only when implemented, which is only for the
/// `true` condition.
pub trait EnableIf<T = ()> {
    /// The enabled type.
    type Type;
}

impl<T> EnableIf<T> for BoolConstant<true> {
    type Type = T;
}

/// Selects `T` under the `true` condition and `F` under the `false` one.
pub trait Select<T, F> {
    /// The selected type.
    type Type;
}

impl<T, F> Select<T, F> for BoolConstant<true> {
    type Type = T;
}

impl<T, F> Select<T, F> for BoolConstant<false> {
    type Type = F;
}

/// `T` when `B` holds; ill-formed otherwise.
pub type EnableIfT<const B: bool, T = ()> = <Condition<B> as EnableIf<T>>::Type;

/// `T` when the condition type `C` is the `true` constant; ill-formed
/// otherwise. This is the form generic code uses, where `C` is a
/// classification outcome such as `<T as IsIntegral>::Output`.
pub type EnableIfOf<C, T = ()> = <C as EnableIf<T>>::Type;

/// `T` when `B` holds, `F` otherwise.
pub type Conditional<const B: bool, T, F> = <Condition<B> as Select<T, F>>::Type;

/// `T` when the condition type `C` is the `true` constant, `F` otherwise.
pub type ConditionalOf<C, T, F> = <C as Select<T, F>>::Type;
