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

//! # Type Predicates
//!
//! Compile-time classification and conditional type selection for generic
//! container code. Everything here resolves during type checking; nothing
//! is inspected at runtime.
//!
//! ## Submodules
//!
//! - `constant`: Zero-sized value carriers (`BoolConstant<B>`, `TrueType`,
//!   `FalseType`, per-width integer constants) behind the `IntegralConstant`
//!   trait.
//! - `integral`: `IsIntegral` classification, the `Integral` marker bound,
//!   and the `is_integral::<T>()` const query.
//! - `condition`: `EnableIf` and `Select` with their aliases `EnableIfT`,
//!   `EnableIfOf`, `Conditional`, and `ConditionalOf`.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod condition;
pub mod constant;
pub mod integral;
