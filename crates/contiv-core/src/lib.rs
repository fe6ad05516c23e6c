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

//! # Contiv Core
//!
//! Points and continuous intervals over generic numeric scalars, together
//! with the interval algebra used by the `contiv-sets` collections.
//!
//! ## Modules
//!
//! - `math`: `Point<T>`, `ContinuousInterval<T>` with independently open or
//!   closed endpoints, and the dynamically typed `Operand<T>` accepted by the
//!   operand-checked comparison and arithmetic methods.
//! - `num`: The `Scalar` trait every coordinate type implements.
//! - `algorithm`: Helpers over slices of intervals (order checks, binary
//!   search by start).
//! - `error`: `IntervalError`, returned by every fallible operation.

pub mod algorithm;
pub mod error;
pub mod math;
pub mod num;
