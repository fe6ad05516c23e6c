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

//! Scalar types usable as interval coordinates.
//!
//! Coordinates only need to be ordered and to support the additive
//! arithmetic of a number. `Scalar` captures that bound once, on top of
//! `num_traits::Num`, and adds a short type name used when reporting operand
//! errors.

use num_traits::Num;

/// A numeric type that can be used as the coordinate of a `Point` or as a
/// bound of a `ContinuousInterval`.
///
/// Implemented for the signed integer types and for `f32`/`f64`. Unsigned
/// types are left out on purpose, `Point` subtraction must be able to go
/// below zero.
///
/// # Examples
///
/// ```rust
/// # use contiv_core::num::scalar::Scalar;
///
/// fn name_of<T: Scalar>() -> &'static str {
///     T::NAME
/// }
///
/// assert_eq!(name_of::<f64>(), "f64");
/// assert_eq!(name_of::<i32>(), "i32");
/// ```
pub trait Scalar: Num + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display {
    /// Human-readable name of the type, used in diagnostics.
    const NAME: &'static str;

    /// Performs checked addition by value, returning `None` if overflow occurs.
    ///
    /// Floating point addition never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::num::scalar::Scalar;
    ///
    /// assert_eq!(i8::MAX.checked_add_val(1), None);
    /// assert_eq!(100i8.checked_add_val(27), Some(127));
    /// assert_eq!(1.5f64.checked_add_val(2.0), Some(3.5));
    /// ```
    fn checked_add_val(self, v: Self) -> Option<Self>;

    /// Performs checked subtraction by value, returning `None` if overflow occurs.
    ///
    /// Floating point subtraction never fails.
    fn checked_sub_val(self, v: Self) -> Option<Self>;

    /// Addition clamped to the bounds of the type.
    fn saturating_add_val(self, v: Self) -> Self;

    /// Subtraction clamped to the bounds of the type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::num::scalar::Scalar;
    ///
    /// assert_eq!(i64::MAX.saturating_sub_val(i64::MIN), i64::MAX);
    /// assert_eq!(7i64.saturating_sub_val(2), 5);
    /// ```
    fn saturating_sub_val(self, v: Self) -> Self;

    /// Returns `false` for infinities and NaN. Integers are always finite.
    fn is_finite_val(self) -> bool;
}

macro_rules! impl_scalar_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const NAME: &'static str = stringify!($t);

                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }

                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }

                #[inline(always)]
                fn saturating_add_val(self, v: $t) -> $t {
                    <$t>::saturating_add(self, v)
                }

                #[inline(always)]
                fn saturating_sub_val(self, v: $t) -> $t {
                    <$t>::saturating_sub(self, v)
                }

                #[inline(always)]
                fn is_finite_val(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_scalar_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const NAME: &'static str = stringify!($t);

                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    Some(self + v)
                }

                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    Some(self - v)
                }

                #[inline(always)]
                fn saturating_add_val(self, v: $t) -> $t {
                    self + v
                }

                #[inline(always)]
                fn saturating_sub_val(self, v: $t) -> $t {
                    self - v
                }

                #[inline(always)]
                fn is_finite_val(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_scalar_for_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_for_float!(f32, f64);

/// Returns the smaller of two partially ordered values.
///
/// On ties, and when the values are incomparable, `a` is returned.
#[inline]
pub fn partial_min<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if b < a { b } else { a }
}

/// Returns the larger of two partially ordered values.
///
/// On ties, and when the values are incomparable, `a` is returned.
#[inline]
pub fn partial_max<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if b > a { b } else { a }
}
