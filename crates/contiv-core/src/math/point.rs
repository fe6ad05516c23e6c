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

//! A scalar position on the real line.

use crate::{
    error::{IntervalError, IntervalResult},
    math::operand::{Operand, OperandKind, Operator},
    num::scalar::Scalar,
};
use std::ops::{Add, Sub};

/// An immutable position on the line.
///
/// `Point` compares and adds through the std traits when both sides are
/// statically known to be points. The named methods (`equals`, `less_than`,
/// `add`, ...) accept an arbitrary `Operand` and fail with
/// `IntervalError::UnsupportedOperand` for anything that is not a point.
///
/// # Examples
///
/// ```rust
/// # use contiv_core::math::point::Point;
///
/// let a = Point::new(5);
/// let b = Point::new(2);
/// assert_eq!(a + b, Point::new(7));
/// assert_eq!(a - b, Point::new(3));
/// assert!(b < a);
/// assert_eq!(a.to_string(), "Point(5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Hash)]
pub struct Point<T> {
    value: T,
}

impl<T> Point<T>
where
    T: Scalar,
{
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the coordinate of the point.
    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }

    /// `self == other`, for an operand that must be a point.
    pub fn equals(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Eq, other).map(|other| self.value == other.value)
    }

    /// `self != other`, for an operand that must be a point.
    pub fn not_equals(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Ne, other).map(|other| self.value != other.value)
    }

    /// `self < other`, for an operand that must be a point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::{operand::Operand, point::Point};
    ///
    /// let p = Point::new(5);
    /// assert_eq!(p.less_than(&Point::new(10).into()), Ok(true));
    /// assert!(p.less_than(&Operand::scalar(10)).is_err());
    /// ```
    pub fn less_than(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Lt, other).map(|other| self.value < other.value)
    }

    /// `self <= other`, for an operand that must be a point.
    pub fn less_or_equal(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Le, other).map(|other| self.value <= other.value)
    }

    /// `self > other`, for an operand that must be a point.
    pub fn greater_than(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Gt, other).map(|other| self.value > other.value)
    }

    /// `self >= other`, for an operand that must be a point.
    pub fn greater_or_equal(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Ge, other).map(|other| self.value >= other.value)
    }

    /// `self + other`, for an operand that must be a point.
    ///
    /// Takes `self` by value so that method syntax resolves here rather than
    /// to `std::ops::Add::add`.
    ///
    /// # Errors
    ///
    /// `IntervalError::UnsupportedOperand` for a foreign operand, and
    /// `IntervalError::Overflow` if the sum does not fit `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::point::Point;
    ///
    /// assert_eq!(Point::new(5).add(&Point::new(2).into()), Ok(Point::new(7)));
    /// assert!(Point::new(i64::MAX).add(&Point::new(1).into()).is_err());
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: &Operand<T>) -> IntervalResult<Self> {
        let other = Self::require(Operator::Add, other)?;
        self.value
            .checked_add_val(other.value)
            .map(Self::new)
            .ok_or(IntervalError::Overflow {
                operator: Operator::Add,
                this_type: Self::TYPE_NAME,
            })
    }

    /// `self - other`, for an operand that must be a point.
    ///
    /// # Errors
    ///
    /// `IntervalError::UnsupportedOperand` for a foreign operand, and
    /// `IntervalError::Overflow` if the difference does not fit `T`.
    pub fn subtract(self, other: &Operand<T>) -> IntervalResult<Self> {
        let other = Self::require(Operator::Sub, other)?;
        self.value
            .checked_sub_val(other.value)
            .map(Self::new)
            .ok_or(IntervalError::Overflow {
                operator: Operator::Sub,
                this_type: Self::TYPE_NAME,
            })
    }
}

/// # Panics
///
/// Overflows like the underlying integer addition. Use `Point::add` for a
/// checked sum.
impl<T> Add for Point<T>
where
    T: Scalar,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value)
    }
}

impl<T> Sub for Point<T>
where
    T: Scalar,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value)
    }
}

impl<T> From<T> for Point<T>
where
    T: Scalar,
{
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> std::fmt::Display for Point<T>
where
    T: Scalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interval::ContinuousInterval;

    fn p(v: i64) -> Point<i64> {
        Point::new(v)
    }

    fn op(v: i64) -> Operand<i64> {
        Operand::from(p(v))
    }

    fn interval_operand(start: i64, end: i64) -> Operand<i64> {
        ContinuousInterval::closed(start, end).unwrap().into()
    }

    #[test]
    fn test_equality() {
        assert_eq!(p(5).equals(&op(5)), Ok(true));
        assert_eq!(p(5).equals(&op(10)), Ok(false));
        assert_eq!(p(5).not_equals(&op(5)), Ok(false));
        assert_eq!(p(5).not_equals(&op(10)), Ok(true));
    }

    #[test]
    fn test_comparison() {
        // (other, expected `5 < other`)
        for (other, lt) in [(10, true), (5, false), (2, false)] {
            let equal = other == 5;
            assert_eq!(p(5).less_than(&op(other)), Ok(lt));
            assert_eq!(p(5).less_or_equal(&op(other)), Ok(lt || equal));
            assert_eq!(p(5).greater_than(&op(other)), Ok(!lt && !equal));
            assert_eq!(p(5).greater_or_equal(&op(other)), Ok(!lt));
        }
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(p(5).add(&op(2)), Ok(p(7)));
        assert_eq!(p(5).subtract(&op(2)), Ok(p(3)));
        assert_eq!(p(2).subtract(&op(5)), Ok(p(-3)));
    }

    #[test]
    fn test_arithmetic_overflow_is_an_error() {
        assert_eq!(
            p(i64::MAX).add(&op(1)),
            Err(IntervalError::Overflow {
                operator: Operator::Add,
                this_type: "Point",
            })
        );
        assert_eq!(
            p(i64::MIN).subtract(&op(1)),
            Err(IntervalError::Overflow {
                operator: Operator::Sub,
                this_type: "Point",
            })
        );
        assert_eq!(p(i64::MAX).subtract(&op(1)), Ok(p(i64::MAX - 1)));
        assert_eq!(
            Point::new(i8::MAX).add(&Point::new(i8::MIN).into()),
            Ok(Point::new(-1))
        );
    }

    #[test]
    fn test_float_arithmetic() {
        let a = Point::new(1.5);
        assert_eq!(a.add(&Point::new(0.25).into()), Ok(Point::new(1.75)));
        assert_eq!(a.subtract(&Point::new(2.0).into()), Ok(Point::new(-0.5)));
    }

    #[test]
    fn test_unsupported_operands() {
        let cases: Vec<(Operator, Operand<i64>, &str)> = vec![
            (Operator::Eq, "str".into(), "str"),
            (Operator::Ne, Operand::scalar(10), "i64"),
            (Operator::Lt, vec![Operand::scalar(1)].into(), "list"),
            (Operator::Le, true.into(), "bool"),
            (
                Operator::Gt,
                Operand::Map(vec![("key".into(), "value".into())]),
                "map",
            ),
            (Operator::Ge, interval_operand(1, 3), "ContinuousInterval"),
        ];

        for (operator, other, type_name) in cases {
            let point = p(5);
            let result = match operator {
                Operator::Eq => point.equals(&other),
                Operator::Ne => point.not_equals(&other),
                Operator::Lt => point.less_than(&other),
                Operator::Le => point.less_or_equal(&other),
                Operator::Gt => point.greater_than(&other),
                Operator::Ge => point.greater_or_equal(&other),
                Operator::Add | Operator::Sub => unreachable!(),
            };
            let err = result.unwrap_err();
            assert_eq!(
                err,
                IntervalError::UnsupportedOperand {
                    operator,
                    this_type: "Point",
                    other_type: type_name,
                }
            );
            assert_eq!(
                err.to_string(),
                format!(
                    "Unsupported operand type(s) for {}: 'Point' and '{}'",
                    operator.symbol(),
                    type_name
                )
            );
        }
    }

    #[test]
    fn test_unsupported_arithmetic() {
        for other in [Operand::scalar(10), Operand::from("test")] {
            assert!(matches!(
                p(5).add(&other),
                Err(IntervalError::UnsupportedOperand {
                    operator: Operator::Add,
                    ..
                })
            ));
            assert!(matches!(
                p(5).subtract(&other),
                Err(IntervalError::UnsupportedOperand {
                    operator: Operator::Sub,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_std_traits() {
        assert!(p(1) < p(2));
        assert!(p(2) >= p(2));
        assert_eq!(p(3) + p(4), p(7));
        assert_eq!(Point::from(9), p(9));
        assert_eq!(Point::<i64>::default(), p(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", p(5)), "Point(5)");
        assert_eq!(format!("{}", Point::new(2.5)), "Point(2.5)");
    }
}
