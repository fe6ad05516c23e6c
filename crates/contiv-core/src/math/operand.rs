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

//! # Operands
//!
//! Callers that hold dynamically typed values (parsed input, scripting
//! bindings, dashboards) cannot rely on the type system to keep foreign
//! values away from the interval algebra. `Operand` is the closed set of
//! value kinds such a caller can hand over, and the operand-checked methods
//! on `Point` and `ContinuousInterval` reject every kind they do not support
//! with a structured `IntervalError::UnsupportedOperand`.
//!
//! ```rust
//! # use contiv_core::math::{operand::{Operand, Operator}, point::Point};
//! # use contiv_core::error::IntervalError;
//!
//! let p = Point::new(5.0);
//! assert_eq!(p.less_than(&Operand::from(Point::new(10.0))), Ok(true));
//!
//! let err = p.less_than(&Operand::from("list")).unwrap_err();
//! assert_eq!(
//!     err,
//!     IntervalError::UnsupportedOperand {
//!         operator: Operator::Lt,
//!         this_type: "Point",
//!         other_type: "str",
//!     }
//! );
//! ```

use crate::{
    error::{IntervalError, IntervalResult},
    math::{interval::ContinuousInterval, point::Point},
    num::scalar::Scalar,
};

/// The binary operators exposed by the operand-checked API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
}

impl Operator {
    /// The conventional symbol of the operator.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A dynamically typed value handed to the algebra.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<T> {
    Point(Point<T>),
    Interval(ContinuousInterval<T>),
    Scalar(T),
    Text(String),
    Bool(bool),
    List(Vec<Operand<T>>),
    Map(Vec<(String, Operand<T>)>),
}

impl<T> Operand<T>
where
    T: Scalar,
{
    /// Wraps a bare scalar.
    ///
    /// There is no `From<T>` conversion, it would overlap with the
    /// conversions from `bool` and the value types.
    #[inline]
    pub const fn scalar(value: T) -> Self {
        Self::Scalar(value)
    }

    /// The name of the value kind, as reported in operand errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::{operand::Operand, point::Point};
    ///
    /// assert_eq!(Operand::from(Point::new(1)).type_name(), "Point");
    /// assert_eq!(Operand::scalar(4.5_f64).type_name(), "f64");
    /// assert_eq!(Operand::<f64>::from("key").type_name(), "str");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => Point::<T>::TYPE_NAME,
            Self::Interval(_) => ContinuousInterval::<T>::TYPE_NAME,
            Self::Scalar(_) => T::NAME,
            Self::Text(_) => "str",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    #[inline]
    pub fn as_point(&self) -> Option<&Point<T>> {
        Point::from_operand(self)
    }

    #[inline]
    pub fn as_interval(&self) -> Option<&ContinuousInterval<T>> {
        ContinuousInterval::from_operand(self)
    }
}

/// A value kind that can appear on both sides of an operand-checked operator.
pub trait OperandKind<T>: Sized
where
    T: Scalar,
{
    /// Name of the kind, as reported in operand errors.
    const TYPE_NAME: &'static str;

    /// Borrows the value if `operand` holds this kind.
    fn from_operand(operand: &Operand<T>) -> Option<&Self>;

    /// Borrows the value or fails with `UnsupportedOperand` for `operator`.
    #[inline]
    fn require(operator: Operator, operand: &Operand<T>) -> IntervalResult<&Self> {
        Self::from_operand(operand).ok_or_else(|| {
            IntervalError::unsupported(operator, Self::TYPE_NAME, operand.type_name())
        })
    }
}

impl<T> OperandKind<T> for Point<T>
where
    T: Scalar,
{
    const TYPE_NAME: &'static str = "Point";

    #[inline]
    fn from_operand(operand: &Operand<T>) -> Option<&Self> {
        match operand {
            Operand::Point(point) => Some(point),
            _ => None,
        }
    }
}

impl<T> OperandKind<T> for ContinuousInterval<T>
where
    T: Scalar,
{
    const TYPE_NAME: &'static str = "ContinuousInterval";

    #[inline]
    fn from_operand(operand: &Operand<T>) -> Option<&Self> {
        match operand {
            Operand::Interval(interval) => Some(interval),
            _ => None,
        }
    }
}

impl<T> From<Point<T>> for Operand<T> {
    #[inline]
    fn from(point: Point<T>) -> Self {
        Self::Point(point)
    }
}

impl<T> From<ContinuousInterval<T>> for Operand<T> {
    #[inline]
    fn from(interval: ContinuousInterval<T>) -> Self {
        Self::Interval(interval)
    }
}

impl<T> From<String> for Operand<T> {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T> From<&str> for Operand<T> {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl<T> From<bool> for Operand<T> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T> From<Vec<Operand<T>>> for Operand<T> {
    #[inline]
    fn from(items: Vec<Operand<T>>) -> Self {
        Self::List(items)
    }
}
