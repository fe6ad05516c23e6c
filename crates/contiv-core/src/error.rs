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

//! Error type shared by every fallible operation of the interval algebra.

use crate::math::operand::Operator;
use thiserror::Error;

/// Why a pair of bounds does not describe a valid `ContinuousInterval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidIntervalKind {
    /// `start > end`.
    StartAfterEnd,
    /// `start == end` without being the canonical empty interval.
    ZeroLength,
    /// A bound is infinite or NaN.
    NotFinite,
}

impl std::fmt::Display for InvalidIntervalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartAfterEnd => write!(f, "start must be less or equal than end"),
            Self::ZeroLength => write!(
                f,
                "zero length is only allowed for the empty interval (0, 0) with both endpoints open"
            ),
            Self::NotFinite => write!(f, "bounds must be finite"),
        }
    }
}

/// The error type of the interval algebra.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// The bounds passed to a constructor violate the interval invariants.
    #[error("Invalid interval: {kind}")]
    InvalidInterval { kind: InvalidIntervalKind },

    /// A binary operator received an operand of a foreign kind.
    #[error("Unsupported operand type(s) for {operator}: '{this_type}' and '{other_type}'")]
    UnsupportedOperand {
        operator: Operator,
        this_type: &'static str,
        other_type: &'static str,
    },

    /// `contains` received something that is neither a point nor an interval.
    #[error("Invalid type. Expected {expected}, found '{found}'")]
    InvalidArgument {
        expected: &'static str,
        found: &'static str,
    },

    /// The operator exists for the type but not for this pair of values.
    #[error("Operation {operator} is not supported for '{this_type}': {reason}")]
    Unimplemented {
        operator: Operator,
        this_type: &'static str,
        reason: &'static str,
    },

    /// The result of an arithmetic operator does not fit the scalar type.
    #[error("Arithmetic overflow in {operator} for '{this_type}'")]
    Overflow {
        operator: Operator,
        this_type: &'static str,
    },
}

impl IntervalError {
    #[inline]
    pub(crate) const fn invalid_interval(kind: InvalidIntervalKind) -> Self {
        Self::InvalidInterval { kind }
    }

    #[inline]
    pub(crate) const fn unsupported(
        operator: Operator,
        this_type: &'static str,
        other_type: &'static str,
    ) -> Self {
        Self::UnsupportedOperand {
            operator,
            this_type,
            other_type,
        }
    }

    /// Returns the operator involved in the failure, if any.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::UnsupportedOperand { operator, .. }
            | Self::Unimplemented { operator, .. }
            | Self::Overflow { operator, .. } => Some(*operator),
            Self::InvalidInterval { .. } | Self::InvalidArgument { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type IntervalResult<T> = Result<T, IntervalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_interval_messages() {
        let err = IntervalError::invalid_interval(InvalidIntervalKind::StartAfterEnd);
        assert_eq!(
            err.to_string(),
            "Invalid interval: start must be less or equal than end"
        );

        let err = IntervalError::invalid_interval(InvalidIntervalKind::ZeroLength);
        assert!(err.to_string().starts_with("Invalid interval: zero length"));
    }

    #[test]
    fn test_unsupported_operand_message() {
        let err = IntervalError::unsupported(Operator::Le, "Point", "f64");
        assert_eq!(
            err.to_string(),
            "Unsupported operand type(s) for <=: 'Point' and 'f64'"
        );
        assert_eq!(err.operator(), Some(Operator::Le));
    }

    #[test]
    fn test_not_finite_message() {
        let err = IntervalError::invalid_interval(InvalidIntervalKind::NotFinite);
        assert_eq!(err.to_string(), "Invalid interval: bounds must be finite");
    }

    #[test]
    fn test_overflow_message() {
        let err = IntervalError::Overflow {
            operator: Operator::Add,
            this_type: "Point",
        };
        assert_eq!(err.to_string(), "Arithmetic overflow in + for 'Point'");
        assert_eq!(err.operator(), Some(Operator::Add));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = IntervalError::InvalidArgument {
            expected: "Point or ContinuousInterval",
            found: "str",
        };
        assert_eq!(
            err.to_string(),
            "Invalid type. Expected Point or ContinuousInterval, found 'str'"
        );
        assert_eq!(err.operator(), None);
    }
}
