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

use crate::{
    error::{IntervalError, IntervalResult, InvalidIntervalKind},
    math::{
        operand::{Operand, OperandKind, Operator},
        point::Point,
    },
    num::scalar::{Scalar, partial_max, partial_min},
};
use smallvec::SmallVec;
use std::{
    cmp::Ordering,
    ops::{BitAnd, BitOr, Bound, Range, RangeBounds, RangeInclusive},
};

/// A bounded interval with independently open or closed endpoints.
///
/// The interval covers the coordinates between `start` and `end`; each
/// endpoint is either included (closed, `[`/`]`) or excluded (open,
/// `(`/`)`). Values are immutable, every operation returns a new value.
///
/// # Invariants
///
/// - `start <= end`.
/// - `start == end` only for the canonical empty interval `(0, 0)`, which
///   has both endpoints open. It is obtained with `ContinuousInterval::empty()`.
#[derive(Clone, Copy, PartialEq, Hash)]
pub struct ContinuousInterval<T> {
    start: T,
    end: T,
    is_start_open: bool,
    is_end_open: bool,
}

/// The result of intersecting two intervals.
///
/// Two intervals that only share one closed endpoint intersect in a single
/// point, which is not a valid `ContinuousInterval`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection<T> {
    /// The intervals have no coordinate in common.
    Empty,
    /// The intervals touch at exactly one closed endpoint.
    Point(Point<T>),
    /// The intervals share a range of coordinates.
    Interval(ContinuousInterval<T>),
}

impl<T> Intersection<T>
where
    T: Scalar,
{
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the single common point, if the intervals only touch.
    #[inline]
    pub fn point(&self) -> Option<Point<T>> {
        match self {
            Self::Point(point) => Some(*point),
            _ => None,
        }
    }

    /// Returns the intersection as an interval.
    ///
    /// `Empty` maps to the canonical empty interval; a single point has no
    /// interval representation and yields `None`.
    #[inline]
    pub fn interval(&self) -> Option<ContinuousInterval<T>> {
        match self {
            Self::Empty => Some(ContinuousInterval::empty()),
            Self::Point(_) => None,
            Self::Interval(interval) => Some(*interval),
        }
    }
}

/// The result of the union of two intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntervalUnion<T> {
    /// The intervals overlap and are covered by a single interval.
    Merged(ContinuousInterval<T>),
    /// The intervals do not overlap; both are kept, in argument order.
    Disjoint(ContinuousInterval<T>, ContinuousInterval<T>),
}

impl<T> IntervalUnion<T>
where
    T: Scalar,
{
    /// Number of intervals in the union (1 or 2).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Merged(_) => 1,
            Self::Disjoint(_, _) => 2,
        }
    }

    /// Always `false`, a union holds at least one interval.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the merged interval, if the operands overlapped.
    #[inline]
    pub fn merged(&self) -> Option<ContinuousInterval<T>> {
        match self {
            Self::Merged(interval) => Some(*interval),
            Self::Disjoint(_, _) => None,
        }
    }

    /// Flattens the union into a sequence of intervals.
    pub fn into_intervals(self) -> SmallVec<[ContinuousInterval<T>; 2]> {
        match self {
            Self::Merged(interval) => smallvec::smallvec![interval],
            Self::Disjoint(a, b) => smallvec::smallvec![a, b],
        }
    }
}

impl<T> ContinuousInterval<T>
where
    T: Scalar,
{
    /// Creates a new `ContinuousInterval`.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::InvalidInterval` if a bound is infinite or NaN,
    /// if `start > end`, or if `start == end` and the bounds do not describe
    /// the canonical empty interval `(0, 0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let iv = ContinuousInterval::new(0.0, 2.5, false, true).unwrap();
    /// assert_eq!(iv.to_string(), "[0, 2.5)");
    ///
    /// assert!(ContinuousInterval::new(10, 0, false, false).is_err());
    /// assert!(ContinuousInterval::new(5, 5, false, false).is_err());
    /// assert!(ContinuousInterval::new(0, 0, true, true).unwrap().is_empty());
    /// assert!(ContinuousInterval::closed(0.0, f64::INFINITY).is_err());
    /// ```
    pub fn new(start: T, end: T, is_start_open: bool, is_end_open: bool) -> IntervalResult<Self> {
        if !start.is_finite_val() || !end.is_finite_val() {
            return Err(IntervalError::invalid_interval(
                InvalidIntervalKind::NotFinite,
            ));
        }

        match start.partial_cmp(&end) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) => {
                if !(start.is_zero() && is_start_open && is_end_open) {
                    return Err(IntervalError::invalid_interval(
                        InvalidIntervalKind::ZeroLength,
                    ));
                }
            }
            Some(Ordering::Greater) | None => {
                return Err(IntervalError::invalid_interval(
                    InvalidIntervalKind::StartAfterEnd,
                ));
            }
        }
        Ok(Self {
            start,
            end,
            is_start_open,
            is_end_open,
        })
    }

    /// Creates the closed interval `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let iv = ContinuousInterval::closed(0, 10).unwrap();
    /// assert!(!iv.is_start_open() && !iv.is_end_open());
    /// ```
    #[inline]
    pub fn closed(start: T, end: T) -> IntervalResult<Self> {
        Self::new(start, end, false, false)
    }

    /// Creates the open interval `(start, end)`.
    #[inline]
    pub fn open(start: T, end: T) -> IntervalResult<Self> {
        Self::new(start, end, true, true)
    }

    /// Creates the half-open interval `[start, end)`.
    #[inline]
    pub fn closed_open(start: T, end: T) -> IntervalResult<Self> {
        Self::new(start, end, false, true)
    }

    /// Creates the half-open interval `(start, end]`.
    #[inline]
    pub fn open_closed(start: T, end: T) -> IntervalResult<Self> {
        Self::new(start, end, true, false)
    }

    /// Creates a `ContinuousInterval` without checking invariants in release builds.
    #[inline]
    pub(crate) fn new_unchecked(start: T, end: T, is_start_open: bool, is_end_open: bool) -> Self {
        debug_assert!(
            start < end || (start.is_zero() && end.is_zero() && is_start_open && is_end_open),
            "Invalid interval: bounds violate the interval invariants"
        );
        Self {
            start,
            end,
            is_start_open,
            is_end_open,
        }
    }

    /// Returns the canonical empty interval `(0, 0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let empty = ContinuousInterval::<i32>::empty();
    /// assert!(empty.is_empty());
    /// assert_eq!(empty.start(), 0);
    /// assert!(empty.is_start_open() && empty.is_end_open());
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
            is_start_open: true,
            is_end_open: true,
        }
    }

    /// Returns the lower bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let iv = ContinuousInterval::open_closed(-3, 8).unwrap();
    /// assert_eq!(iv.start(), -3);
    /// ```
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the upper bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let iv = ContinuousInterval::open_closed(-3, 8).unwrap();
    /// assert_eq!(iv.end(), 8);
    /// ```
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if the lower bound is excluded from the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// assert!(ContinuousInterval::open_closed(0, 1).unwrap().is_start_open());
    /// assert!(!ContinuousInterval::closed_open(0, 1).unwrap().is_start_open());
    /// ```
    #[inline]
    pub const fn is_start_open(&self) -> bool {
        self.is_start_open
    }

    /// Returns `true` if the upper bound is excluded from the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// assert!(ContinuousInterval::closed_open(0, 1).unwrap().is_end_open());
    /// assert!(!ContinuousInterval::open_closed(0, 1).unwrap().is_end_open());
    /// ```
    #[inline]
    pub const fn is_end_open(&self) -> bool {
        self.is_end_open
    }

    /// Returns `true` if this is the canonical empty interval.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end && self.start.is_zero() && self.is_start_open && self.is_end_open
    }

    /// Returns the length of the interval (`end - start`).
    ///
    /// Saturates at the maximum of `T` when the length does not fit, as for
    /// `[i64::MIN, i64::MAX]`. See `checked_length` for the exact variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// assert_eq!(ContinuousInterval::open(-10, 10).unwrap().length(), 20);
    /// assert_eq!(ContinuousInterval::<i32>::empty().length(), 0);
    /// assert_eq!(ContinuousInterval::closed(i8::MIN, i8::MAX).unwrap().length(), i8::MAX);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        self.end.saturating_sub_val(self.start)
    }

    /// Returns the length of the interval, or `None` if it does not fit `T`.
    #[inline]
    pub fn checked_length(&self) -> Option<T> {
        self.end.checked_sub_val(self.start)
    }

    /// Returns `true` if `value` lies inside the interval, honouring the
    /// openness of both endpoints.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let iv = ContinuousInterval::closed_open(0, 5).unwrap();
    /// assert!(iv.contains_value(0));
    /// assert!(iv.contains_value(4));
    /// assert!(!iv.contains_value(5));
    /// ```
    #[inline]
    pub fn contains_value(&self, value: T) -> bool {
        match (self.is_start_open, self.is_end_open) {
            (false, false) => self.start <= value && value <= self.end,
            (true, false) => self.start < value && value <= self.end,
            (false, true) => self.start <= value && value < self.end,
            (true, true) => self.start < value && value < self.end,
        }
    }

    /// Returns `true` if `point` lies inside the interval.
    #[inline]
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        self.contains_value(point.value())
    }

    /// Returns `true` if `other` lies inside `self`.
    ///
    /// An endpoint of `other` that coincides with the matching endpoint of
    /// `self` is only accepted when `self` is closed there. Intervals with
    /// the same start and end contain each other only if their openness
    /// flags are identical. The empty interval is contained in every interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let a = ContinuousInterval::closed(0, 5).unwrap();
    /// assert!(a.contains_interval(&ContinuousInterval::closed(1, 4).unwrap()));
    /// assert!(a.contains_interval(&a));
    /// assert!(!a.contains_interval(&ContinuousInterval::open(0, 5).unwrap()));
    /// assert!(!a.contains_interval(&ContinuousInterval::closed(3, 6).unwrap()));
    /// ```
    pub fn contains_interval(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }

        if other.start < self.start || other.end > self.end {
            return false;
        }

        if other.start == self.start && other.end == self.end {
            return other.is_start_open == self.is_start_open
                && other.is_end_open == self.is_end_open;
        }

        if other.start == self.start && self.is_start_open {
            return false;
        }

        if other.end == self.end && self.is_end_open {
            return false;
        }

        true
    }

    /// Returns `true` if `item` (a point or an interval) lies inside `self`.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::InvalidArgument` for any other operand kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::{interval::ContinuousInterval, operand::Operand, point::Point};
    ///
    /// let iv = ContinuousInterval::closed(0, 5).unwrap();
    /// assert_eq!(iv.contains(&Point::new(2).into()), Ok(true));
    /// assert_eq!(iv.contains(&ContinuousInterval::closed(1, 4).unwrap().into()), Ok(true));
    /// assert!(iv.contains(&Operand::scalar(2)).is_err());
    /// ```
    pub fn contains(&self, item: &Operand<T>) -> IntervalResult<bool> {
        match item {
            Operand::Point(point) => Ok(self.contains_point(point)),
            Operand::Interval(interval) => Ok(self.contains_interval(interval)),
            other => Err(IntervalError::InvalidArgument {
                expected: "Point or ContinuousInterval",
                found: other.type_name(),
            }),
        }
    }

    /// Returns `true` if the intervals share at least one coordinate.
    ///
    /// Intervals that touch at a single coordinate overlap only if both
    /// touching endpoints are closed. The empty interval overlaps nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let a = ContinuousInterval::closed_open(0, 5).unwrap();
    /// let b = ContinuousInterval::closed_open(5, 10).unwrap();
    /// assert!(!a.overlaps(&b));
    ///
    /// let c = ContinuousInterval::closed(0, 5).unwrap();
    /// let d = ContinuousInterval::closed(5, 10).unwrap();
    /// assert!(c.overlaps(&d));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        if self.start == other.end {
            return !self.is_start_open && !other.is_end_open;
        }

        if self.end == other.start {
            return !self.is_end_open && !other.is_start_open;
        }

        self.start < other.end && self.end > other.start
    }

    /// Returns `true` if the intervals are not disjoint and either touch at a
    /// closed endpoint, cross each other, span the same coordinates, or one
    /// contains the other.
    ///
    /// This is the overlap notion used by `intersection`, `union` and
    /// `difference`. The empty interval overlaps nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let a = ContinuousInterval::closed(0, 5).unwrap();
    /// assert!(a.is_overlapping(&ContinuousInterval::closed(3, 8).unwrap()));
    /// assert!(a.is_overlapping(&ContinuousInterval::closed_open(5, 10).unwrap()));
    /// assert!(!a.is_overlapping(&ContinuousInterval::open_closed(5, 10).unwrap()));
    /// ```
    pub fn is_overlapping(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        if self.end < other.start || self.start > other.end {
            return false;
        }

        let touching = (self.end == other.start && !self.is_end_open && !other.is_start_open)
            || (self.start == other.end && !self.is_start_open && !other.is_end_open);

        let crossing = (other.start < self.start && self.start < other.end)
            || (other.start < self.end && self.end < other.end)
            || (self.start < other.start && other.start < self.end)
            || (self.start < other.end && other.end < self.end);

        let coincident = self.start == other.start && self.end == other.end;

        touching
            || crossing
            || coincident
            || self.contains_interval(other)
            || other.contains_interval(self)
    }

    /// Returns `true` if `self` lies entirely before `other`.
    ///
    /// That is the case when `self` ends before `other` starts, or when both
    /// share the boundary coordinate and it is open on at least one side.
    /// Overlapping intervals neither precede nor follow each other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let a = ContinuousInterval::closed_open(2, 4).unwrap();
    /// let b = ContinuousInterval::open_closed(4, 6).unwrap();
    /// assert!(a.precedes(&b));
    /// assert!(!b.precedes(&a));
    /// assert!(!a.precedes(&a));
    /// ```
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool {
        self.end < other.start
            || (self.end == other.start && (self.is_end_open || other.is_start_open))
    }

    /// Returns `true` if `self` lies entirely after `other`.
    #[inline]
    pub fn follows(&self, other: &Self) -> bool {
        other.precedes(self)
    }

    /// Returns `true` if `self` ends no later than `other`.
    ///
    /// Ends at the same coordinate compare as "no later" unless `self` is
    /// closed there while `other` is open.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let a = ContinuousInterval::closed_open(2, 4).unwrap();
    /// let b = ContinuousInterval::closed_open(1, 5).unwrap();
    /// assert!(a.ends_no_later_than(&b));
    /// assert!(!b.ends_no_later_than(&a));
    /// assert!(b.ends_no_later_than(&b));
    /// ```
    #[inline]
    pub fn ends_no_later_than(&self, other: &Self) -> bool {
        self.end < other.end
            || (self.end == other.end && (self.is_end_open || !other.is_end_open))
    }

    /// Returns `true` if `self` ends no earlier than `other`.
    #[inline]
    pub fn ends_no_earlier_than(&self, other: &Self) -> bool {
        other.ends_no_later_than(self)
    }

    /// Concatenates two adjacent intervals.
    ///
    /// `self` must end where `other` starts, with at least one of the two
    /// touching endpoints closed. The result keeps `self`'s start openness
    /// and `other`'s end openness. The empty interval is the identity.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::Unimplemented` for any other relative position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let a = ContinuousInterval::closed_open(0, 5).unwrap();
    /// let b = ContinuousInterval::closed(5, 10).unwrap();
    /// assert_eq!(a.concat(&b).unwrap(), ContinuousInterval::closed(0, 10).unwrap());
    /// assert!(b.concat(&a).is_err());
    /// ```
    pub fn concat(&self, other: &Self) -> IntervalResult<Self> {
        if self.is_empty() {
            return Ok(*other);
        }
        if other.is_empty() {
            return Ok(*self);
        }

        if self.end == other.start && !(self.is_end_open && other.is_start_open) {
            Ok(Self::new_unchecked(
                self.start,
                other.end,
                self.is_start_open,
                other.is_end_open,
            ))
        } else {
            Err(IntervalError::Unimplemented {
                operator: Operator::Add,
                this_type: Self::TYPE_NAME,
                reason: "intervals must be adjacent with at least one closed touching endpoint",
            })
        }
    }

    /// Returns the smallest interval covering both `self` and `other`.
    ///
    /// The side contributing an extremal coordinate keeps its openness there;
    /// when both sides share the coordinate, the result is open only if both
    /// are open. The empty interval is the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let a = ContinuousInterval::open(0, 5).unwrap();
    /// let b = ContinuousInterval::closed(0, 3).unwrap();
    /// assert_eq!(a.hull(&b), ContinuousInterval::closed_open(0, 5).unwrap());
    /// ```
    pub fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        let (start, is_start_open) = if self.start < other.start {
            (self.start, self.is_start_open)
        } else if self.start > other.start {
            (other.start, other.is_start_open)
        } else {
            (self.start, self.is_start_open && other.is_start_open)
        };

        let (end, is_end_open) = if self.end > other.end {
            (self.end, self.is_end_open)
        } else if self.end < other.end {
            (other.end, other.is_end_open)
        } else {
            (self.end, self.is_end_open && other.is_end_open)
        };

        Self::new_unchecked(start, end, is_start_open, is_end_open)
    }

    /// Calculates the intersection of two intervals.
    ///
    /// The result is `Intersection::Empty` when the intervals do not overlap
    /// (or one of them is empty), `Intersection::Point` when they only share
    /// one closed endpoint, and `Intersection::Interval` otherwise. A bound of
    /// the resulting interval is open if either interval is open there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::{interval::{ContinuousInterval, Intersection}, point::Point};
    ///
    /// let a = ContinuousInterval::closed(0, 5).unwrap();
    /// let b = ContinuousInterval::closed(5, 10).unwrap();
    /// assert_eq!(a.intersection(&b), Intersection::Point(Point::new(5)));
    ///
    /// let c = ContinuousInterval::open(2, 8).unwrap();
    /// assert_eq!(
    ///     a.intersection(&c),
    ///     Intersection::Interval(ContinuousInterval::open_closed(2, 5).unwrap())
    /// );
    /// ```
    pub fn intersection(&self, other: &Self) -> Intersection<T> {
        if self.is_empty() || other.is_empty() || !self.is_overlapping(other) {
            return Intersection::Empty;
        }

        if self == other {
            return Intersection::Interval(*self);
        }

        if self.contains_interval(other) {
            return Intersection::Interval(*other);
        }

        if other.contains_interval(self) {
            return Intersection::Interval(*self);
        }

        if self.start == other.end && !self.is_start_open && !other.is_end_open {
            return Intersection::Point(Point::new(self.start));
        }

        if self.end == other.start && !self.is_end_open && !other.is_start_open {
            return Intersection::Point(Point::new(self.end));
        }

        let start = partial_max(self.start, other.start);
        let end = partial_min(self.end, other.end);

        let is_start_open = (start == self.start && self.is_start_open)
            || (start == other.start && other.is_start_open);
        let is_end_open =
            (end == self.end && self.is_end_open) || (end == other.end && other.is_end_open);

        match start.partial_cmp(&end) {
            Some(Ordering::Less) => Intersection::Interval(Self::new_unchecked(
                start,
                end,
                is_start_open,
                is_end_open,
            )),
            Some(Ordering::Equal) if !is_start_open && !is_end_open => {
                Intersection::Point(Point::new(start))
            }
            _ => Intersection::Empty,
        }
    }

    /// Calculates the union of two intervals.
    ///
    /// Overlapping intervals merge into their `hull`; otherwise both
    /// intervals are returned unchanged. The empty interval is the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::{ContinuousInterval, IntervalUnion};
    ///
    /// let a = ContinuousInterval::closed(0, 5).unwrap();
    /// let b = ContinuousInterval::closed(3, 8).unwrap();
    /// assert_eq!(a.union(&b), IntervalUnion::Merged(ContinuousInterval::closed(0, 8).unwrap()));
    ///
    /// let c = ContinuousInterval::closed(10, 12).unwrap();
    /// assert_eq!(a.union(&c), IntervalUnion::Disjoint(a, c));
    /// ```
    pub fn union(&self, other: &Self) -> IntervalUnion<T> {
        if self.is_empty() || other.is_empty() || self.is_overlapping(other) {
            IntervalUnion::Merged(self.hull(other))
        } else {
            IntervalUnion::Disjoint(*self, *other)
        }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 0 intervals: If `other` covers the coordinates of `self`.
    /// * 1 interval: If `other` clips one side of `self` or does not overlap it.
    /// * 2 intervals: If `other` lies strictly inside `self`, splitting it.
    ///
    /// A cut is closed exactly where `other` is open, and open where `other`
    /// is closed. Single boundary points left over when `other` has the same
    /// bound as `self` but a different openness are not representable as
    /// intervals and are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    ///
    /// let a = ContinuousInterval::closed(0, 10).unwrap();
    /// let hole = ContinuousInterval::closed(4, 6).unwrap();
    ///
    /// let diff = a.difference(&hole);
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], ContinuousInterval::closed_open(0, 4).unwrap());
    /// assert_eq!(diff[1], ContinuousInterval::open_closed(6, 10).unwrap());
    /// ```
    pub fn difference(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if self.is_empty() {
            return SmallVec::new();
        }

        if other.is_empty() || !self.is_overlapping(other) {
            return smallvec::smallvec![*self];
        }

        if self.start >= other.start && self.end <= other.end {
            return SmallVec::new();
        }

        let mut result = SmallVec::new();
        if self.start < other.start {
            result.push(Self::new_unchecked(
                self.start,
                other.start,
                self.is_start_open,
                !other.is_start_open,
            ));
        }
        if self.end > other.end {
            result.push(Self::new_unchecked(
                other.end,
                self.end,
                !other.is_end_open,
                self.is_end_open,
            ));
        }
        result
    }

    /// `self == other`, for an operand that must be an interval.
    pub fn equals(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Eq, other).map(|other| self == other)
    }

    /// `self != other`, for an operand that must be an interval.
    pub fn not_equals(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Ne, other).map(|other| self != other)
    }

    /// `precedes`, for an operand that must be an interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::{interval::ContinuousInterval, operand::Operand};
    ///
    /// let a = ContinuousInterval::closed_open(1, 5).unwrap();
    /// let b = ContinuousInterval::closed(5, 6).unwrap();
    /// assert_eq!(a.less_than(&b.into()), Ok(true));
    /// assert!(a.less_than(&Operand::from("interval")).is_err());
    /// ```
    pub fn less_than(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Lt, other).map(|other| self.precedes(other))
    }

    /// `ends_no_later_than`, for an operand that must be an interval.
    pub fn less_or_equal(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Le, other).map(|other| self.ends_no_later_than(other))
    }

    /// `follows`, for an operand that must be an interval.
    pub fn greater_than(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Gt, other).map(|other| self.follows(other))
    }

    /// `ends_no_earlier_than`, for an operand that must be an interval.
    pub fn greater_or_equal(&self, other: &Operand<T>) -> IntervalResult<bool> {
        Self::require(Operator::Ge, other).map(|other| self.ends_no_earlier_than(other))
    }

    /// `concat`, for an operand that must be an interval.
    pub fn add(&self, other: &Operand<T>) -> IntervalResult<Self> {
        Self::require(Operator::Add, other).and_then(|other| self.concat(other))
    }

    /// `difference`, for an operand that must be an interval.
    pub fn subtract(&self, other: &Operand<T>) -> IntervalResult<SmallVec<[Self; 2]>> {
        Self::require(Operator::Sub, other).map(|other| self.difference(other))
    }
}

impl<T> BitAnd for ContinuousInterval<T>
where
    T: Scalar,
{
    type Output = Intersection<T>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<T> BitOr for ContinuousInterval<T>
where
    T: Scalar,
{
    type Output = IntervalUnion<T>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T> BitAnd for &ContinuousInterval<T>
where
    T: Scalar,
{
    type Output = Intersection<T>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for &ContinuousInterval<T>
where
    T: Scalar,
{
    type Output = IntervalUnion<T>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> Default for ContinuousInterval<T>
where
    T: Scalar,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for ContinuousInterval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContinuousInterval")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("is_start_open", &self.is_start_open)
            .field("is_end_open", &self.is_end_open)
            .finish()
    }
}

impl<T> std::fmt::Display for ContinuousInterval<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.is_start_open { '(' } else { '[' };
        let close = if self.is_end_open { ')' } else { ']' };
        write!(f, "{}{}, {}{}", open, self.start, self.end, close)
    }
}

impl<T> RangeBounds<T> for ContinuousInterval<T> {
    fn start_bound(&self) -> Bound<&T> {
        if self.is_start_open {
            Bound::Excluded(&self.start)
        } else {
            Bound::Included(&self.start)
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.is_end_open {
            Bound::Excluded(&self.end)
        } else {
            Bound::Included(&self.end)
        }
    }
}

impl<T> TryFrom<Range<T>> for ContinuousInterval<T>
where
    T: Scalar,
{
    type Error = IntervalError;

    /// Builds `[start, end)`.
    #[inline]
    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::closed_open(range.start, range.end)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for ContinuousInterval<T>
where
    T: Scalar,
{
    type Error = IntervalError;

    /// Builds `[start, end]`.
    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}
