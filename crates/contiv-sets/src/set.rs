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

use crate::disjoint::DisjointInterval;
use contiv_core::{
    math::{interval::ContinuousInterval, point::Point},
    num::scalar::Scalar,
};

/// An aggregate of loose points, loose intervals and disjoint interval
/// collections.
///
/// The three containers are independent; nothing is enforced between them.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSet<T> {
    points: Vec<Point<T>>,
    intervals: Vec<ContinuousInterval<T>>,
    disjoint_intervals: Vec<DisjointInterval<T>>,
}

impl<T> IntervalSet<T>
where
    T: Scalar,
{
    /// Creates a set with no points, intervals or disjoint collections.
    #[inline]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            intervals: Vec::new(),
            disjoint_intervals: Vec::new(),
        }
    }

    /// Creates a set from existing containers.
    pub fn from_parts(
        points: Vec<Point<T>>,
        intervals: Vec<ContinuousInterval<T>>,
        disjoint_intervals: Vec<DisjointInterval<T>>,
    ) -> Self {
        Self {
            points,
            intervals,
            disjoint_intervals,
        }
    }

    /// Adds a loose point.
    #[inline]
    pub fn add_point(&mut self, point: Point<T>) {
        self.points.push(point);
    }

    /// Adds a loose interval. It is not merged with anything.
    #[inline]
    pub fn add_interval(&mut self, interval: ContinuousInterval<T>) {
        self.intervals.push(interval);
    }

    /// Adds a disjoint collection as is, normalized or not.
    #[inline]
    pub fn add_disjoint_interval(&mut self, disjoint: DisjointInterval<T>) {
        self.disjoint_intervals.push(disjoint);
    }

    /// Returns the loose points in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::point::Point;
    /// # use contiv_sets::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add_point(Point::new(3));
    /// set.add_point(Point::new(-1));
    /// assert_eq!(set.points(), &[Point::new(3), Point::new(-1)]);
    /// ```
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Returns the loose intervals in insertion order.
    #[inline]
    pub fn intervals(&self) -> &[ContinuousInterval<T>] {
        &self.intervals
    }

    /// Returns the disjoint collections in insertion order.
    #[inline]
    pub fn disjoint_intervals(&self) -> &[DisjointInterval<T>] {
        &self.disjoint_intervals
    }

    /// Returns, for each of `points` in order, every interval of the set
    /// that contains it.
    ///
    /// Loose intervals are listed first, followed by the members of each
    /// disjoint collection in insertion order. A point contained in nothing
    /// yields an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::{interval::ContinuousInterval, point::Point};
    /// # use contiv_sets::{disjoint::DisjointInterval, set::IntervalSet};
    ///
    /// let mut set = IntervalSet::new();
    /// set.add_interval(ContinuousInterval::closed(0, 10).unwrap());
    /// set.add_disjoint_interval(DisjointInterval::from_intervals([
    ///     ContinuousInterval::closed(4, 6).unwrap(),
    /// ]));
    ///
    /// let hits = set.find_intervals_containing_points(&[Point::new(5), Point::new(20)]);
    /// assert_eq!(hits[0].len(), 2);
    /// assert!(hits[1].is_empty());
    /// ```
    pub fn find_intervals_containing_points(
        &self,
        points: &[Point<T>],
    ) -> Vec<Vec<ContinuousInterval<T>>> {
        points
            .iter()
            .map(|point| {
                let hits: Vec<_> = self
                    .intervals
                    .iter()
                    .chain(self.disjoint_intervals.iter().flat_map(|d| d.iter()))
                    .filter(|interval| interval.contains_point(point))
                    .copied()
                    .collect();
                log::trace!("{} is contained in {} intervals", point, hits.len());
                hits
            })
            .collect()
    }

    /// `find_intervals_containing_points` over the set's own points.
    pub fn find_intervals_containing_own_points(&self) -> Vec<Vec<ContinuousInterval<T>>> {
        self.find_intervals_containing_points(&self.points)
    }

    /// Normalizes every disjoint collection in place.
    pub fn merge_overlapping_intervals_within_disjoint_intervals(&mut self) {
        log::debug!(
            "normalizing {} disjoint interval collections",
            self.disjoint_intervals.len()
        );
        for disjoint in &mut self.disjoint_intervals {
            disjoint.merge_overlapping_intervals();
        }
    }

    /// Returns a single normalized collection covering the members of every
    /// disjoint collection. Loose intervals are not included.
    pub fn merged_disjoint_intervals(&self) -> DisjointInterval<T> {
        let mut merged: DisjointInterval<T> = self
            .disjoint_intervals
            .iter()
            .flat_map(|d| d.iter().copied())
            .collect();
        merged.merge_overlapping_intervals();
        merged
    }
}

impl<T> Default for IntervalSet<T>
where
    T: Scalar,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
