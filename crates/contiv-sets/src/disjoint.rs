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

use contiv_core::{
    algorithm::{are_disjoint_and_sorted, are_separated, find_containing},
    math::{interval::ContinuousInterval, point::Point},
    num::scalar::Scalar,
};
use std::cmp::Ordering;

/// A collection of continuous intervals that can be normalized into a
/// sorted sequence of non-overlapping intervals.
///
/// Inserting is cheap: `add_interval` appends without any overlap check.
/// `merge_overlapping_intervals` sorts and merges the whole collection. It
/// is a full recomputation, and a no-op when nothing was added since the
/// last one.
///
/// After normalization:
/// - intervals are sorted by start,
/// - no two intervals share a coordinate,
/// - two neighbours touching at a coordinate are kept apart only if that
///   coordinate is open on both sides,
/// - empty intervals are gone.
///
/// # Examples
///
/// ```rust
/// # use contiv_core::math::{interval::ContinuousInterval, point::Point};
/// # use contiv_sets::disjoint::DisjointInterval;
///
/// let mut set = DisjointInterval::new();
/// set.add_interval(ContinuousInterval::closed(5, 8).unwrap());
/// set.add_interval(ContinuousInterval::closed_open(0, 5).unwrap());
/// set.add_interval(ContinuousInterval::closed(10, 12).unwrap());
///
/// let normalized = set.non_overlapping_intervals();
/// assert_eq!(normalized.len(), 2);
/// assert_eq!(normalized[0], ContinuousInterval::closed(0, 8).unwrap());
///
/// assert!(set.contains_point(&Point::new(11)));
/// assert!(!set.contains_point(&Point::new(9)));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointInterval<T> {
    intervals: Vec<ContinuousInterval<T>>,
    normalized: bool,
}

impl<T> DisjointInterval<T>
where
    T: Scalar,
{
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
            normalized: true,
        }
    }

    /// Creates a collection holding `intervals` in the given order, without
    /// normalizing them.
    pub fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = ContinuousInterval<T>>,
    {
        let intervals: Vec<_> = intervals.into_iter().collect();
        Self {
            normalized: intervals.is_empty(),
            intervals,
        }
    }

    /// Appends `interval` without checking for overlaps.
    #[inline]
    pub fn add_interval(&mut self, interval: ContinuousInterval<T>) {
        self.intervals.push(interval);
        self.normalized = false;
    }

    /// Sorts the collection by start and merges every pair of intervals that
    /// are not separated.
    ///
    /// On equal starts a closed start sorts before an open one. Merged
    /// intervals are the hull of their members, so a shared extremal
    /// coordinate stays closed if any member is closed there.
    pub fn merge_overlapping_intervals(&mut self) {
        if self.normalized {
            return;
        }

        let before = self.intervals.len();
        let mut sorted = std::mem::take(&mut self.intervals);
        sorted.sort_by(|a, b| {
            a.start()
                .partial_cmp(&b.start())
                .unwrap_or(Ordering::Equal)
                .then(a.is_start_open().cmp(&b.is_start_open()))
        });

        let mut merged: Vec<ContinuousInterval<T>> = Vec::with_capacity(sorted.len());
        for interval in sorted.into_iter().filter(|interval| !interval.is_empty()) {
            match merged.last_mut() {
                Some(last) if !are_separated(last, &interval) => {
                    let hull = last.hull(&interval);
                    log::trace!("merging {} with {} into {}", last, interval, hull);
                    *last = hull;
                }
                _ => merged.push(interval),
            }
        }

        log::debug!(
            "normalized {} intervals into {} disjoint intervals",
            before,
            merged.len()
        );

        self.intervals = merged;
        self.normalized = true;
    }

    /// Normalizes the collection and returns the resulting intervals.
    pub fn non_overlapping_intervals(&mut self) -> &[ContinuousInterval<T>] {
        self.merge_overlapping_intervals();
        &self.intervals
    }

    /// Returns the first interval, in current order, that contains `point`.
    ///
    /// Uses a binary search when the collection is normalized and a linear
    /// scan otherwise.
    pub fn interval_containing_point(&self, point: &Point<T>) -> Option<&ContinuousInterval<T>> {
        if self.normalized {
            find_containing(&self.intervals, point.value()).and_then(|idx| self.intervals.get(idx))
        } else {
            self.intervals
                .iter()
                .find(|interval| interval.contains_point(point))
        }
    }

    /// Returns `true` if any interval of the collection contains `point`.
    #[inline]
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        self.interval_containing_point(point).is_some()
    }

    /// Returns the intervals in their current order.
    #[inline]
    pub fn intervals(&self) -> &[ContinuousInterval<T>] {
        &self.intervals
    }

    /// Returns an iterator over the intervals in their current order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    /// # use contiv_sets::disjoint::DisjointInterval;
    ///
    /// let set = DisjointInterval::from_intervals([
    ///     ContinuousInterval::closed(4, 6).unwrap(),
    ///     ContinuousInterval::closed(0, 1).unwrap(),
    /// ]);
    /// let starts: Vec<i32> = set.iter().map(|iv| iv.start()).collect();
    /// assert_eq!(starts, vec![4, 0]);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ContinuousInterval<T>> {
        self.intervals.iter()
    }

    /// Returns the number of stored intervals.
    ///
    /// Before normalization this counts every inserted interval, afterwards
    /// the merged ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use contiv_core::math::interval::ContinuousInterval;
    /// # use contiv_sets::disjoint::DisjointInterval;
    ///
    /// let mut set = DisjointInterval::from_intervals([
    ///     ContinuousInterval::closed(0, 5).unwrap(),
    ///     ContinuousInterval::closed(3, 8).unwrap(),
    /// ]);
    /// assert_eq!(set.len(), 2);
    /// set.merge_overlapping_intervals();
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the collection holds no interval.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns `true` if the intervals are already in normalized shape.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.normalized || are_disjoint_and_sorted(&self.intervals)
    }

    /// Normalizes the collection and returns the summed length of its
    /// intervals.
    ///
    /// Saturates at the maximum of `T`, like `ContinuousInterval::length`.
    pub fn total_length(&mut self) -> T {
        self.merge_overlapping_intervals();
        self.intervals
            .iter()
            .fold(T::zero(), |acc, interval| {
                acc.saturating_add_val(interval.length())
            })
    }
}

impl<T> Default for DisjointInterval<T>
where
    T: Scalar,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for DisjointInterval<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.intervals == other.intervals
    }
}

impl<T> std::fmt::Display for DisjointInterval<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

impl<T> FromIterator<ContinuousInterval<T>> for DisjointInterval<T>
where
    T: Scalar,
{
    fn from_iter<I: IntoIterator<Item = ContinuousInterval<T>>>(iter: I) -> Self {
        Self::from_intervals(iter)
    }
}

impl<T> Extend<ContinuousInterval<T>> for DisjointInterval<T>
where
    T: Scalar,
{
    fn extend<I: IntoIterator<Item = ContinuousInterval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.add_interval(interval);
        }
    }
}

impl<T> IntoIterator for DisjointInterval<T> {
    type Item = ContinuousInterval<T>;
    type IntoIter = std::vec::IntoIter<ContinuousInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DisjointInterval<T> {
    type Item = &'a ContinuousInterval<T>;
    type IntoIter = std::slice::Iter<'a, ContinuousInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn iv(
        s: IntegerType,
        e: IntegerType,
        so: bool,
        eo: bool,
    ) -> ContinuousInterval<IntegerType> {
        ContinuousInterval::new(s, e, so, eo).unwrap()
    }

    fn closed(s: IntegerType, e: IntegerType) -> ContinuousInterval<IntegerType> {
        iv(s, e, false, false)
    }

    fn normalize(
        intervals: Vec<ContinuousInterval<IntegerType>>,
    ) -> Vec<ContinuousInterval<IntegerType>> {
        let mut set = DisjointInterval::from_intervals(intervals);
        set.non_overlapping_intervals().to_vec()
    }

    #[test]
    fn test_new_is_empty_and_normalized() {
        let set = DisjointInterval::<IntegerType>::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.is_normalized());
        assert_eq!(set, DisjointInterval::default());
    }

    #[test]
    fn test_add_interval_keeps_insertion_order() {
        let mut set = DisjointInterval::new();
        set.add_interval(closed(5, 8));
        set.add_interval(closed(0, 6));
        assert_eq!(set.intervals(), &[closed(5, 8), closed(0, 6)]);
        assert!(!set.is_normalized());
    }

    #[test]
    fn test_merge_overlapping() {
        let merged = normalize(vec![closed(5, 8), closed(0, 6), closed(10, 12)]);
        assert_eq!(merged, vec![closed(0, 8), closed(10, 12)]);
    }

    #[test]
    fn test_merge_keeps_separated_intervals() {
        let merged = normalize(vec![closed(10, 12), closed(0, 2), closed(4, 6)]);
        assert_eq!(merged, vec![closed(0, 2), closed(4, 6), closed(10, 12)]);
    }

    #[test]
    fn test_merge_touching_with_one_closed_side() {
        let merged = normalize(vec![iv(0, 5, false, true), iv(5, 10, false, true)]);
        assert_eq!(merged, vec![iv(0, 10, false, true)]);

        let merged = normalize(vec![iv(5, 10, true, false), closed(0, 5)]);
        assert_eq!(merged, vec![closed(0, 10)]);
    }

    #[test]
    fn test_merge_touching_both_open_stays_apart() {
        let merged = normalize(vec![iv(5, 10, true, false), iv(0, 5, false, true)]);
        assert_eq!(merged, vec![iv(0, 5, false, true), iv(5, 10, true, false)]);
    }

    #[test]
    fn test_merge_contained() {
        let merged = normalize(vec![iv(2, 3, true, true), closed(0, 10), iv(4, 6, false, true)]);
        assert_eq!(merged, vec![closed(0, 10)]);
    }

    #[test]
    fn test_merge_openness_follows_union() {
        // Same start: a closed start wins.
        let merged = normalize(vec![iv(0, 3, true, true), iv(0, 2, false, true)]);
        assert_eq!(merged, vec![iv(0, 3, false, true)]);

        // Same end: open only if every member is open there.
        let merged = normalize(vec![iv(0, 5, false, true), iv(2, 5, true, true)]);
        assert_eq!(merged, vec![iv(0, 5, false, true)]);

        let merged = normalize(vec![iv(0, 5, false, true), iv(2, 5, true, false)]);
        assert_eq!(merged, vec![closed(0, 5)]);
    }

    #[test]
    fn test_merge_chain() {
        let merged = normalize(vec![
            closed(8, 9),
            iv(0, 2, false, true),
            closed(2, 4),
            iv(4, 8, true, true),
        ]);
        assert_eq!(merged, vec![closed(0, 9)]);
    }

    #[test]
    fn test_merge_drops_empty_intervals() {
        let merged = normalize(vec![
            ContinuousInterval::empty(),
            closed(-3, -1),
            ContinuousInterval::empty(),
        ]);
        assert_eq!(merged, vec![closed(-3, -1)]);
        assert!(normalize(vec![ContinuousInterval::empty()]).is_empty());
    }

    #[test]
    fn test_merge_idempotent() {
        let mut set = DisjointInterval::from_intervals(vec![closed(5, 8), closed(0, 6)]);
        set.merge_overlapping_intervals();
        let first = set.intervals().to_vec();
        set.merge_overlapping_intervals();
        assert_eq!(set.intervals(), first.as_slice());
        assert!(set.is_normalized());
    }

    #[test]
    fn test_add_after_merge_renormalizes() {
        let mut set = DisjointInterval::from_intervals(vec![closed(0, 2), closed(5, 7)]);
        set.merge_overlapping_intervals();
        set.add_interval(closed(1, 6));
        assert!(!set.is_normalized());
        assert_eq!(set.non_overlapping_intervals(), &[closed(0, 7)]);
    }

    #[test]
    fn test_interval_containing_point_unnormalized() {
        let set = DisjointInterval::from_intervals(vec![closed(5, 8), closed(0, 6)]);
        // First match in insertion order.
        assert_eq!(set.interval_containing_point(&Point::new(5)), Some(&closed(5, 8)));
        assert_eq!(set.interval_containing_point(&Point::new(1)), Some(&closed(0, 6)));
        assert_eq!(set.interval_containing_point(&Point::new(9)), None);
    }

    #[test]
    fn test_interval_containing_point_normalized() {
        let mut set = DisjointInterval::from_intervals(vec![
            iv(0, 5, false, true),
            iv(5, 10, true, true),
            closed(20, 30),
        ]);
        set.merge_overlapping_intervals();
        assert_eq!(set.interval_containing_point(&Point::new(0)), Some(&iv(0, 5, false, true)));
        assert_eq!(set.interval_containing_point(&Point::new(5)), None);
        assert_eq!(set.interval_containing_point(&Point::new(7)), Some(&iv(5, 10, true, true)));
        assert_eq!(set.interval_containing_point(&Point::new(30)), Some(&closed(20, 30)));
        assert!(!set.contains_point(&Point::new(15)));
        assert!(set.contains_point(&Point::new(25)));
    }

    #[test]
    fn test_total_length() {
        let mut set = DisjointInterval::from_intervals(vec![closed(0, 6), closed(5, 8), closed(10, 12)]);
        assert_eq!(set.total_length(), 10);
        assert_eq!(DisjointInterval::<IntegerType>::new().total_length(), 0);
    }

    #[test]
    fn test_total_length_saturates() {
        let mut set = DisjointInterval::from_intervals(vec![
            closed(IntegerType::MIN, -10),
            closed(10, IntegerType::MAX),
        ]);
        assert_eq!(set.total_length(), IntegerType::MAX);

        let mut small = DisjointInterval::from_intervals(vec![
            ContinuousInterval::closed(i8::MIN, -100).unwrap(),
            ContinuousInterval::closed(100, i8::MAX).unwrap(),
        ]);
        assert_eq!(small.total_length(), 55);
    }

    #[test]
    fn test_float_collection() {
        let mut set: DisjointInterval<f64> = [
            ContinuousInterval::closed_open(0.0, 1.5).unwrap(),
            ContinuousInterval::closed(1.0, 2.0).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            set.non_overlapping_intervals(),
            &[ContinuousInterval::closed(0.0, 2.0).unwrap()]
        );
        assert_eq!(set.total_length(), 2.0);
    }

    #[test]
    fn test_collect_extend_iterate() {
        let mut set: DisjointInterval<IntegerType> = vec![closed(0, 1)].into_iter().collect();
        set.extend([closed(3, 4), closed(1, 2)]);
        assert_eq!(set.len(), 3);

        let starts: Vec<_> = (&set).into_iter().map(|interval| interval.start()).collect();
        assert_eq!(starts, vec![0, 3, 1]);

        set.merge_overlapping_intervals();
        let owned: Vec<_> = set.into_iter().collect();
        assert_eq!(owned, vec![closed(0, 2), closed(3, 4)]);
    }

    #[test]
    fn test_display() {
        let mut set = DisjointInterval::from_intervals(vec![closed(6, 8), iv(0, 5, false, true)]);
        set.merge_overlapping_intervals();
        assert_eq!(set.to_string(), "{[0, 5), [6, 8]}");
        assert_eq!(DisjointInterval::<IntegerType>::new().to_string(), "{}");
    }
}
