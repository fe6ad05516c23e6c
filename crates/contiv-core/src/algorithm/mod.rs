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

use crate::{math::interval::ContinuousInterval, num::scalar::Scalar};

/// Returns `true` if two neighbouring intervals of a normalized sequence are
/// correctly separated: `left` ends before `right` starts, or both touch at a
/// coordinate that is open on both sides.
#[inline(always)]
pub fn are_separated<T>(left: &ContinuousInterval<T>, right: &ContinuousInterval<T>) -> bool
where
    T: Scalar,
{
    left.end() < right.start()
        || (left.end() == right.start() && left.is_end_open() && right.is_start_open())
}

/// Checks whether the given intervals are disjoint and sorted by start.
///
/// Returns `true` if no interval is empty and every pair of neighbours is
/// separated (see `are_separated`), `false` otherwise. This is exactly the
/// shape a normalized `DisjointInterval` has.
#[inline(always)]
pub fn are_disjoint_and_sorted<T>(intervals: &[ContinuousInterval<T>]) -> bool
where
    T: Scalar,
{
    intervals.iter().all(|interval| !interval.is_empty())
        && intervals.windows(2).all(|w| are_separated(&w[0], &w[1]))
}

/// Binary search for the first interval whose start is strictly greater than `key`.
///
/// In a disjoint and sorted sequence the only interval that can contain
/// `key` sits right before the returned index.
///
/// # Panics
///
/// In debug builds, this function will panic if `intervals` is not disjoint
/// and sorted.
///
/// # Invariants
///
/// - `intervals` must be sorted by start in ascending order.
#[inline(always)]
pub fn upper_bound_start<T>(intervals: &[ContinuousInterval<T>], key: T) -> usize
where
    T: Scalar,
{
    debug_assert!(
        are_disjoint_and_sorted(intervals),
        "called `upper_bound_start` with intervals that are not disjoint and sorted"
    );

    let mut lo: usize = 0;
    let mut hi: usize = intervals.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if intervals[mid].start() <= key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Finds the interval of a disjoint and sorted sequence containing `value`.
///
/// Runs in `O(log n)`.
#[inline]
pub fn find_containing<T>(intervals: &[ContinuousInterval<T>], value: T) -> Option<usize>
where
    T: Scalar,
{
    let idx = upper_bound_start(intervals, value).checked_sub(1)?;
    intervals
        .get(idx)
        .filter(|interval| interval.contains_value(value))
        .map(|_| idx)
}
