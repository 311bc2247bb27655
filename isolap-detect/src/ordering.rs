use std::cmp::Ordering;
use std::ops::Deref;

use num_traits::PrimInt;

use isolap_core::models::Interval;

/// Compare two intervals by `low`, then by `high`, both ascending.
///
/// This is the order the sorted detectors rely on: once an interval's `low` passes
/// the running envelope's `high`, nothing later in the order can reach back into it.
#[inline]
pub fn total_order<I>(a: &Interval<I>, b: &Interval<I>) -> Ordering
where
    I: PrimInt + Send + Sync,
{
    a.cmp(b)
}

/// Sort a copy of `intervals` by [`total_order`]. The input is left untouched.
///
/// Equal `(low, high)` pairs are interchangeable, so an unstable sort is enough.
pub fn sort_intervals<I>(intervals: &[Interval<I>]) -> Vec<Interval<I>>
where
    I: PrimInt + Send + Sync,
{
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable_by(total_order);
    sorted
}

/// A vector of intervals known to be in [`total_order`].
///
/// Build one when several sorted detectors run over the same input, so the sort is
/// paid once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedIntervals<I>(Vec<Interval<I>>)
where
    I: PrimInt + Send + Sync;

impl<I> SortedIntervals<I>
where
    I: PrimInt + Send + Sync,
{
    #[inline]
    pub fn as_slice(&self) -> &[Interval<I>] {
        &self.0
    }

    /// The largest `high - low` among the intervals, or zero when empty.
    ///
    /// `None` when some interval's span does not fit in `I`, which can only happen
    /// for signed types (e.g. `[i64::MIN, i64::MAX]`).
    pub fn max_span(&self) -> Option<I> {
        self.0.iter().try_fold(I::zero(), |widest, iv| {
            iv.checked_span().map(|span| widest.max(span))
        })
    }
}

impl<I> From<&[Interval<I>]> for SortedIntervals<I>
where
    I: PrimInt + Send + Sync,
{
    fn from(intervals: &[Interval<I>]) -> Self {
        SortedIntervals(sort_intervals(intervals))
    }
}

impl<I> Deref for SortedIntervals<I>
where
    I: PrimInt + Send + Sync,
{
    type Target = [Interval<I>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
