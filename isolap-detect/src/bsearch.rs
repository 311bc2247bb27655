use num_traits::PrimInt;

use super::ordering::SortedIntervals;
use super::traits::{DetectionResult, Detector, Interval};

/// Isolation check by binary search over the sorted intervals.
///
/// Borrowed from the BITS idea: with the intervals sorted by `low` and the longest
/// span known, every partner of an interval `[low, high]` must start somewhere in
/// `[low - max_span, high]`. Two binary searches bound that window, and only the
/// window is scanned.
///
/// The first interval in sorted order without a partner is reported. This detector
/// exists to cross-check [`SweepDetector`](crate::SweepDetector); it adds no
/// behaviour of its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BinarySearchDetector;

impl BinarySearchDetector {
    /// Run the search on input that is already sorted.
    pub fn detect_presorted<I>(&self, sorted: &SortedIntervals<I>) -> DetectionResult<I>
    where
        I: PrimInt + Send + Sync,
    {
        let max_span = sorted.max_span();
        sorted
            .iter()
            .enumerate()
            .find(|&(pos, interval)| !Self::has_partner(sorted, pos, interval, max_span))
            .map(|(_, interval)| *interval)
            .into()
    }

    /// First index whose `low` is at least `start`.
    ///
    /// Callers pass `low - max_span` so that every interval able to reach `low` is at
    /// or after the returned index.
    #[inline]
    pub fn lower_bound<I>(start: I, intervals: &[Interval<I>]) -> usize
    where
        I: PrimInt + Send + Sync,
    {
        intervals.partition_point(|iv| iv.low() < start)
    }

    /// First index whose `low` lies past `stop`.
    #[inline]
    pub fn upper_bound<I>(stop: I, intervals: &[Interval<I>]) -> usize
    where
        I: PrimInt + Send + Sync,
    {
        intervals.partition_point(|iv| iv.low() <= stop)
    }

    /// `max_span` is `None` when some span overflows `I`; the window then opens at the
    /// start of the slice.
    fn has_partner<I>(sorted: &[Interval<I>], pos: usize, interval: &Interval<I>, max_span: Option<I>) -> bool
    where
        I: PrimInt + Send + Sync,
    {
        let reach = max_span
            .and_then(|span| interval.low().checked_sub(&span))
            .unwrap_or_else(I::min_value);
        let first = Self::lower_bound(reach, sorted);
        let stop = Self::upper_bound(interval.high(), sorted);

        (first..stop)
            .filter(|&other| other != pos)
            .any(|other| interval.overlaps(&sorted[other]))
    }
}

impl<I> Detector<I> for BinarySearchDetector
where
    I: PrimInt + Send + Sync,
{
    fn detect(&self, intervals: &[Interval<I>]) -> DetectionResult<I> {
        self.detect_presorted(&SortedIntervals::from(intervals))
    }

    fn name(&self) -> &'static str {
        "bsearch"
    }
}
