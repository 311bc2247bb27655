use std::fmt::{self, Display};

use num_traits::PrimInt;

use super::interval::Interval;

/// Outcome of an isolation search.
///
/// Holds the isolated interval when one was found. `found()` is true exactly when
/// `interval()` is `Some`, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetectionResult<I>
where
    I: PrimInt + Send + Sync,
{
    interval: Option<Interval<I>>,
}

impl<I> DetectionResult<I>
where
    I: PrimInt + Send + Sync,
{
    /// An interval that overlaps no other interval in the set.
    #[inline]
    pub fn isolated(interval: Interval<I>) -> Self {
        DetectionResult {
            interval: Some(interval),
        }
    }

    /// Every interval overlaps at least one other interval (or the set is empty).
    #[inline]
    pub fn none() -> Self {
        DetectionResult { interval: None }
    }

    #[inline]
    pub fn found(&self) -> bool {
        self.interval.is_some()
    }

    #[inline]
    pub fn interval(&self) -> Option<Interval<I>> {
        self.interval
    }
}

impl<I> From<Option<Interval<I>>> for DetectionResult<I>
where
    I: PrimInt + Send + Sync,
{
    fn from(interval: Option<Interval<I>>) -> Self {
        DetectionResult { interval }
    }
}

impl<I> Display for DetectionResult<I>
where
    I: PrimInt + Send + Sync + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.interval {
            Some(iv) => write!(f, "true\t{}", iv),
            None => write!(f, "false"),
        }
    }
}
