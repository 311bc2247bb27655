use num_traits::PrimInt;

pub use isolap_core::models::{DetectionResult, Interval};

/// Shared interface of every isolation detector.
///
/// Implementors are pure: they never mutate the input and keep no state between
/// calls.
pub trait Detector<I>: Send + Sync
where
    I: PrimInt + Send + Sync,
{
    /// Find an interval in `intervals` that overlaps none of the others.
    fn detect(&self, intervals: &[Interval<I>]) -> DetectionResult<I>;

    /// Short, stable name used in logs and reports.
    fn name(&self) -> &'static str;
}

/// Check if two closed intervals share at least one point.
#[inline]
pub fn overlaps<I>(a: &Interval<I>, b: &Interval<I>) -> bool
where
    I: PrimInt + Send + Sync,
{
    a.overlaps(b)
}
