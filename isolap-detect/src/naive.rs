use num_traits::PrimInt;

use super::traits::{DetectionResult, Detector, Interval};

/// Exhaustive O(n²) isolation check.
///
/// Every interval is compared against every other one, stopping at the first
/// partner it overlaps. The first interval in input order without a partner wins,
/// which makes this the reference the sorted detectors are tested against.
///
/// ```
/// use isolap_detect::{Detector, Interval, NaiveDetector};
///
/// let intervals = vec![
///     Interval::new(0u32, 3).unwrap(),
///     Interval::new(4, 6).unwrap(),
///     Interval::new(5, 7).unwrap(),
/// ];
/// let result = NaiveDetector.detect(&intervals);
/// assert_eq!(result.interval(), Some(Interval::new(0, 3).unwrap()));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaiveDetector;

impl<I> Detector<I> for NaiveDetector
where
    I: PrimInt + Send + Sync,
{
    fn detect(&self, intervals: &[Interval<I>]) -> DetectionResult<I> {
        intervals
            .iter()
            .enumerate()
            .find(|&(idx, interval)| {
                !intervals
                    .iter()
                    .enumerate()
                    .any(|(other_idx, other)| other_idx != idx && interval.overlaps(other))
            })
            .map(|(_, interval)| *interval)
            .into()
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}
