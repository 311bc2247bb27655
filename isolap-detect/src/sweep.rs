//! Sort-then-sweep isolation detection.
//!
//! After sorting by `(low, high)`, intervals that chain into overlap form contiguous
//! runs. A single pass keeps the union of the current run (its envelope) and whether
//! that run still holds only one interval. A run that ends while still holding one
//! interval is isolated.
//!
//! Sorting costs O(n log n); the pass itself is O(n) with O(1) extra state.
use std::ops::ControlFlow;

use log::debug;
use num_traits::PrimInt;

use super::ordering::SortedIntervals;
use super::traits::{DetectionResult, Detector, Interval};

/// Running state of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SweepState<I>
where
    I: PrimInt + Send + Sync,
{
    /// Union extent of the current run.
    envelope: Interval<I>,
    /// True while the run consists of exactly one interval.
    single_run: bool,
}

impl<I> SweepState<I>
where
    I: PrimInt + Send + Sync,
{
    fn start(interval: Interval<I>) -> Self {
        SweepState {
            envelope: interval,
            single_run: true,
        }
    }

    /// Fold one sorted interval into the state.
    ///
    /// Breaks with the isolated interval as soon as one is certain.
    fn step(self, idx: usize, last: usize, next: Interval<I>) -> ControlFlow<Interval<I>, Self> {
        if self.envelope.overlaps(&next) {
            return ControlFlow::Continue(SweepState {
                envelope: self.envelope.hull(&next),
                single_run: false,
            });
        }

        if idx == 1 {
            // the first interval never merged with anything
            ControlFlow::Break(self.envelope)
        } else if idx == last {
            // the last interval starts past everything before it
            ControlFlow::Break(next)
        } else if self.single_run {
            ControlFlow::Break(self.envelope)
        } else {
            ControlFlow::Continue(SweepState::start(next))
        }
    }
}

/// O(n log n) isolation check: sort a copy, then sweep it once.
///
/// When several isolated intervals exist the one reported may differ from
/// [`NaiveDetector`](crate::NaiveDetector)'s choice, but `found()` always agrees.
///
/// ```
/// use isolap_detect::{Detector, Interval, SweepDetector};
///
/// let intervals = vec![
///     Interval::new(4u32, 6).unwrap(),
///     Interval::new(5, 7).unwrap(),
///     Interval::new(7, 10).unwrap(),
///     Interval::new(25, 50).unwrap(),
/// ];
/// let result = SweepDetector.detect(&intervals);
/// assert_eq!(result.interval(), Some(Interval::new(25, 50).unwrap()));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepDetector;

impl SweepDetector {
    /// Run the sweep on input that is already sorted.
    pub fn detect_presorted<I>(&self, sorted: &SortedIntervals<I>) -> DetectionResult<I>
    where
        I: PrimInt + Send + Sync,
    {
        let (first, rest) = match sorted.as_slice() {
            [] => return DetectionResult::none(),
            [only] => return DetectionResult::isolated(*only),
            [first, rest @ ..] => (*first, rest),
        };
        let last = sorted.len() - 1;

        let outcome = rest
            .iter()
            .enumerate()
            .try_fold(SweepState::start(first), |state, (offset, &next)| {
                state.step(offset + 1, last, next)
            });

        match outcome {
            ControlFlow::Break(isolated) => DetectionResult::isolated(isolated),
            ControlFlow::Continue(state) => {
                debug!(
                    "sweep finished {} intervals without an isolated run (last run single: {})",
                    sorted.len(),
                    state.single_run
                );
                DetectionResult::none()
            }
        }
    }
}

impl<I> Detector<I> for SweepDetector
where
    I: PrimInt + Send + Sync,
{
    fn detect(&self, intervals: &[Interval<I>]) -> DetectionResult<I> {
        self.detect_presorted(&SortedIntervals::from(intervals))
    }

    fn name(&self) -> &'static str {
        "sweep"
    }
}
