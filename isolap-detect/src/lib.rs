//! Detect whether a set of closed intervals holds one that overlaps no other.
//!
//! This crate provides the isolation detectors of the isolap workspace. All of them
//! share the [`Detector`] trait and the same result contract: an interval is
//! *isolated* when it overlaps zero other intervals of the set, touching endpoints
//! included. A cluster of intervals that only overlap each other is never isolated.
//!
//! ## Detectors
//!
//! - [`NaiveDetector`]: compares every pair, O(n²). The reference oracle.
//! - [`SweepDetector`]: sorts a copy by `(low, high)` and sweeps it once with a running
//!   envelope, O(n log n). The one to use.
//! - [`BinarySearchDetector`]: sorts a copy and binary searches each interval's
//!   candidate window. Used to cross-check the sweep.
//!
//! ## Quick Start
//!
//! ```rust
//! use isolap_detect::{Detector, DetectorType, Interval};
//!
//! let intervals = vec![
//!     Interval::new(3i64, 5).unwrap(),
//!     Interval::new(4, 6).unwrap(),
//!     Interval::new(7, 9).unwrap(),
//!     Interval::new(10, 30).unwrap(),
//!     Interval::new(10, 20).unwrap(),
//! ];
//!
//! let result = DetectorType::Sweep.detect(&intervals);
//! assert!(result.found());
//! assert_eq!(result.interval(), Some(Interval::new(7, 9).unwrap()));
//! ```
//!
//! All detectors are pure. The sorted ones never reorder the caller's slice; they sort
//! a copy.
use std::fmt::{self, Display};
use std::str::FromStr;

use num_traits::PrimInt;

pub mod bsearch;
pub mod naive;
pub mod ordering;
pub mod sweep;
pub mod traits;

// re-exports
pub use self::bsearch::BinarySearchDetector;
pub use self::naive::NaiveDetector;
pub use self::ordering::{SortedIntervals, sort_intervals, total_order};
pub use self::sweep::SweepDetector;
pub use self::traits::{DetectionResult, Detector, Interval, overlaps};

/// The detector to run.
///
/// A closed set of strategies; `DetectorType` itself implements [`Detector`] by
/// matching on the variant, so no trait objects are involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DetectorType {
    /// Exhaustive pairwise comparison.
    Naive,
    /// Sort then single envelope sweep.
    Sweep,
    /// Sort then per-interval binary search.
    #[cfg_attr(feature = "serde", serde(rename = "bsearch"))]
    BinarySearch,
}

impl DetectorType {
    /// Every detector, in the order reports list them.
    pub const ALL: [DetectorType; 3] = [
        DetectorType::Naive,
        DetectorType::Sweep,
        DetectorType::BinarySearch,
    ];

    /// Run the sorted detectors on input that was sorted once up front.
    ///
    /// The naive detector has no use for sorted input and runs on it as given, so its
    /// tie-break follows sorted order here.
    pub fn detect_presorted<I>(&self, sorted: &SortedIntervals<I>) -> DetectionResult<I>
    where
        I: PrimInt + Send + Sync,
    {
        match self {
            DetectorType::Naive => NaiveDetector.detect(sorted.as_slice()),
            DetectorType::Sweep => SweepDetector.detect_presorted(sorted),
            DetectorType::BinarySearch => BinarySearchDetector.detect_presorted(sorted),
        }
    }
}

impl<I> Detector<I> for DetectorType
where
    I: PrimInt + Send + Sync,
{
    fn detect(&self, intervals: &[Interval<I>]) -> DetectionResult<I> {
        match self {
            DetectorType::Naive => NaiveDetector.detect(intervals),
            DetectorType::Sweep => SweepDetector.detect(intervals),
            DetectorType::BinarySearch => BinarySearchDetector.detect(intervals),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DetectorType::Naive => Detector::<I>::name(&NaiveDetector),
            DetectorType::Sweep => Detector::<I>::name(&SweepDetector),
            DetectorType::BinarySearch => Detector::<I>::name(&BinarySearchDetector),
        }
    }
}

impl Display for DetectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(Detector::<i64>::name(self))
    }
}

impl FromStr for DetectorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(DetectorType::Naive),
            "sweep" | "sorted" | "dynamic" => Ok(DetectorType::Sweep),
            "bsearch" | "binary-search" => Ok(DetectorType::BinarySearch),
            _ => Err(format!(
                "Invalid detector: {}. Valid options are 'naive', 'sweep' or 'bsearch'",
                s
            )),
        }
    }
}

/// Run the O(n²) reference detector.
pub fn detect_naive<I>(intervals: &[Interval<I>]) -> DetectionResult<I>
where
    I: PrimInt + Send + Sync,
{
    NaiveDetector.detect(intervals)
}

/// Run the sort-and-sweep detector. Sorts a copy; `intervals` is untouched.
pub fn detect_sorted<I>(intervals: &[Interval<I>]) -> DetectionResult<I>
where
    I: PrimInt + Send + Sync,
{
    SweepDetector.detect(intervals)
}

/// Run the binary-search cross-check. Sorts a copy; `intervals` is untouched.
pub fn detect_bsearch<I>(intervals: &[Interval<I>]) -> DetectionResult<I>
where
    I: PrimInt + Send + Sync,
{
    BinarySearchDetector.detect(intervals)
}

/// Constants used throughout the crate.
pub mod consts {
    /// Default detector for callers that do not pick one.
    pub const DEFAULT_DETECTOR: &str = "sweep";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rstest::*;

    fn random_intervals(rng: &mut StdRng, n: usize, upper: i64, max_span: i64) -> Vec<Interval<i64>> {
        (0..n)
            .map(|_| {
                let low = rng.random_range(0..upper);
                let span = rng.random_range(0..=max_span);
                Interval::new(low, low + span).unwrap()
            })
            .collect()
    }

    /// Count how many intervals have no overlapping partner, by brute force.
    fn isolated_count(intervals: &[Interval<i64>]) -> usize {
        intervals
            .iter()
            .enumerate()
            .filter(|&(i, a)| {
                !intervals
                    .iter()
                    .enumerate()
                    .any(|(j, b)| i != j && a.overlaps(b))
            })
            .count()
    }

    #[rstest]
    fn test_overlaps_symmetric_and_reflexive() {
        let mut rng = StdRng::seed_from_u64(7);
        let ivs = random_intervals(&mut rng, 200, 100, 10);
        for a in &ivs {
            assert!(overlaps(a, a));
            for b in &ivs {
                assert_eq!(overlaps(a, b), overlaps(b, a));
            }
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(42)]
    fn test_detectors_agree_on_random_input(#[case] seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for n in 0..60 {
            // sparse enough that isolated intervals show up regularly
            let ivs = random_intervals(&mut rng, n, 400, 12);
            let naive = detect_naive(&ivs);
            let sorted = detect_sorted(&ivs);
            let bsearch = detect_bsearch(&ivs);

            assert_eq!(naive.found(), sorted.found(), "input: {:?}", ivs);
            assert_eq!(naive.found(), bsearch.found(), "input: {:?}", ivs);
            assert_eq!(naive.found(), isolated_count(&ivs) > 0);

            if isolated_count(&ivs) == 1 {
                assert_eq!(naive, sorted, "input: {:?}", ivs);
                assert_eq!(naive, bsearch, "input: {:?}", ivs);
            }

            // whatever is reported must really be isolated
            for result in [naive, sorted, bsearch] {
                if let Some(hit) = result.interval() {
                    let partners = ivs.iter().filter(|other| hit.overlaps(other)).count();
                    assert_eq!(partners, 1, "{} is not isolated in {:?}", hit, ivs);
                }
            }
        }
    }

    #[rstest]
    #[case(5)]
    #[case(19)]
    fn test_detectors_agree_near_type_bounds(#[case] seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..200 {
            let n = rng.random_range(0..8);
            let mut ivs = random_intervals(&mut rng, n, 400, 12);
            // a few intervals whose spans may not fit in i64
            let wide = rng.random_range(0..3);
            for _ in 0..wide {
                let a = rng.random_range(i64::MIN..=i64::MAX);
                let b = rng.random_range(i64::MIN..=i64::MAX);
                ivs.push(Interval::new(a.min(b), a.max(b)).unwrap());
            }
            if rng.random_bool(0.3) {
                ivs.push(Interval::new(i64::MIN, i64::MAX).unwrap());
            }
            if rng.random_bool(0.3) {
                ivs.push(Interval::new(i64::MAX - 3, i64::MAX).unwrap());
            }
            ivs.shuffle(&mut rng);

            let naive = detect_naive(&ivs);
            assert_eq!(naive.found(), detect_sorted(&ivs).found(), "input: {:?}", ivs);
            assert_eq!(naive.found(), detect_bsearch(&ivs).found(), "input: {:?}", ivs);
            assert_eq!(naive.found(), isolated_count(&ivs) > 0, "input: {:?}", ivs);
        }
    }

    #[rstest]
    fn test_full_range_interval_hides_everything() {
        let ivs = vec![
            Interval::new(i64::MIN, i64::MAX).unwrap(),
            Interval::new(5, 6).unwrap(),
        ];
        for detector in DetectorType::ALL {
            assert!(!detector.detect(&ivs).found(), "{}", detector);
        }
    }

    #[rstest]
    fn test_sorted_is_permutation_invariant() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut ivs = random_intervals(&mut rng, 25, 300, 10);
            let expected = detect_sorted(&ivs);
            for _ in 0..5 {
                ivs.shuffle(&mut rng);
                assert_eq!(detect_sorted(&ivs), expected);
                assert_eq!(detect_bsearch(&ivs), detect_bsearch(&sort_intervals(&ivs)));
            }
        }
    }

    #[rstest]
    fn test_detector_type_dispatch() {
        let ivs: Vec<Interval<u32>> = vec![
            Interval::new(0, 3).unwrap(),
            Interval::new(4, 6).unwrap(),
            Interval::new(5, 7).unwrap(),
            Interval::new(7, 10).unwrap(),
        ];
        let sorted = SortedIntervals::from(ivs.as_slice());
        for detector in DetectorType::ALL {
            assert_eq!(detector.detect(&ivs).interval(), Some(ivs[0]));
            assert_eq!(detector.detect_presorted(&sorted), detector.detect(&ivs));
        }
    }

    #[rstest]
    #[case("naive", DetectorType::Naive)]
    #[case("SWEEP", DetectorType::Sweep)]
    #[case("dynamic", DetectorType::Sweep)]
    #[case("bsearch", DetectorType::BinarySearch)]
    fn test_detector_type_from_str(#[case] input: &str, #[case] expected: DetectorType) {
        assert_eq!(input.parse::<DetectorType>().unwrap(), expected);
    }

    #[rstest]
    fn test_detector_type_round_trips_through_display() {
        for detector in DetectorType::ALL {
            assert_eq!(detector.to_string().parse::<DetectorType>().unwrap(), detector);
        }
        assert!("quadratic".parse::<DetectorType>().is_err());
    }
}
