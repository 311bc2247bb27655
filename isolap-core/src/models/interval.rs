use std::cmp::Ordering;
use std::fmt::{self, Display};

use num_traits::PrimInt;

use crate::errors::{IntervalError, Result};

/// Represent a closed range [low, high]
/// Inclusive of both endpoints
///
/// The fields are private so that `low <= high` holds for every value that exists.
/// Ordering is lexicographic on `(low, high)`.
#[derive(Debug, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval<I>
where
    I: PrimInt + Send + Sync,
{
    low: I,
    high: I,
}

impl<I> Interval<I>
where
    I: PrimInt + Send + Sync + Display,
{
    /// Create a new interval, rejecting `low > high`.
    ///
    /// ```
    /// use isolap_core::models::Interval;
    ///
    /// let iv = Interval::new(0, 4).unwrap();
    /// assert_eq!(iv.low(), 0);
    /// assert!(Interval::new(5, 2).is_err());
    /// ```
    #[inline]
    pub fn new(low: I, high: I) -> Result<Self> {
        if low > high {
            return Err(IntervalError::InvalidInterval {
                low: low.to_string(),
                high: high.to_string(),
            });
        }
        Ok(Interval { low, high })
    }
}

impl<I> Interval<I>
where
    I: PrimInt + Send + Sync,
{
    /// The interval between two endpoints given in either order.
    ///
    /// ```
    /// use isolap_core::models::Interval;
    ///
    /// assert_eq!(Interval::from_unordered(9, 2), Interval::new(2, 9).unwrap());
    /// ```
    #[inline]
    pub fn from_unordered(a: I, b: I) -> Self {
        Interval {
            low: std::cmp::min(a, b),
            high: std::cmp::max(a, b),
        }
    }

    #[inline]
    pub fn low(&self) -> I {
        self.low
    }

    #[inline]
    pub fn high(&self) -> I {
        self.high
    }

    /// Distance between the endpoints, or `None` when it does not fit in `I`.
    ///
    /// Only signed types can overflow here, e.g. `[i64::MIN, i64::MAX]`.
    #[inline]
    pub fn checked_span(&self) -> Option<I> {
        self.high.checked_sub(&self.low)
    }

    /// Check if two closed intervals share at least one point.
    ///
    /// Touching endpoints count: `[0, 3]` and `[3, 5]` overlap.
    #[inline]
    pub fn overlaps(&self, other: &Interval<I>) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// The smallest interval covering both `self` and `other`.
    #[inline]
    pub fn hull(&self, other: &Interval<I>) -> Interval<I> {
        Interval {
            low: std::cmp::min(self.low, other.low),
            high: std::cmp::max(self.high, other.high),
        }
    }
}

impl<I> Ord for Interval<I>
where
    I: PrimInt + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Interval<I>) -> Ordering {
        match self.low.cmp(&other.low) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.high.cmp(&other.high),
        }
    }
}

impl<I> PartialOrd for Interval<I>
where
    I: PrimInt + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I> PartialEq for Interval<I>
where
    I: PrimInt + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Interval<I>) -> bool {
        self.low == other.low && self.high == other.high
    }
}

impl<I> Display for Interval<I>
where
    I: PrimInt + Send + Sync + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn iv(low: i64, high: i64) -> Interval<i64> {
        Interval::new(low, high).unwrap()
    }

    #[rstest]
    fn test_new_rejects_inverted_bounds() {
        let err = Interval::new(5, 2).unwrap_err();
        assert!(matches!(err, IntervalError::InvalidInterval { .. }));
        assert_eq!(err.to_string(), "Invalid interval: low (5) is greater than high (2)");
    }

    #[rstest]
    fn test_new_accepts_point() {
        let p = Interval::new(7u32, 7).unwrap();
        assert_eq!(p, Interval::from_unordered(7, 7));
        assert_eq!(p.checked_span(), Some(0));
    }

    #[rstest]
    #[case((0, 4), (3, 5), true)]
    #[case((3, 5), (4, 5), true)]
    #[case((0, 3), (3, 5), true)]
    #[case((0, 3), (1, 2), true)]
    #[case((0, 4), (6, 7), false)]
    #[case((3, 5), (6, 7), false)]
    #[case((4, 5), (6, 7), false)]
    fn test_overlaps(#[case] a: (i64, i64), #[case] b: (i64, i64), #[case] expected: bool) {
        let a = iv(a.0, a.1);
        let b = iv(b.0, b.1);
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[rstest]
    #[case(iv(0, 4))]
    #[case(iv(-3, -3))]
    #[case(iv(i64::MIN, i64::MAX))]
    fn test_overlaps_is_reflexive(#[case] a: Interval<i64>) {
        assert!(a.overlaps(&a));
    }

    #[rstest]
    fn test_ordering_is_low_then_high() {
        let mut ivs = vec![iv(1, 3), iv(0, 1), iv(1, 2), iv(2, 4)];
        ivs.sort();
        assert_eq!(ivs, vec![iv(0, 1), iv(1, 2), iv(1, 3), iv(2, 4)]);
    }

    #[rstest]
    #[case(2, 9)]
    #[case(9, 2)]
    #[case(4, 4)]
    #[case(i64::MAX, i64::MIN)]
    fn test_from_unordered(#[case] a: i64, #[case] b: i64) {
        let iv = Interval::from_unordered(a, b);
        assert_eq!(iv.low(), a.min(b));
        assert_eq!(iv.high(), a.max(b));
        assert_eq!(iv, Interval::from_unordered(b, a));
    }

    #[rstest]
    fn test_hull() {
        assert_eq!(iv(0, 3).hull(&iv(2, 8)), iv(0, 8));
        assert_eq!(iv(0, 10).hull(&iv(2, 8)), iv(0, 10));
    }

    #[rstest]
    fn test_checked_span() {
        assert_eq!(iv(i64::MIN, i64::MAX).checked_span(), None);
        assert_eq!(iv(-1, i64::MAX).checked_span(), None);
        assert_eq!(iv(0, i64::MAX).checked_span(), Some(i64::MAX));
        assert_eq!(iv(-2, 5).checked_span(), Some(7));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(iv(4, 6).to_string(), "[4, 6]");
        assert_eq!(iv(-3, -3).to_string(), "[-3, -3]");
    }
}
