//! Linear intervals and the sweep merger.
//!
//! An [`Interval`] is a closed pair `[from, to]` ordered by either the natural
//! order of `T` or a caller-supplied comparator. [`merge_ranges`] reduces a list
//! of intervals to the minimal sorted list covering the same points.
//!
//! Intersection is deliberately asymmetric:
//! `compare(a.from, b.to) < 0 && compare(a.to, b.from) >= 0`.
//! Intervals that share exactly one endpoint (`[1,5]` and `[5,10]`) therefore
//! intersect and merge, while a degenerate interval whose only point equals the
//! other's start does not.

use std::cmp::Ordering;
use std::fmt;

use cronkit_core::{CronError, Result};

/// Comparison function used to order interval endpoints.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// A closed interval `[from, to]`, normalized so that `from <= to`.
#[derive(Clone, Copy)]
pub struct Interval<T> {
    from: T,
    to: T,
    comparator: Comparator<T>,
}

impl<T: Ord> Interval<T> {
    /// Creates an interval ordered by `T`'s natural order, swapping the
    /// endpoints if they are given in descending order.
    ///
    /// ```rust
    /// # use cronkit_range::Interval;
    /// let iv = Interval::new(7, 3);
    /// assert_eq!((*iv.from(), *iv.to()), (3, 7));
    /// ```
    pub fn new(from: T, to: T) -> Self {
        Self::with_comparator(from, to, T::cmp)
    }
}

impl<T> Interval<T> {
    /// Creates an interval ordered by `comparator`.
    pub fn with_comparator(from: T, to: T, comparator: Comparator<T>) -> Self {
        let (from, to) = if comparator(&from, &to) == Ordering::Greater {
            (to, from)
        } else {
            (from, to)
        };
        Self {
            from,
            to,
            comparator,
        }
    }

    pub fn from(&self) -> &T {
        &self.from
    }

    pub fn to(&self) -> &T {
        &self.to
    }

    pub fn comparator(&self) -> Comparator<T> {
        self.comparator
    }

    /// Returns `true` if `other` intersects this interval under the asymmetric
    /// boundary rule described in the module docs.
    pub fn is_intersected(&self, other: &Self) -> bool {
        let compare = self.comparator;
        compare(&self.from, &other.to) == Ordering::Less
            && compare(&self.to, &other.from) != Ordering::Less
    }
}

impl<T: Clone> Interval<T> {
    /// Returns the smallest interval covering both `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`CronError::RangeNotIntersecting`] if the intervals do not
    /// intersect.
    ///
    /// ```rust
    /// # use cronkit_range::Interval;
    /// let merged = Interval::new(1, 5).merge(&Interval::new(4, 8)).unwrap();
    /// assert_eq!(merged, Interval::new(1, 8));
    /// assert!(Interval::new(1, 2).merge(&Interval::new(4, 8)).is_err());
    /// ```
    pub fn merge(&self, other: &Self) -> Result<Self> {
        if !self.is_intersected(other) {
            return Err(CronError::RangeNotIntersecting);
        }
        Ok(self.span(other))
    }

    fn span(&self, other: &Self) -> Self {
        let compare = self.comparator;
        let from = if compare(&self.from, &other.from) == Ordering::Less {
            self.from.clone()
        } else {
            other.from.clone()
        };
        let to = if compare(&self.to, &other.to) == Ordering::Greater {
            self.to.clone()
        } else {
            other.to.clone()
        };
        Self::with_comparator(from, to, compare)
    }
}

impl<T: PartialEq> PartialEq for Interval<T> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<T: Eq> Eq for Interval<T> {}

impl<T: fmt::Debug> fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.from, self.to)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Merges intersecting intervals using `T`'s natural order.
pub fn merge_ranges<T: Ord + Clone>(ranges: &[Interval<T>]) -> Vec<Interval<T>> {
    merge_ranges_by(ranges, T::cmp)
}

/// Merges intersecting intervals using `comparator` for sorting and
/// intersection tests.
///
/// The input is sorted by `from` (stable), then swept left to right: each
/// interval either extends the current accumulator or flushes it. The output is
/// sorted, pairwise non-intersecting and covers exactly the input's points.
pub fn merge_ranges_by<T: Clone>(
    ranges: &[Interval<T>],
    comparator: Comparator<T>,
) -> Vec<Interval<T>> {
    let mut sorted: Vec<Interval<T>> = ranges
        .iter()
        .map(|r| Interval {
            comparator,
            ..r.clone()
        })
        .collect();
    sorted.sort_by(|a, b| comparator(&a.from, &b.from));

    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::with_capacity(ranges.len());
    for next in iter {
        if current.is_intersected(&next) {
            current = current.span(&next);
        } else {
            merged.push(std::mem::replace(&mut current, next));
        }
    }
    merged.push(current);

    tracing::debug!("Merged {} ranges into {}", ranges.len(), merged.len());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn iv(from: i32, to: i32) -> Interval<i32> {
        Interval::new(from, to)
    }

    fn points(ranges: &[Interval<i32>]) -> BTreeSet<i32> {
        ranges.iter().flat_map(|r| *r.from()..=*r.to()).collect()
    }

    fn random_ranges(rng: &mut StdRng, degenerate: bool) -> Vec<Interval<i32>> {
        let count = rng.gen_range(0..12);
        (0..count)
            .map(|_| {
                let from = rng.gen_range(0..60);
                let len = if degenerate {
                    rng.gen_range(0..10)
                } else {
                    rng.gen_range(1..10)
                };
                iv(from, from + len)
            })
            .collect()
    }

    #[test]
    fn test_new_normalizes_order() {
        let r = iv(9, 2);
        assert_eq!(*r.from(), 2);
        assert_eq!(*r.to(), 9);
    }

    #[test]
    fn test_custom_comparator_normalizes_order() {
        let reversed: Comparator<i32> = |a, b| b.cmp(a);
        let r = Interval::with_comparator(2, 9, reversed);
        assert_eq!((*r.from(), *r.to()), (9, 2));
    }

    #[test]
    fn test_is_intersected() {
        assert!(iv(1, 5).is_intersected(&iv(3, 7)));
        assert!(iv(1, 5).is_intersected(&iv(5, 10)));
        assert!(!iv(1, 5).is_intersected(&iv(6, 10)));
        assert!(iv(1, 10).is_intersected(&iv(3, 4)));
    }

    #[test]
    fn test_is_intersected_is_asymmetric() {
        // Degenerate interval sitting on the other's start.
        assert!(!iv(5, 5).is_intersected(&iv(5, 5)));
        assert!(iv(5, 5).is_intersected(&iv(5, 8)));
        assert!(!iv(5, 8).is_intersected(&iv(5, 5)));
    }

    #[test]
    fn test_merge() {
        assert_eq!(iv(1, 5).merge(&iv(4, 8)).unwrap(), iv(1, 8));
        assert_eq!(iv(1, 5).merge(&iv(5, 10)).unwrap(), iv(1, 10));
        assert_eq!(iv(1, 10).merge(&iv(2, 3)).unwrap(), iv(1, 10));
    }

    #[test]
    fn test_merge_non_intersected() {
        let err = iv(1, 2).merge(&iv(4, 8)).unwrap_err();
        assert!(matches!(err, CronError::RangeNotIntersecting));
    }

    #[test]
    fn test_merge_ranges_empty() {
        assert!(merge_ranges::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_merge_ranges_overlapping() {
        assert_eq!(merge_ranges(&[iv(1, 5), iv(3, 7)]), vec![iv(1, 7)]);
    }

    #[test]
    fn test_merge_ranges_shared_endpoint() {
        assert_eq!(merge_ranges(&[iv(5, 10), iv(1, 5)]), vec![iv(1, 10)]);
    }

    #[test]
    fn test_merge_ranges_disjoint_and_unsorted() {
        let merged = merge_ranges(&[iv(20, 25), iv(1, 3), iv(10, 12), iv(2, 4)]);
        assert_eq!(merged, vec![iv(1, 4), iv(10, 12), iv(20, 25)]);
    }

    #[test]
    fn test_merge_ranges_nested() {
        assert_eq!(
            merge_ranges(&[iv(1, 20), iv(3, 4), iv(5, 6), iv(18, 22)]),
            vec![iv(1, 22)]
        );
    }

    #[test]
    fn test_merge_ranges_adjacent_without_shared_point_stay_apart() {
        assert_eq!(merge_ranges(&[iv(1, 4), iv(5, 8)]), vec![iv(1, 4), iv(5, 8)]);
    }

    #[test]
    fn test_merge_ranges_strings() {
        let merged = merge_ranges(&[
            Interval::new("apple", "cherry"),
            Interval::new("banana", "date"),
            Interval::new("kiwi", "lemon"),
        ]);
        assert_eq!(
            merged,
            vec![Interval::new("apple", "date"), Interval::new("kiwi", "lemon")]
        );
    }

    #[test]
    fn test_merge_ranges_by_comparator() {
        // Order strings by length only.
        let by_len: Comparator<&str> = |a, b| a.len().cmp(&b.len());
        let merged = merge_ranges_by(
            &[
                Interval::with_comparator("a", "ccc", by_len),
                Interval::with_comparator("bb", "dddd", by_len),
                Interval::with_comparator("eeeeee", "fffffff", by_len),
            ],
            by_len,
        );
        assert_eq!(merged.len(), 2);
        assert_eq!((*merged[0].from(), *merged[0].to()), ("a", "dddd"));
        assert_eq!((*merged[1].from(), *merged[1].to()), ("eeeeee", "fffffff"));
    }

    #[test]
    fn test_merge_ranges_reverse_comparator() {
        let reversed: Comparator<i32> = |a, b| b.cmp(a);
        let merged = merge_ranges_by(
            &[
                Interval::with_comparator(1, 5, reversed),
                Interval::with_comparator(4, 9, reversed),
            ],
            reversed,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!((*merged[0].from(), *merged[0].to()), (9, 1));
    }

    #[test]
    fn test_merge_ranges_degenerate_duplicates() {
        // Point intervals on the same start never intersect each other.
        let merged = merge_ranges(&[iv(5, 5), iv(5, 5), iv(5, 8)]);
        assert_eq!(merged, vec![iv(5, 5), iv(5, 8)]);
        assert_eq!(points(&merged), BTreeSet::from([5, 6, 7, 8]));
    }

    #[test]
    fn test_merge_ranges_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let ranges = random_ranges(&mut rng, false);
            let once = merge_ranges(&ranges);
            assert_eq!(merge_ranges(&once), once, "input: {ranges:?}");
        }
    }

    #[test]
    fn test_merge_ranges_preserves_union() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let ranges = random_ranges(&mut rng, true);
            let merged = merge_ranges(&ranges);
            assert_eq!(points(&merged), points(&ranges), "input: {ranges:?}");
        }
    }

    #[test]
    fn test_merge_ranges_sorted_and_non_intersecting() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let ranges = random_ranges(&mut rng, false);
            let merged = merge_ranges(&ranges);
            for pair in merged.windows(2) {
                assert!(pair[0].from() <= pair[1].from(), "unsorted: {merged:?}");
                assert!(!pair[0].is_intersected(&pair[1]), "overlap: {merged:?}");
            }
        }
    }
}
