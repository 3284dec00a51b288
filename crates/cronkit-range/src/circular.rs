//! Circular ranges over a fixed cycle and their merger.
//!
//! A circular range `(start, end)` may wrap past the end of its cycle
//! (FRIDAY..MONDAY, DECEMBER..FEBRUARY, 22..2 on a 24-hour clock).
//!
//! ## Merge algorithm
//! ```text
//! ranges ──▶ index segments (wrapping ranges split in two)
//!        ──▶ sort by (start, end)
//!        ──▶ sweep: join when max(starts) <= min(ends) + 1
//!        ──▶ re-join first/last if they touch both cycle ends
//!        ──▶ TransformedSegment text ("MON-FRI", or "*" for the full cycle)
//! ```

use std::fmt;

use cronkit_core::{CronError, Result};

use crate::cycle::{Month, WeekDay};

/// A range over a fixed, ordered cycle of elements.
///
/// `start` and `end` must both be present in [`CircularRange::elements`].
pub trait CircularRange {
    type Element: Copy + Ord + fmt::Debug;

    fn start(&self) -> Self::Element;

    fn end(&self) -> Self::Element;

    /// Every element of the cycle, in cycle order.
    fn elements(&self) -> &[Self::Element];

    /// Text used when rendering a merged segment boundary.
    fn to_text(&self, element: Self::Element) -> String;
}

/// Weekday range, MONDAY..SUNDAY cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularWeekDay {
    pub start: WeekDay,
    pub end: WeekDay,
}

impl CircularWeekDay {
    pub fn new(start: WeekDay, end: WeekDay) -> Self {
        Self { start, end }
    }
}

impl CircularRange for CircularWeekDay {
    type Element = WeekDay;

    fn start(&self) -> WeekDay {
        self.start
    }

    fn end(&self) -> WeekDay {
        self.end
    }

    fn elements(&self) -> &[WeekDay] {
        &WeekDay::ALL
    }

    fn to_text(&self, element: WeekDay) -> String {
        element.abbreviation().to_string()
    }
}

/// Month range, JANUARY..DECEMBER cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularMonth {
    pub start: Month,
    pub end: Month,
}

impl CircularMonth {
    pub fn new(start: Month, end: Month) -> Self {
        Self { start, end }
    }
}

impl CircularRange for CircularMonth {
    type Element = Month;

    fn start(&self) -> Month {
        self.start
    }

    fn end(&self) -> Month {
        self.end
    }

    fn elements(&self) -> &[Month] {
        &Month::ALL
    }

    fn to_text(&self, element: Month) -> String {
        element.abbreviation().to_string()
    }
}

/// Integer range over a caller-supplied cycle such as the hours `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntCircularRange<'a> {
    pub start: i32,
    pub end: i32,
    cycle: &'a [i32],
}

impl<'a> IntCircularRange<'a> {
    pub fn new(start: i32, end: i32, cycle: &'a [i32]) -> Self {
        Self { start, end, cycle }
    }
}

impl CircularRange for IntCircularRange<'_> {
    type Element = i32;

    fn start(&self) -> i32 {
        self.start
    }

    fn end(&self) -> i32 {
        self.end
    }

    fn elements(&self) -> &[i32] {
        self.cycle
    }

    fn to_text(&self, element: i32) -> String {
        element.to_string()
    }
}

/// Inclusive index interval within a cycle. Ordered by `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Segment {
    start: usize,
    end: usize,
}

impl Segment {
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Overlapping, or separated by no index at all (`0-2` and `3-4`).
    fn touches(&self, other: &Segment) -> bool {
        self.start.max(other.start) <= self.end.min(other.end) + 1
    }

    fn union(&self, other: &Segment) -> Segment {
        Segment::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// A merged segment rendered through its cycle's text transformer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedSegment {
    pub start: String,
    pub end: String,
    /// The segment covers the whole cycle.
    pub full_range: bool,
}

impl TransformedSegment {
    fn from_segment<R: CircularRange>(segment: Segment, sample: &R) -> Self {
        let elements = sample.elements();
        let start = elements[segment.start];
        let end = elements[segment.end];
        let full_range = elements.iter().min() == Some(&start) && elements.iter().max() == Some(&end);
        Self {
            start: sample.to_text(start),
            end: sample.to_text(end),
            full_range,
        }
    }

    /// `*` for a full-cycle segment, `start-end` otherwise.
    pub fn to_range_represent(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TransformedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.full_range {
            f.write_str("*")
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Merges circular ranges into the minimal list of rendered segments.
///
/// All ranges must share one cycle; the first range supplies the cycle and the
/// text transformer. An empty input yields an empty result.
///
/// # Errors
///
/// Returns [`CronError::ElementNotInCycle`] if a range endpoint is not an
/// element of the cycle.
pub fn merge_circular_ranges<R: CircularRange>(ranges: &[R]) -> Result<Vec<TransformedSegment>> {
    let Some(sample) = ranges.first() else {
        return Ok(Vec::new());
    };
    let cycle = sample.elements();
    let cycle_len = cycle.len();

    let index_of = |element: R::Element| {
        cycle
            .iter()
            .position(|e| *e == element)
            .ok_or_else(|| CronError::ElementNotInCycle {
                element: format!("{element:?}"),
            })
    };

    let mut segments = Vec::with_capacity(ranges.len() * 2);
    for range in ranges {
        let start = index_of(range.start())?;
        let end = index_of(range.end())?;
        if start <= end {
            segments.push(Segment::new(start, end));
        } else {
            segments.push(Segment::new(start, cycle_len - 1));
            segments.push(Segment::new(0, end));
        }
    }

    let merged = merge_segments(segments, cycle_len);
    tracing::debug!("Merged {} circular ranges into {} segments", ranges.len(), merged.len());

    Ok(merged
        .into_iter()
        .map(|segment| TransformedSegment::from_segment(segment, sample))
        .collect())
}

/// Sorts and sweeps segments, then re-joins a pair split at the cycle boundary.
fn merge_segments(mut segments: Vec<Segment>, cycle_len: usize) -> Vec<Segment> {
    segments.sort();

    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.touches(&segment) => *last = last.union(&segment),
            _ => merged.push(segment),
        }
    }

    if merged.len() > 1 {
        let first = merged[0];
        let last = merged[merged.len() - 1];
        if first.start == 0 && last.end == cycle_len - 1 {
            merged.pop();
            merged.remove(0);
            merged.push(Segment::new(last.start, first.end));
        }
    }

    merged
}
