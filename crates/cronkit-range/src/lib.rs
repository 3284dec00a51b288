//! # Cronkit Range
//!
//! Range merging used by the cron field generators.
//!
//! ## Architecture
//! ```text
//! interval.rs  Interval<T> + merge_ranges        linear, any ordered type
//! circular.rs  CircularRange + merge_circular    wrap-around over a fixed cycle
//! cycle.rs     WeekDay, Month                    calendar cycles
//! ```

pub mod circular;
pub mod cycle;
pub mod interval;

pub use circular::{
    CircularMonth, CircularRange, CircularWeekDay, IntCircularRange, TransformedSegment,
    merge_circular_ranges,
};
pub use cycle::{Month, WeekDay};
pub use interval::{Comparator, Interval, merge_ranges, merge_ranges_by};
