//! Token generators shared by the field expressions.
//!
//! Generators assume their arguments already passed the variant's validator.

use std::collections::HashSet;

use cronkit_core::{CronError, Result};
use cronkit_range::{
    CircularMonth, CircularRange, CircularWeekDay, Interval, Month, WeekDay, merge_circular_ranges,
    merge_ranges,
};

use crate::constants::{EVERY, NO_CARE};

pub(crate) fn every() -> String {
    EVERY.to_string()
}

pub(crate) fn no_care() -> String {
    NO_CARE.to_string()
}

/// `*/N`
pub(crate) fn every_nth(args: &[i32]) -> String {
    format!("*/{}", args[0])
}

/// Distinct tokens in first-seen order, comma-joined.
pub(crate) fn specific_values<F>(args: &[i32], to_text: F) -> Result<String>
where
    F: Fn(i32) -> Result<String>,
{
    let mut seen = HashSet::new();
    let mut tokens = Vec::with_capacity(args.len());
    for &value in args {
        let token = to_text(value)?;
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }
    Ok(tokens.join(","))
}

/// `low-high`, regardless of argument order.
pub(crate) fn between_inflexible(args: &[i32]) -> String {
    let (low, high) = (args[0].min(args[1]), args[0].max(args[1]));
    format!("{low}-{high}")
}

/// `first-second`, order preserved so the range may wrap (`DEC-FEB`).
pub(crate) fn between_flexible<F>(args: &[i32], to_text: F) -> Result<String>
where
    F: Fn(i32) -> Result<String>,
{
    Ok(format!("{}-{}", to_text(args[0])?, to_text(args[1])?))
}

/// Numeric ranges: values sorted ascending, paired consecutively, then merged
/// linearly (`[1,20,10,25]` renders `1-10,20-25`).
pub(crate) fn linear_ranges(args: &[i32]) -> String {
    let mut sorted = args.to_vec();
    sorted.sort_unstable();
    let ranges: Vec<Interval<i32>> = sorted
        .chunks_exact(2)
        .map(|pair| Interval::new(pair[0], pair[1]))
        .collect();
    merge_ranges(&ranges)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Month ranges paired positionally and merged around the year.
pub(crate) fn circular_month_ranges(args: &[i32]) -> Result<String> {
    let ranges = args
        .chunks_exact(2)
        .map(|pair| -> Result<_> { Ok(CircularMonth::new(month(pair[0])?, month(pair[1])?)) })
        .collect::<Result<Vec<_>>>()?;
    render_circular(&ranges)
}

/// Weekday ranges paired positionally and merged around the week.
pub(crate) fn circular_week_day_ranges(args: &[i32]) -> Result<String> {
    let ranges = args
        .chunks_exact(2)
        .map(|pair| -> Result<_> { Ok(CircularWeekDay::new(week_day(pair[0])?, week_day(pair[1])?)) })
        .collect::<Result<Vec<_>>>()?;
    render_circular(&ranges)
}

fn render_circular<R: CircularRange>(ranges: &[R]) -> Result<String> {
    Ok(merge_circular_ranges(ranges)?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(","))
}

pub(crate) fn number_text(value: i32) -> Result<String> {
    Ok(value.to_string())
}

pub(crate) fn month_text(value: i32) -> Result<String> {
    Ok(month(value)?.abbreviation().to_string())
}

pub(crate) fn week_day_text(value: i32) -> Result<String> {
    Ok(week_day(value)?.abbreviation().to_string())
}

fn month(value: i32) -> Result<Month> {
    Month::from_number(value).ok_or_else(|| CronError::invalid_arguments(&[value]))
}

fn week_day(value: i32) -> Result<WeekDay> {
    WeekDay::from_cron_index(value).ok_or_else(|| CronError::invalid_arguments(&[value]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_values_dedup_keeps_first_seen_order() {
        assert_eq!(specific_values(&[3, 2, 1, 2, 3], number_text).unwrap(), "3,2,1");
        assert_eq!(specific_values(&[1, 3, 5, 7, 0], week_day_text).unwrap(), "MON,WED,FRI,SUN");
    }

    #[test]
    fn test_between() {
        assert_eq!(between_inflexible(&[15, 1]), "1-15");
        assert_eq!(between_flexible(&[12, 2], month_text).unwrap(), "DEC-FEB");
    }

    #[test]
    fn test_linear_ranges() {
        assert_eq!(linear_ranges(&[1, 20, 10, 25]), "1-10,20-25");
        assert_eq!(linear_ranges(&[5, 15, 7, 17]), "5-7,15-17");
        assert_eq!(linear_ranges(&[10, 5, 1, 5]), "1-10");
    }

    #[test]
    fn test_circular_ranges() {
        assert_eq!(circular_month_ranges(&[4, 10, 6, 12]).unwrap(), "APR-DEC");
        assert_eq!(circular_month_ranges(&[12, 2, 3, 4]).unwrap(), "DEC-APR");
        assert_eq!(circular_week_day_ranges(&[5, 0]).unwrap(), "FRI-SUN");
        assert_eq!(circular_week_day_ranges(&[7, 2]).unwrap(), "SUN-TUE");
        assert_eq!(circular_week_day_ranges(&[1, 2, 4, 5]).unwrap(), "MON-TUE,THU-FRI");
        assert_eq!(circular_week_day_ranges(&[0, 2, 3, 6]).unwrap(), "*");
    }

    #[test]
    fn test_out_of_cycle_value() {
        assert!(month_text(13).is_err());
        assert!(week_day_text(8).is_err());
    }
}
