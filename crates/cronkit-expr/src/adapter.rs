//! Constructors that map calendar types and ranges onto cron fields.
//!
//! ```
//! use cronkit_expr::adapter::{between_hours, between_week_days};
//! use cronkit_expr::CronExpression;
//! use cronkit_range::WeekDay;
//!
//! let expression = CronExpression::new()
//!     .with_hour(between_hours(9, 17))
//!     .with_week_day(between_week_days(WeekDay::Monday, WeekDay::Friday));
//! assert_eq!(expression.render().unwrap(), "* * 9-17 * * MON-FRI");
//! ```

use cronkit_range::{Month, WeekDay};
use serde::{Deserialize, Serialize};

use crate::expression::{
    DayExpression, HourExpression, MonthExpression, SecondMinuteExpression, WeekDayExpression,
};
use crate::field::{CronField, DayField, HourField, MonthField, WeekDayField};

/// Whether a range keeps its argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeType {
    /// Order kept, so the range may wrap (`DEC-FEB`).
    Flexible,
    /// Reordered to `low-high`.
    #[default]
    Inflexible,
}

/// Numeric range handed to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRange {
    pub start: i32,
    pub end: i32,
}

impl FieldRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn with_type(start: i32, end: i32, range_type: RangeType) -> Self {
        match range_type {
            RangeType::Inflexible => Self::new(start.min(end), start.max(end)),
            RangeType::Flexible => Self::new(start, end),
        }
    }
}

/// Month range; `start` may come after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    pub start: Month,
    pub end: Month,
}

impl MonthRange {
    pub fn new(start: impl Into<Month>, end: impl Into<Month>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn to_range(&self) -> FieldRange {
        FieldRange::new(self.start.number(), self.end.number())
    }
}

/// Weekday range; `start` may come after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDayRange {
    pub start: WeekDay,
    pub end: WeekDay,
}

impl WeekDayRange {
    pub fn new(start: impl Into<WeekDay>, end: impl Into<WeekDay>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn to_range(&self) -> FieldRange {
        FieldRange::new(self.start.cron_index(), self.end.cron_index())
    }
}

fn flatten(ranges: &[FieldRange], range_type: RangeType) -> Vec<i32> {
    ranges
        .iter()
        .map(|r| FieldRange::with_type(r.start, r.end, range_type))
        .flat_map(|r| [r.start, r.end])
        .collect()
}

// ── Seconds and minutes ─────────────────────────────────

pub fn every_n_seconds_minutes(n: i32) -> CronField<SecondMinuteExpression> {
    CronField::new(SecondMinuteExpression::EveryN, [n])
}

pub fn between_seconds_minutes(from: i32, to: i32) -> CronField<SecondMinuteExpression> {
    CronField::new(SecondMinuteExpression::Between, [from, to])
}

pub fn specific_seconds_minutes(values: &[i32]) -> CronField<SecondMinuteExpression> {
    CronField::new(SecondMinuteExpression::SpecificValues, values)
}

pub fn specific_second_minute_ranges(ranges: &[FieldRange]) -> CronField<SecondMinuteExpression> {
    CronField::new(
        SecondMinuteExpression::SpecificRanges,
        flatten(ranges, RangeType::Inflexible),
    )
}

// ── Hours ───────────────────────────────────────────────

pub fn every_n_hours(n: i32) -> HourField {
    CronField::new(HourExpression::EveryNHour, [n])
}

pub fn between_hours(from: i32, to: i32) -> HourField {
    CronField::new(HourExpression::BetweenHours, [from, to])
}

pub fn specific_hours(hours: &[i32]) -> HourField {
    CronField::new(HourExpression::SpecificHours, hours)
}

pub fn specific_hour_ranges(ranges: &[FieldRange]) -> HourField {
    CronField::new(
        HourExpression::SpecificHourRanges,
        flatten(ranges, RangeType::Inflexible),
    )
}

// ── Day of month ────────────────────────────────────────

pub fn every_n_days(n: i32) -> DayField {
    CronField::new(DayExpression::EveryNDay, [n])
}

pub fn between_days(from: i32, to: i32) -> DayField {
    CronField::new(DayExpression::BetweenDays, [from, to])
}

pub fn specific_days(days: &[i32]) -> DayField {
    CronField::new(DayExpression::SpecificDays, days)
}

pub fn specific_day_ranges(ranges: &[FieldRange]) -> DayField {
    CronField::new(
        DayExpression::SpecificDayRanges,
        flatten(ranges, RangeType::Inflexible),
    )
}

/// `L-n`
pub fn n_to_last_day_of_month(n: i32) -> DayField {
    CronField::new(DayExpression::NToLastDay, [n])
}

// ── Month ───────────────────────────────────────────────

pub fn every_n_months(n: i32) -> MonthField {
    CronField::new(MonthExpression::EveryNMonth, [n])
}

pub fn between_months(from: impl Into<Month>, to: impl Into<Month>) -> MonthField {
    CronField::new(
        MonthExpression::BetweenMonths,
        [from.into().number(), to.into().number()],
    )
}

pub fn specific_months(months: &[Month]) -> MonthField {
    let values: Vec<i32> = months.iter().map(Month::number).collect();
    CronField::new(MonthExpression::SpecificMonths, values)
}

pub fn specific_month_ranges(ranges: &[MonthRange]) -> MonthField {
    let ranges: Vec<FieldRange> = ranges.iter().map(MonthRange::to_range).collect();
    CronField::new(
        MonthExpression::SpecificMonthRanges,
        flatten(&ranges, RangeType::Flexible),
    )
}

// ── Day of week ─────────────────────────────────────────

pub fn every_n_week_days(n: i32) -> WeekDayField {
    CronField::new(WeekDayExpression::EveryNWeekDay, [n])
}

pub fn between_week_days(from: impl Into<WeekDay>, to: impl Into<WeekDay>) -> WeekDayField {
    CronField::new(
        WeekDayExpression::BetweenWeekDays,
        [from.into().cron_index(), to.into().cron_index()],
    )
}

pub fn specific_week_days(week_days: &[WeekDay]) -> WeekDayField {
    let values: Vec<i32> = week_days.iter().map(WeekDay::cron_index).collect();
    CronField::new(WeekDayExpression::SpecificWeekDays, values)
}

pub fn specific_week_day_ranges(ranges: &[WeekDayRange]) -> WeekDayField {
    let ranges: Vec<FieldRange> = ranges.iter().map(WeekDayRange::to_range).collect();
    CronField::new(
        WeekDayExpression::SpecificWeekDayRanges,
        flatten(&ranges, RangeType::Flexible),
    )
}

/// `DAY#nth`, e.g. the second Tuesday of the month.
pub fn nth_occurrence(week_day: impl Into<WeekDay>, nth: i32) -> WeekDayField {
    CronField::new(
        WeekDayExpression::NthOccurrence,
        [week_day.into().cron_index(), nth],
    )
}

/// `DAYL`
pub fn last_week_day_of_month(week_day: impl Into<WeekDay>) -> WeekDayField {
    CronField::new(WeekDayExpression::LastOfMonth, [week_day.into().cron_index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_range_types() {
        assert_eq!(FieldRange::with_type(10, 1, RangeType::Inflexible), FieldRange::new(1, 10));
        assert_eq!(FieldRange::with_type(10, 1, RangeType::Flexible), FieldRange::new(10, 1));
    }

    #[test]
    fn test_numeric_builders() {
        assert_eq!(every_n_seconds_minutes(5).render().unwrap(), "*/5");
        assert_eq!(between_seconds_minutes(50, 10).render().unwrap(), "10-50");
        assert_eq!(specific_seconds_minutes(&[5, 1, 5]).render().unwrap(), "5,1");
        assert_eq!(every_n_hours(2).render().unwrap(), "*/2");
        assert_eq!(specific_hours(&[6, 18]).render().unwrap(), "6,18");
        assert_eq!(every_n_days(10).render().unwrap(), "*/10");
        assert_eq!(between_days(20, 10).render().unwrap(), "10-20");
        assert_eq!(specific_days(&[1, 15]).render().unwrap(), "1,15");
        assert_eq!(n_to_last_day_of_month(3).render().unwrap(), "L-3");
    }

    #[test]
    fn test_numeric_range_builders_reorder() {
        let field = specific_day_ranges(&[FieldRange::new(10, 1), FieldRange::new(20, 25)]);
        assert_eq!(field.arguments, vec![1, 10, 20, 25]);
        assert_eq!(field.render().unwrap(), "1-10,20-25");

        let field = specific_hour_ranges(&[FieldRange::new(22, 18), FieldRange::new(0, 6)]);
        assert_eq!(field.render().unwrap(), "0-6,18-22");

        let field = specific_second_minute_ranges(&[FieldRange::new(15, 0), FieldRange::new(20, 30)]);
        assert_eq!(field.render().unwrap(), "0-15,20-30");
    }

    #[test]
    fn test_month_builders() {
        assert_eq!(every_n_months(3).render().unwrap(), "*/3");
        assert_eq!(between_months(Month::December, Month::February).render().unwrap(), "DEC-FEB");
        assert_eq!(
            between_months(chrono::Month::March, chrono::Month::May).render().unwrap(),
            "MAR-MAY"
        );
        assert_eq!(
            specific_months(&[Month::March, Month::January, Month::March]).render().unwrap(),
            "MAR,JAN"
        );
        let field = specific_month_ranges(&[
            MonthRange::new(Month::December, Month::February),
            MonthRange::new(Month::March, Month::April),
        ]);
        assert_eq!(field.arguments, vec![12, 2, 3, 4]);
        assert_eq!(field.render().unwrap(), "DEC-APR");
    }

    #[test]
    fn test_week_day_builders() {
        assert_eq!(every_n_week_days(2).render().unwrap(), "*/2");
        assert_eq!(
            between_week_days(chrono::Weekday::Fri, chrono::Weekday::Sun).render().unwrap(),
            "FRI-SUN"
        );
        assert_eq!(
            specific_week_days(&[WeekDay::Sunday, WeekDay::Monday]).render().unwrap(),
            "SUN,MON"
        );
        let field = specific_week_day_ranges(&[
            WeekDayRange::new(WeekDay::Saturday, WeekDay::Sunday),
            WeekDayRange::new(WeekDay::Monday, WeekDay::Tuesday),
        ]);
        assert_eq!(field.render().unwrap(), "SAT-TUE");
        assert_eq!(nth_occurrence(WeekDay::Tuesday, 2).render().unwrap(), "TUE#2");
        assert_eq!(last_week_day_of_month(WeekDay::Friday).render().unwrap(), "FRIL");
    }

    #[test]
    fn test_builder_arguments_still_validated() {
        assert!(every_n_hours(0).render().is_err());
        assert!(nth_occurrence(WeekDay::Monday, 6).render().is_err());
        assert!(specific_days(&[]).render().is_err());
    }
}
