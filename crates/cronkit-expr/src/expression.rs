//! Field expressions: the named ways of specifying one cron field.
//!
//! Every variant pairs a validator with a generator. Callers go through
//! [`PartExpression::generate_final_expression`], which refuses to generate
//! from arguments the validator rejected.
//!
//! | Field        | Bounds | Every-N | Between                 | Specials          |
//! |--------------|--------|---------|-------------------------|-------------------|
//! | second/minute| 0..=59 | 1..=59  | inflexible (`low-high`) |                   |
//! | hour         | 0..=23 | 1..=23  | inflexible              |                   |
//! | day of month | 1..=31 | 1..=31  | inflexible              | `L-N`             |
//! | month        | 1..=12 | 1..=12  | flexible (`DEC-FEB`)    |                   |
//! | day of week  | 0..=7  | 1..=7   | circular merge          | `DAY#n`, `DAYL`   |

use std::fmt;
use std::str::FromStr;

use cronkit_core::{CronError, Result};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::generators::{self, month_text, number_text, week_day_text};
use crate::validators::{
    is_list_within, is_multi_range_list, is_pair_within, is_single_within,
};

/// Behaviour shared by the five field expression enums.
pub trait PartExpression: Copy + PartialEq + Sized + 'static {
    /// Field label used in diagnostics (`"hour"`, `"day of week"`).
    const FIELD: &'static str;

    /// Every variant of the field, in declaration order.
    const ALL: &'static [Self];

    /// Stable snake_case name, shared with serde.
    fn name(&self) -> &'static str;

    fn validate(&self, args: &[i32]) -> bool;

    /// Renders the token. Arguments are assumed valid.
    fn generate(&self, args: &[i32]) -> Result<String>;

    /// Validates, then generates.
    ///
    /// # Errors
    ///
    /// [`CronError::InvalidArguments`] carrying `args` when validation fails.
    fn generate_final_expression(&self, args: &[i32]) -> Result<String> {
        if !self.validate(args) {
            tracing::warn!("Rejected {} arguments {:?} for '{}'", Self::FIELD, args, self.name());
            return Err(CronError::invalid_arguments(args));
        }
        let token = self.generate(args)?;
        tracing::debug!("{} '{}' {:?} -> {}", Self::FIELD, self.name(), args, token);
        Ok(token)
    }
}

/// Looks a variant up by name, ignoring ASCII case.
fn parse_expression<E: PartExpression>(name: &str) -> Result<E> {
    E::ALL
        .iter()
        .copied()
        .find(|e| e.name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CronError::UnknownExpression {
            field: E::FIELD,
            name: name.to_string(),
        })
}

// ── Seconds and minutes ─────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondMinuteExpression {
    #[default]
    Every,
    EveryN,
    Between,
    SpecificValues,
    SpecificRanges,
    NoCare,
}

impl PartExpression for SecondMinuteExpression {
    const FIELD: &'static str = "second/minute";

    const ALL: &'static [Self] = &[
        Self::Every,
        Self::EveryN,
        Self::Between,
        Self::SpecificValues,
        Self::SpecificRanges,
        Self::NoCare,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Every => "every",
            Self::EveryN => "every_n",
            Self::Between => "between",
            Self::SpecificValues => "specific_values",
            Self::SpecificRanges => "specific_ranges",
            Self::NoCare => "no_care",
        }
    }

    fn validate(&self, args: &[i32]) -> bool {
        match self {
            Self::Every | Self::NoCare => true,
            Self::EveryN => is_single_within(args, EVERY_N_MIN, SECOND_MINUTE_MAX),
            Self::Between => is_pair_within(args, SECOND_MINUTE_MIN, SECOND_MINUTE_MAX),
            Self::SpecificValues => is_list_within(args, SECOND_MINUTE_MIN, SECOND_MINUTE_MAX),
            Self::SpecificRanges => {
                is_multi_range_list(args, SECOND_MINUTE_MIN, SECOND_MINUTE_MAX)
            }
        }
    }

    fn generate(&self, args: &[i32]) -> Result<String> {
        match self {
            Self::Every => Ok(generators::every()),
            Self::EveryN => Ok(generators::every_nth(args)),
            Self::Between => Ok(generators::between_inflexible(args)),
            Self::SpecificValues => generators::specific_values(args, number_text),
            Self::SpecificRanges => Ok(generators::linear_ranges(args)),
            Self::NoCare => Ok(generators::no_care()),
        }
    }
}

// ── Hours ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourExpression {
    #[default]
    EveryHour,
    EveryNHour,
    BetweenHours,
    SpecificHours,
    SpecificHourRanges,
    HourNoCare,
}

impl PartExpression for HourExpression {
    const FIELD: &'static str = "hour";

    const ALL: &'static [Self] = &[
        Self::EveryHour,
        Self::EveryNHour,
        Self::BetweenHours,
        Self::SpecificHours,
        Self::SpecificHourRanges,
        Self::HourNoCare,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::EveryHour => "every_hour",
            Self::EveryNHour => "every_n_hour",
            Self::BetweenHours => "between_hours",
            Self::SpecificHours => "specific_hours",
            Self::SpecificHourRanges => "specific_hour_ranges",
            Self::HourNoCare => "hour_no_care",
        }
    }

    fn validate(&self, args: &[i32]) -> bool {
        match self {
            Self::EveryHour | Self::HourNoCare => true,
            Self::EveryNHour => is_single_within(args, EVERY_N_MIN, HOUR_MAX),
            Self::BetweenHours => is_pair_within(args, HOUR_MIN, HOUR_MAX),
            Self::SpecificHours => is_list_within(args, HOUR_MIN, HOUR_MAX),
            Self::SpecificHourRanges => is_multi_range_list(args, HOUR_MIN, HOUR_MAX),
        }
    }

    fn generate(&self, args: &[i32]) -> Result<String> {
        match self {
            Self::EveryHour => Ok(generators::every()),
            Self::EveryNHour => Ok(generators::every_nth(args)),
            Self::BetweenHours => Ok(generators::between_inflexible(args)),
            Self::SpecificHours => generators::specific_values(args, number_text),
            Self::SpecificHourRanges => Ok(generators::linear_ranges(args)),
            Self::HourNoCare => Ok(generators::no_care()),
        }
    }
}

// ── Day of month ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayExpression {
    #[default]
    EveryDay,
    EveryNDay,
    BetweenDays,
    SpecificDays,
    SpecificDayRanges,
    /// `L-N`: N days before the last day of the month.
    NToLastDay,
    DayNoCare,
}

impl PartExpression for DayExpression {
    const FIELD: &'static str = "day of month";

    const ALL: &'static [Self] = &[
        Self::EveryDay,
        Self::EveryNDay,
        Self::BetweenDays,
        Self::SpecificDays,
        Self::SpecificDayRanges,
        Self::NToLastDay,
        Self::DayNoCare,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::EveryDay => "every_day",
            Self::EveryNDay => "every_n_day",
            Self::BetweenDays => "between_days",
            Self::SpecificDays => "specific_days",
            Self::SpecificDayRanges => "specific_day_ranges",
            Self::NToLastDay => "n_to_last_day",
            Self::DayNoCare => "day_no_care",
        }
    }

    fn validate(&self, args: &[i32]) -> bool {
        match self {
            Self::EveryDay | Self::DayNoCare => true,
            Self::EveryNDay | Self::NToLastDay => {
                is_single_within(args, DAY_OF_MONTH_MIN, DAY_OF_MONTH_MAX)
            }
            Self::BetweenDays => is_pair_within(args, DAY_OF_MONTH_MIN, DAY_OF_MONTH_MAX),
            Self::SpecificDays => is_list_within(args, DAY_OF_MONTH_MIN, DAY_OF_MONTH_MAX),
            Self::SpecificDayRanges => {
                is_multi_range_list(args, DAY_OF_MONTH_MIN, DAY_OF_MONTH_MAX)
            }
        }
    }

    fn generate(&self, args: &[i32]) -> Result<String> {
        match self {
            Self::EveryDay => Ok(generators::every()),
            Self::EveryNDay => Ok(generators::every_nth(args)),
            Self::BetweenDays => Ok(generators::between_inflexible(args)),
            Self::SpecificDays => generators::specific_values(args, number_text),
            Self::SpecificDayRanges => Ok(generators::linear_ranges(args)),
            Self::NToLastDay => Ok(format!("L-{}", args[0])),
            Self::DayNoCare => Ok(generators::no_care()),
        }
    }
}

// ── Month ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthExpression {
    #[default]
    EveryMonth,
    EveryNMonth,
    BetweenMonths,
    SpecificMonths,
    SpecificMonthRanges,
    MonthNoCare,
}

impl PartExpression for MonthExpression {
    const FIELD: &'static str = "month";

    const ALL: &'static [Self] = &[
        Self::EveryMonth,
        Self::EveryNMonth,
        Self::BetweenMonths,
        Self::SpecificMonths,
        Self::SpecificMonthRanges,
        Self::MonthNoCare,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::EveryMonth => "every_month",
            Self::EveryNMonth => "every_n_month",
            Self::BetweenMonths => "between_months",
            Self::SpecificMonths => "specific_months",
            Self::SpecificMonthRanges => "specific_month_ranges",
            Self::MonthNoCare => "month_no_care",
        }
    }

    fn validate(&self, args: &[i32]) -> bool {
        match self {
            Self::EveryMonth | Self::MonthNoCare => true,
            Self::EveryNMonth => is_single_within(args, EVERY_N_MIN, MONTH_MAX),
            Self::BetweenMonths => is_pair_within(args, MONTH_MIN, MONTH_MAX),
            Self::SpecificMonths => is_list_within(args, MONTH_MIN, MONTH_MAX),
            Self::SpecificMonthRanges => is_multi_range_list(args, MONTH_MIN, MONTH_MAX),
        }
    }

    fn generate(&self, args: &[i32]) -> Result<String> {
        match self {
            Self::EveryMonth => Ok(generators::every()),
            Self::EveryNMonth => Ok(generators::every_nth(args)),
            Self::BetweenMonths => generators::between_flexible(args, month_text),
            Self::SpecificMonths => generators::specific_values(args, month_text),
            Self::SpecificMonthRanges => generators::circular_month_ranges(args),
            Self::MonthNoCare => Ok(generators::no_care()),
        }
    }
}

// ── Day of week ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekDayExpression {
    #[default]
    EveryWeekDay,
    EveryNWeekDay,
    BetweenWeekDays,
    SpecificWeekDays,
    SpecificWeekDayRanges,
    /// `DAY#n`: the n-th given weekday of the month. Arguments `[day, n]`.
    NthOccurrence,
    /// `DAYL`: the last given weekday of the month.
    LastOfMonth,
    WeekDayNoCare,
}

impl PartExpression for WeekDayExpression {
    const FIELD: &'static str = "day of week";

    const ALL: &'static [Self] = &[
        Self::EveryWeekDay,
        Self::EveryNWeekDay,
        Self::BetweenWeekDays,
        Self::SpecificWeekDays,
        Self::SpecificWeekDayRanges,
        Self::NthOccurrence,
        Self::LastOfMonth,
        Self::WeekDayNoCare,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::EveryWeekDay => "every_week_day",
            Self::EveryNWeekDay => "every_n_week_day",
            Self::BetweenWeekDays => "between_week_days",
            Self::SpecificWeekDays => "specific_week_days",
            Self::SpecificWeekDayRanges => "specific_week_day_ranges",
            Self::NthOccurrence => "nth_occurrence",
            Self::LastOfMonth => "last_of_month",
            Self::WeekDayNoCare => "week_day_no_care",
        }
    }

    fn validate(&self, args: &[i32]) -> bool {
        match self {
            Self::EveryWeekDay | Self::WeekDayNoCare => true,
            Self::EveryNWeekDay => is_single_within(args, EVERY_N_MIN, DAY_OF_WEEK_MAX),
            Self::BetweenWeekDays => is_pair_within(args, DAY_OF_WEEK_MIN, DAY_OF_WEEK_MAX),
            Self::SpecificWeekDays => is_list_within(args, DAY_OF_WEEK_MIN, DAY_OF_WEEK_MAX),
            Self::SpecificWeekDayRanges => {
                is_multi_range_list(args, DAY_OF_WEEK_MIN, DAY_OF_WEEK_MAX)
            }
            Self::NthOccurrence => match args {
                [day, nth] => {
                    is_single_within(&[*day], DAY_OF_WEEK_MIN, DAY_OF_WEEK_MAX)
                        && is_single_within(&[*nth], MIN_NTH_OCCURRENCE, MAX_NTH_OCCURRENCE)
                }
                _ => false,
            },
            Self::LastOfMonth => is_single_within(args, DAY_OF_WEEK_MIN, DAY_OF_WEEK_MAX),
        }
    }

    fn generate(&self, args: &[i32]) -> Result<String> {
        match self {
            Self::EveryWeekDay => Ok(generators::every()),
            Self::EveryNWeekDay => Ok(generators::every_nth(args)),
            Self::BetweenWeekDays => generators::circular_week_day_ranges(args),
            Self::SpecificWeekDays => generators::specific_values(args, week_day_text),
            Self::SpecificWeekDayRanges => generators::circular_week_day_ranges(args),
            Self::NthOccurrence => Ok(format!("{}#{}", week_day_text(args[0])?, args[1])),
            Self::LastOfMonth => Ok(format!("{}L", week_day_text(args[0])?)),
            Self::WeekDayNoCare => Ok(generators::no_care()),
        }
    }
}

impl fmt::Display for SecondMinuteExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for HourExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DayExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MonthExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for WeekDayExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SecondMinuteExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        parse_expression(s)
    }
}

impl FromStr for HourExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        parse_expression(s)
    }
}

impl FromStr for DayExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        parse_expression(s)
    }
}

impl FromStr for MonthExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        parse_expression(s)
    }
}

impl FromStr for WeekDayExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        parse_expression(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid<E: PartExpression>(expression: E, args: &[i32]) -> bool {
        matches!(
            expression.generate_final_expression(args),
            Err(CronError::InvalidArguments { arguments }) if arguments == args
        )
    }

    #[test]
    fn test_second_minute_tokens() {
        use SecondMinuteExpression::*;
        assert_eq!(Every.generate_final_expression(&[]).unwrap(), "*");
        assert_eq!(EveryN.generate_final_expression(&[15]).unwrap(), "*/15");
        assert_eq!(Between.generate_final_expression(&[45, 30]).unwrap(), "30-45");
        assert_eq!(SpecificValues.generate_final_expression(&[0, 30, 0]).unwrap(), "0,30");
        assert_eq!(
            SpecificRanges.generate_final_expression(&[0, 10, 5, 20, 40, 50]).unwrap(),
            "0-5,10-20,40-50"
        );
        assert_eq!(NoCare.generate_final_expression(&[1, 2]).unwrap(), "0");
        assert!(is_invalid(EveryN, &[0]));
        assert!(is_invalid(EveryN, &[60]));
        assert!(is_invalid(Between, &[0, 60]));
    }

    #[test]
    fn test_every_n_hour_rejects_zero() {
        assert!(is_invalid(HourExpression::EveryNHour, &[0]));
        assert!(is_invalid(HourExpression::EveryNHour, &[24]));
        assert_eq!(
            HourExpression::EveryNHour.generate_final_expression(&[23]).unwrap(),
            "*/23"
        );
    }

    #[test]
    fn test_hour_tokens() {
        use HourExpression::*;
        assert_eq!(BetweenHours.generate_final_expression(&[9, 17]).unwrap(), "9-17");
        assert_eq!(SpecificHours.generate_final_expression(&[8, 12, 8]).unwrap(), "8,12");
        assert_eq!(
            SpecificHourRanges.generate_final_expression(&[0, 5, 6, 10]).unwrap(),
            "0-5,6-10"
        );
        assert_eq!(HourNoCare.generate_final_expression(&[]).unwrap(), "0");
    }

    #[test]
    fn test_day_tokens() {
        use DayExpression::*;
        assert_eq!(EveryDay.generate_final_expression(&[4, 5]).unwrap(), "*");
        assert_eq!(EveryNDay.generate_final_expression(&[3]).unwrap(), "*/3");
        assert_eq!(BetweenDays.generate_final_expression(&[15, 1]).unwrap(), "1-15");
        assert_eq!(SpecificDays.generate_final_expression(&[3, 2, 1, 2, 3]).unwrap(), "3,2,1");
        assert_eq!(
            SpecificDayRanges.generate_final_expression(&[1, 20, 10, 25]).unwrap(),
            "1-10,20-25"
        );
        assert_eq!(
            SpecificDayRanges.generate_final_expression(&[5, 15, 7, 17]).unwrap(),
            "5-7,15-17"
        );
        assert_eq!(NToLastDay.generate_final_expression(&[1]).unwrap(), "L-1");
        assert_eq!(DayNoCare.generate_final_expression(&[9]).unwrap(), "0");
    }

    #[test]
    fn test_day_rejections() {
        use DayExpression::*;
        assert!(is_invalid(SpecificDayRanges, &[1, 10, 7]));
        assert!(is_invalid(SpecificDayRanges, &[1, 10, 1, 6, 1, 5]));
        assert!(is_invalid(EveryNDay, &[0]));
        assert!(is_invalid(SpecificDays, &[0]));
        assert!(is_invalid(SpecificDays, &[33]));
        assert!(is_invalid(SpecificDays, &[]));
        assert!(is_invalid(NToLastDay, &[0]));
        assert!(is_invalid(NToLastDay, &[40]));
        assert!(is_invalid(BetweenDays, &[1]));
    }

    #[test]
    fn test_month_tokens() {
        use MonthExpression::*;
        assert_eq!(EveryNMonth.generate_final_expression(&[2]).unwrap(), "*/2");
        assert_eq!(BetweenMonths.generate_final_expression(&[12, 2]).unwrap(), "DEC-FEB");
        assert_eq!(BetweenMonths.generate_final_expression(&[1, 7]).unwrap(), "JAN-JUL");
        assert_eq!(SpecificMonths.generate_final_expression(&[3, 1, 2, 3]).unwrap(), "MAR,JAN,FEB");
        assert_eq!(
            SpecificMonthRanges.generate_final_expression(&[4, 10, 6, 12]).unwrap(),
            "APR-DEC"
        );
        assert_eq!(
            SpecificMonthRanges.generate_final_expression(&[12, 2, 3, 4]).unwrap(),
            "DEC-APR"
        );
        assert!(is_invalid(SpecificMonths, &[0]));
        assert!(is_invalid(BetweenMonths, &[1, 13]));
    }

    #[test]
    fn test_week_day_between() {
        use WeekDayExpression::BetweenWeekDays;
        assert_eq!(BetweenWeekDays.generate_final_expression(&[1, 5]).unwrap(), "MON-FRI");
        assert_eq!(BetweenWeekDays.generate_final_expression(&[5, 0]).unwrap(), "FRI-SUN");
        assert_eq!(BetweenWeekDays.generate_final_expression(&[5, 7]).unwrap(), "FRI-SUN");
        assert_eq!(BetweenWeekDays.generate_final_expression(&[7, 2]).unwrap(), "SUN-TUE");
        assert_eq!(BetweenWeekDays.generate_final_expression(&[0, 6]).unwrap(), "*");
        assert_eq!(BetweenWeekDays.generate_final_expression(&[1, 7]).unwrap(), "*");
    }

    #[test]
    fn test_week_day_tokens() {
        use WeekDayExpression::*;
        assert_eq!(
            SpecificWeekDays.generate_final_expression(&[1, 3, 5, 7, 0]).unwrap(),
            "MON,WED,FRI,SUN"
        );
        assert_eq!(
            SpecificWeekDayRanges.generate_final_expression(&[1, 2, 4, 5]).unwrap(),
            "MON-TUE,THU-FRI"
        );
        assert_eq!(SpecificWeekDayRanges.generate_final_expression(&[0, 2, 3, 6]).unwrap(), "*");
        assert_eq!(SpecificWeekDayRanges.generate_final_expression(&[5, 7, 1, 4]).unwrap(), "*");
        assert_eq!(NthOccurrence.generate_final_expression(&[2, 2]).unwrap(), "TUE#2");
        assert_eq!(NthOccurrence.generate_final_expression(&[0, 3]).unwrap(), "SUN#3");
        assert_eq!(NthOccurrence.generate_final_expression(&[7, 3]).unwrap(), "SUN#3");
        assert_eq!(LastOfMonth.generate_final_expression(&[5]).unwrap(), "FRIL");
        assert_eq!(LastOfMonth.generate_final_expression(&[0]).unwrap(), "SUNL");
        assert_eq!(LastOfMonth.generate_final_expression(&[7]).unwrap(), "SUNL");
        assert_eq!(EveryNWeekDay.generate_final_expression(&[7]).unwrap(), "*/7");
    }

    #[test]
    fn test_week_day_rejections() {
        use WeekDayExpression::*;
        assert!(is_invalid(EveryNWeekDay, &[8]));
        assert!(is_invalid(EveryNWeekDay, &[-1]));
        assert!(is_invalid(NthOccurrence, &[2, 0]));
        assert!(is_invalid(NthOccurrence, &[2, 6]));
        assert!(is_invalid(NthOccurrence, &[8, 2]));
        assert!(is_invalid(NthOccurrence, &[2]));
        assert!(is_invalid(LastOfMonth, &[8]));
    }

    #[test]
    fn test_names_round_trip() {
        for expression in WeekDayExpression::ALL {
            assert_eq!(expression.name().parse::<WeekDayExpression>().unwrap(), *expression);
        }
        assert_eq!("EVERY_N_HOUR".parse::<HourExpression>().unwrap(), HourExpression::EveryNHour);
        assert_eq!(DayExpression::NToLastDay.to_string(), "n_to_last_day");

        let err = "fortnightly".parse::<MonthExpression>().unwrap_err();
        assert!(matches!(err, CronError::UnknownExpression { field: "month", .. }));
    }

    #[test]
    fn test_serde_names_match() {
        #[derive(Deserialize)]
        struct Entry {
            expression: DayExpression,
        }

        for expression in DayExpression::ALL {
            let entry: Entry = toml::from_str(&format!("expression = \"{expression}\"")).unwrap();
            assert_eq!(entry.expression, *expression);
        }
    }
}
