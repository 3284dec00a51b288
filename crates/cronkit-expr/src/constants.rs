//! Argument bounds for each cron field (all inclusive).

pub const SECOND_MINUTE_MIN: i32 = 0;
pub const SECOND_MINUTE_MAX: i32 = 59;

pub const HOUR_MIN: i32 = 0;
pub const HOUR_MAX: i32 = 23;

pub const DAY_OF_MONTH_MIN: i32 = 1;
pub const DAY_OF_MONTH_MAX: i32 = 31;

pub const MONTH_MIN: i32 = 1;
pub const MONTH_MAX: i32 = 12;

/// 0 and 7 both denote SUNDAY.
pub const DAY_OF_WEEK_MIN: i32 = 0;
pub const DAY_OF_WEEK_MAX: i32 = 7;

pub const MIN_NTH_OCCURRENCE: i32 = 1;
pub const MAX_NTH_OCCURRENCE: i32 = 5;

/// Lower bound of every "every N" step.
pub const EVERY_N_MIN: i32 = 1;

/// Token for "every value" in any field.
pub const EVERY: &str = "*";

/// Token for "unspecified" in any field.
pub const NO_CARE: &str = "0";
