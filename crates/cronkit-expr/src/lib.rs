//! # Cronkit Expr
//!
//! Six-field cron expression generation.
//!
//! ## Architecture
//! ```text
//! adapter.rs     calendar-typed builders ──▶ CronField
//! field.rs       CronField<E>, CronExpression::render
//! expression.rs  PartExpression variants (validate + generate)
//! generators.rs  token rendering, linear and circular range merging
//! validators.rs  argument predicates
//! schedule.rs    named expressions loaded from TOML
//! ```

pub mod adapter;
pub mod constants;
pub mod expression;
pub mod field;
mod generators;
pub mod schedule;
mod validators;

pub use expression::{
    DayExpression, HourExpression, MonthExpression, PartExpression, SecondMinuteExpression,
    WeekDayExpression,
};
pub use field::{
    CronExpression, CronField, DayField, HourField, MinuteField, MonthField, SecondField,
    WeekDayField,
};
pub use schedule::{RenderedSchedule, ScheduleFile, ScheduleSpec};
