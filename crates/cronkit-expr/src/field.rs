//! Cron fields and the six-field expression built from them.

use cronkit_core::Result;
use serde::{Deserialize, Serialize};

use crate::expression::{
    DayExpression, HourExpression, MonthExpression, PartExpression, SecondMinuteExpression,
    WeekDayExpression,
};

/// One cron field: an expression variant plus its arguments.
///
/// An unset field is the variant's "every" form with no arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CronField<E> {
    #[serde(default)]
    pub expression: E,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<i32>,
}

pub type SecondField = CronField<SecondMinuteExpression>;
pub type MinuteField = CronField<SecondMinuteExpression>;
pub type HourField = CronField<HourExpression>;
pub type DayField = CronField<DayExpression>;
pub type MonthField = CronField<MonthExpression>;
pub type WeekDayField = CronField<WeekDayExpression>;

impl<E: PartExpression> CronField<E> {
    pub fn new(expression: E, arguments: impl Into<Vec<i32>>) -> Self {
        Self {
            expression,
            arguments: arguments.into(),
        }
    }

    /// Same field with another expression; unchanged if it is already set.
    pub fn with_expression(self, expression: E) -> Self {
        if self.expression == expression {
            return self;
        }
        Self { expression, ..self }
    }

    /// Same field with other arguments; unchanged if they are already set.
    pub fn with_arguments(self, arguments: impl Into<Vec<i32>>) -> Self {
        let arguments = arguments.into();
        if self.arguments == arguments {
            return self;
        }
        Self { arguments, ..self }
    }

    /// Same variant and the same arguments in the same order.
    pub fn strictly_equals(&self, other: &Self) -> bool {
        self.expression == other.expression && self.arguments == other.arguments
    }

    /// Renders the field token.
    ///
    /// # Errors
    ///
    /// [`cronkit_core::CronError::InvalidArguments`] when the arguments do not
    /// suit the expression.
    pub fn render(&self) -> Result<String> {
        self.expression.generate_final_expression(&self.arguments)
    }
}

/// Six-field cron expression: second, minute, hour, day of month, month,
/// day of week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CronExpression {
    #[serde(default)]
    pub second: SecondField,
    #[serde(default)]
    pub minute: MinuteField,
    #[serde(default)]
    pub hour: HourField,
    #[serde(default)]
    pub day: DayField,
    #[serde(default)]
    pub month: MonthField,
    #[serde(default)]
    pub week_day: WeekDayField,
}

impl CronExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_second(self, second: SecondField) -> Self {
        if self.second.strictly_equals(&second) {
            return self;
        }
        Self { second, ..self }
    }

    pub fn with_minute(self, minute: MinuteField) -> Self {
        if self.minute.strictly_equals(&minute) {
            return self;
        }
        Self { minute, ..self }
    }

    pub fn with_hour(self, hour: HourField) -> Self {
        if self.hour.strictly_equals(&hour) {
            return self;
        }
        Self { hour, ..self }
    }

    pub fn with_day(self, day: DayField) -> Self {
        if self.day.strictly_equals(&day) {
            return self;
        }
        Self { day, ..self }
    }

    pub fn with_month(self, month: MonthField) -> Self {
        if self.month.strictly_equals(&month) {
            return self;
        }
        Self { month, ..self }
    }

    pub fn with_week_day(self, week_day: WeekDayField) -> Self {
        if self.week_day.strictly_equals(&week_day) {
            return self;
        }
        Self { week_day, ..self }
    }

    /// Renders all six tokens joined by single spaces.
    ///
    /// # Errors
    ///
    /// The first field whose arguments fail validation aborts rendering; no
    /// partial expression is returned.
    pub fn render(&self) -> Result<String> {
        let tokens = [
            self.second.render()?,
            self.minute.render()?,
            self.hour.render()?,
            self.day.render()?,
            self.month.render()?,
            self.week_day.render()?,
        ];
        Ok(tokens.join(" "))
    }
}
