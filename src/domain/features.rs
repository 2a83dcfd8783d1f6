// Calendar feature derivation
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Column order the regression model was trained on. `dayofmonth` and
/// `weekofyear` are derived alongside the rest but are not part of the
/// model input.
pub const MODEL_FEATURES: [&str; 9] = [
    "dayofyear",
    "hour",
    "dayofweek",
    "quarter",
    "month",
    "year",
    "lag1",
    "lag2",
    "lag3",
];

/// Numeric calendar features for one timestamp.
///
/// `dayofweek` counts from Monday=0, `weekofyear` is the ISO week number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFeatures {
    pub hour: u32,
    pub dayofweek: u32,
    pub quarter: u32,
    pub month: u32,
    pub year: i32,
    pub dayofyear: u32,
    pub dayofmonth: u32,
    pub weekofyear: u32,
}

impl CalendarFeatures {
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            hour: ts.hour(),
            dayofweek: ts.weekday().num_days_from_monday(),
            quarter: (ts.month() - 1) / 3 + 1,
            month: ts.month(),
            year: ts.year(),
            dayofyear: ts.ordinal(),
            dayofmonth: ts.day(),
            weekofyear: ts.iso_week().week(),
        }
    }
}
