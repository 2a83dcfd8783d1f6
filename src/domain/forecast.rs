// Forecast domain model
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Hours covered by one forecast: midnight through 23:00 of the selected day.
pub const FORECAST_HOURS: usize = 24;

pub const DATETIME_COLUMN: &str = "Datetime";
pub const PREDICTION_COLUMN: &str = "Predicted Energy Consumption (MW)";
pub const CHART_TITLE: &str = "Predicted Energy Consumption";
pub const Y_AXIS_LABEL: &str = "Energy Consumption (MW)";

/// One predicted hour.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub datetime: NaiveDateTime,
    pub predicted_mw: f64,
}

impl ForecastPoint {
    pub fn new(datetime: NaiveDateTime, predicted_mw: f64) -> Self {
        Self {
            datetime,
            predicted_mw,
        }
    }
}

/// A full day-ahead forecast, one point per hour in timestamp order.
#[derive(Debug, Clone)]
pub struct Forecast {
    pub date: NaiveDate,
    pub points: Vec<ForecastPoint>,
}

impl Forecast {
    pub fn new(date: NaiveDate, points: Vec<ForecastPoint>) -> Self {
        Self { date, points }
    }
}

/// The hourly timestamp index for a forecast day. Timestamps are naive;
/// no timezone handling anywhere in the pipeline.
pub fn forecast_hours(date: NaiveDate) -> Vec<NaiveDateTime> {
    let start = date.and_time(NaiveTime::MIN);
    (0..FORECAST_HOURS as i64)
        .map(|h| start + Duration::hours(h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_hours_covers_the_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let hours = forecast_hours(date);

        assert_eq!(hours.len(), FORECAST_HOURS);
        assert_eq!(hours[0], date.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(hours[23], date.and_hms_opt(23, 0, 0).unwrap());
    }

    #[test]
    fn test_forecast_hours_are_strictly_hourly() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let hours = forecast_hours(date);

        for pair in hours.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::hours(1));
        }
    }

    #[test]
    fn test_forecast_hours_stay_on_date_across_dst_changeovers() {
        // Naive timestamps: a US spring-forward date still yields all 24 hours
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let hours = forecast_hours(date);

        assert_eq!(hours.len(), 24);
        assert!(hours.iter().all(|ts| ts.date() == date));
    }
}
