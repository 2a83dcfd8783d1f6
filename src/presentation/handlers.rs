// HTTP request handlers
use crate::domain::forecast::{
    CHART_TITLE, DATETIME_COLUMN, Forecast, PREDICTION_COLUMN, Y_AXIS_LABEL,
};
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ForecastQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ForecastPointDto {
    pub datetime: NaiveDateTime,
    pub prediction: f64,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub title: String,
    pub columns: [&'static str; 2],
    pub chart_title: &'static str,
    pub y_axis: &'static str,
    pub points: Vec<ForecastPointDto>,
}

impl From<Forecast> for ForecastResponse {
    fn from(forecast: Forecast) -> Self {
        Self {
            title: format!("Future Energy Consumption Predictions for {}", forecast.date),
            columns: [DATETIME_COLUMN, PREDICTION_COLUMN],
            chart_title: CHART_TITLE,
            y_axis: Y_AXIS_LABEL,
            points: forecast
                .points
                .into_iter()
                .map(|p| ForecastPointDto {
                    datetime: p.datetime,
                    prediction: p.predicted_mw,
                })
                .collect(),
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The dashboard page hosting the date picker, table and chart
pub async fn dashboard_page() -> Html<&'static str> {
    Html(include_str!("page.html"))
}

/// Run the forecast pipeline for the selected date
pub async fn get_forecast(
    Query(query): Query<ForecastQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.forecast_service.forecast_day(query.date) {
        Ok(forecast) => Json(ForecastResponse::from(forecast)).into_response(),
        Err(e) => {
            tracing::error!("forecast for {} failed: {}", query.date, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::{ForecastPoint, forecast_hours};

    #[test]
    fn test_response_carries_display_columns_and_all_rows() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points = forecast_hours(date)
            .into_iter()
            .map(|ts| ForecastPoint::new(ts, 12_500.0))
            .collect();
        let response = ForecastResponse::from(Forecast::new(date, points));

        assert_eq!(
            response.columns,
            ["Datetime", "Predicted Energy Consumption (MW)"]
        );
        assert_eq!(response.points.len(), 24);
        assert_eq!(response.chart_title, "Predicted Energy Consumption");
        assert_eq!(response.y_axis, "Energy Consumption (MW)");
    }

    #[test]
    fn test_points_serialize_with_iso_timestamps() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points = forecast_hours(date)
            .into_iter()
            .map(|ts| ForecastPoint::new(ts, 0.0))
            .collect();
        let response = ForecastResponse::from(Forecast::new(date, points));

        let value = serde_json::to_value(&response).unwrap();
        let rows = value["points"].as_array().unwrap();
        assert_eq!(rows[0]["datetime"], "2024-01-01T00:00:00");
        assert_eq!(rows[23]["datetime"], "2024-01-01T23:00:00");
    }

    #[test]
    fn test_forecast_query_accepts_calendar_dates() {
        let query: ForecastQuery = serde_json::from_value(json!({ "date": "2024-01-01" })).unwrap();
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
