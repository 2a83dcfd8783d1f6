// Forecast service - Use case for the 24-hour-ahead forecast
use crate::application::regression_model::RegressionModel;
use crate::domain::features::{CalendarFeatures, MODEL_FEATURES};
use crate::domain::forecast::{Forecast, ForecastPoint, forecast_hours};
use crate::domain::lags::{LagValues, lag_values};
use chrono::NaiveDate;
use std::sync::Arc;

/// Baseline for the series the lag columns are derived from. The model was
/// exported without its training history, so the lags are computed from
/// this constant and every lag value the model sees equals it.
const LAG_SERIES_BASELINE: f64 = 0.0;

#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("model expects {expected} feature columns, pipeline produces {actual}")]
    FeatureMismatch { expected: usize, actual: usize },
    #[error("model prediction failed: {0}")]
    Prediction(anyhow::Error),
    #[error("model returned {actual} predictions for {expected} rows")]
    PredictionCount { expected: usize, actual: usize },
}

#[derive(Clone)]
pub struct ForecastService {
    model: Arc<dyn RegressionModel>,
}

impl ForecastService {
    pub fn new(model: Arc<dyn RegressionModel>) -> Self {
        Self { model }
    }

    /// Score every hour of `date` with the loaded model.
    ///
    /// Deterministic for a fixed model: the whole pipeline is calendar
    /// arithmetic over the 24 hourly timestamps of the selected day.
    pub fn forecast_day(&self, date: NaiveDate) -> Result<Forecast, ForecastError> {
        if self.model.feature_count() != MODEL_FEATURES.len() {
            return Err(ForecastError::FeatureMismatch {
                expected: self.model.feature_count(),
                actual: MODEL_FEATURES.len(),
            });
        }

        let hours = forecast_hours(date);
        let calendar: Vec<CalendarFeatures> = hours
            .iter()
            .map(|ts| CalendarFeatures::from_timestamp(*ts))
            .collect();

        // The designated lag source carries no real history, only the baseline
        let series = vec![LAG_SERIES_BASELINE; hours.len()];
        let lags = lag_values(&series, LAG_SERIES_BASELINE);

        let matrix: Vec<Vec<f32>> = calendar
            .iter()
            .zip(&lags)
            .map(|(cal, lag)| model_row(cal, lag))
            .collect();

        tracing::debug!("scoring {} rows for {}", matrix.len(), date);

        let predictions = self
            .model
            .predict(&matrix)
            .map_err(ForecastError::Prediction)?;
        if predictions.len() != hours.len() {
            return Err(ForecastError::PredictionCount {
                expected: hours.len(),
                actual: predictions.len(),
            });
        }

        let points = hours
            .into_iter()
            .zip(predictions)
            .map(|(ts, mw)| ForecastPoint::new(ts, mw))
            .collect();

        Ok(Forecast::new(date, points))
    }
}

/// One model input row, in the exact column order of [`MODEL_FEATURES`].
/// `dayofmonth` and `weekofyear` are intentionally absent.
fn model_row(cal: &CalendarFeatures, lags: &LagValues) -> Vec<f32> {
    vec![
        cal.dayofyear as f32,
        cal.hour as f32,
        cal.dayofweek as f32,
        cal.quarter as f32,
        cal.month as f32,
        cal.year as f32,
        lags.lag1 as f32,
        lags.lag2 as f32,
        lags.lag3 as f32,
    ]
}
