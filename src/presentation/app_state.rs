// Application state for HTTP handlers
use crate::application::forecast_service::ForecastService;

#[derive(Clone)]
pub struct AppState {
    pub forecast_service: ForecastService,
}
