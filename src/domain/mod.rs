// Domain layer - Forecast entities and calendar arithmetic
pub mod features;
pub mod forecast;
pub mod lags;
