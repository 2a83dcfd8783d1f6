// Application layer - Forecast use case and model seam
pub mod forecast_service;
pub mod regression_model;
