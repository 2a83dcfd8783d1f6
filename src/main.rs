// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::forecast_service::ForecastService;
use crate::infrastructure::config::load_forecast_config;
use crate::infrastructure::gbdt_model::GbdtRegressionModel;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, get_forecast, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_forecast_config()?;

    // Load the trained model once; nothing can be served without it
    let model = Arc::new(GbdtRegressionModel::load(
        &config.model.path,
        config.model.feature_count,
    )?);

    // Create service (application layer)
    let forecast_service = ForecastService::new(model);

    // Create application state
    let state = Arc::new(AppState { forecast_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/api/forecast", get(get_forecast))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .listen
        .parse()
        .context("invalid listen address in configuration")?;
    println!("Starting energy-forecast service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
