//! FWI Inference Server
//!
//! A minimal web-facing inference endpoint: weather/fuel-moisture
//! measurements come in through an HTML form, pass through a pre-fitted
//! standardization scaler and a pre-fitted ridge regression model, and
//! the predicted Fire Weather Index (FWI) is rendered back into the page.
//!
//! The artifacts are fitted out-of-band and loaded once at startup; if
//! loading fails the server stays up in degraded mode and answers every
//! prediction with "Models could not be loaded".

pub mod artifacts;
pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod service;
pub mod templates;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub use error::{PredictResult, PredictionError};
pub use service::PredictionService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route(
            "/predictdata",
            get(handlers::pages::predict_form).post(handlers::predict::predict),
        )
        .route("/health", get(handlers::health::check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
