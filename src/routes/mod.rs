//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/upload` - spreadsheet upload and ingestion
//! - `/api/health` - health checks

pub mod health;
pub mod upload;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors::apply_cors;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(upload::router(state.clone()))
        .merge(health::router(state.clone()))
        .layer(TraceLayer::new_for_http());

    apply_cors(router, &state.config.server)
}
