// Sheetdrop - spreadsheet-to-Postgres ingestion service

pub mod config;
pub mod db;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod table_registry;
pub mod tabular;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
// Note: Import specific items from types module instead of glob to avoid name conflicts
// e.g., use sheetdrop::types::{AppError, AppResult};

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
