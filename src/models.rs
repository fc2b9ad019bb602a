use sqlx::PgPool;
use crate::config::Config;
use crate::table_registry::TableRegistry;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub table_registry: TableRegistry,
}

/// Body of a successful `POST /upload`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub table_name: String,
    pub inserted_rows: u64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub database: String,
}
