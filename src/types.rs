// Error types shared across the request pipeline

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unsupported file type")]
    UnsupportedFileType,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to read upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Failed to parse file: {0}")]
    Parse(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnsupportedFileType
            | AppError::InvalidRequest(_)
            | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Parse(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = self.to_string();
        if status.is_server_error() {
            error!("Upload failed: {}", detail);
        } else {
            warn!("Upload rejected: {}", detail);
        }

        (
            status,
            Json(serde_json::json!({
                "status": "error",
                "detail": detail,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_file_type_is_client_error() {
        let response = AppError::UnsupportedFileType.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_request_is_client_error() {
        let response = AppError::InvalidRequest("no file field".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn parse_failure_is_server_error() {
        let response = AppError::Parse("bad row".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_failure_is_server_error() {
        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
