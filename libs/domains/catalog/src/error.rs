use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Errors surfaced by the catalog domain.
///
/// Malformed query parameters never produce an error: they degrade to
/// "no constraint" during filter building. The only failure class that
/// escalates to the caller is a failed store operation, reported once
/// and without partial data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog store error: {0}")]
    Store(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Store(err.to_string())
    }
}

/// Error body returned to clients.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::Store(detail) => {
                // The detail stays in the logs; clients get an opaque failure.
                tracing::error!("Catalog retrieval failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "InternalServerError".to_string(),
                        message: "Failed to fetch products".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
