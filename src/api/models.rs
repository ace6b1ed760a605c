use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::core::errors::UsergraphError;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body shaped like a GraphQL response, so clients always get `errors`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub message: String,
    pub extensions: ErrorExtensions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorExtensions {
    pub code: String,
    pub path: String,
}

// Newtype wrapper for UsergraphError to implement IntoResponse
pub struct ApiError {
    pub error: UsergraphError,
    pub path: String,
}

impl ApiError {
    pub fn new(error: UsergraphError, path: impl Into<String>) -> Self {
        ApiError {
            error,
            path: path.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error {
            UsergraphError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            // Execution faults still travel as a GraphQL envelope.
            UsergraphError::StorageError(_) | UsergraphError::InternalServerError(_) => StatusCode::OK,
        };
        let body = ErrorResponse {
            errors: vec![ErrorEntry {
                message: self.error.to_string(),
                extensions: ErrorExtensions {
                    code: self.error.code().to_string(),
                    path: self.path,
                },
            }],
        };
        (status, Json(body)).into_response()
    }
}
