use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum UsergraphError {
    /// Request body could not be read as a GraphQL request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Record store operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Internal server error (e.g., unexpected failure)
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl UsergraphError {
    /// Machine-readable code reported under `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            UsergraphError::InvalidRequest(_) => "BAD_REQUEST",
            UsergraphError::StorageError(_) | UsergraphError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for UsergraphError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
