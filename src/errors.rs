//! Unified error type for the inventory service.
//!
//! Every failure the HTTP layer can see is flattened into a 500 response carrying
//! the error's message, so callers only ever distinguish success from failure.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Application error
#[derive(Debug, Error)]
pub enum Error {
    /// Any failure reported by the ORM or the underlying database
    #[error("{0}")]
    Database(#[from] sea_orm::DbErr),

    /// Invalid or missing configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
    },

    /// Request body or query string that could not be deserialized
    #[error("Invalid request payload: {message}")]
    Payload {
        /// Deserializer message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// The error message
    pub message: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
