//! Error types and error handling for the application
//!
//! This module defines the error type returned by every handler and by the
//! data access layer. All errors implement `IntoResponse` so they render as
//! a consistent `{"error": {"message": ...}}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message sent to clients for any 5xx failure
pub const SERVER_ERROR_MESSAGE: &str = "server error";

/// Application-level error types
///
/// Validation and not-found errors terminate the request with a specific
/// response. Storage and internal errors are rendered generically and their
/// detail is only logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required field was absent or null in a create request
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    /// A patch request carried none of the updatable fields
    #[error("Request body must content either 'title', 'style', or 'content'")]
    EmptyUpdate,

    /// The request body could not be parsed as the expected JSON shape
    #[error("{0}")]
    InvalidBody(String),

    /// No article exists for the requested id
    #[error("Article doesn't exist")]
    ArticleNotFound,

    /// A query against the articles table failed
    #[error("{context}: {source}")]
    Storage {
        /// What the service was doing when the query failed
        context: &'static str,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wrap a driver error with the operation that produced it
    pub fn storage(context: &'static str, source: sqlx::Error) -> Self {
        AppError::Storage { context, source }
    }

    /// HTTP status this error renders with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyUpdate => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::ArticleNotFound => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            SERVER_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": { "message": message },
        }));

        (status, body).into_response()
    }
}
