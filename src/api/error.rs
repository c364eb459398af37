//! Error classification for forum API calls.

use thiserror::Error;

use crate::ui::vote::RejectionKind;
use crate::validators::ValidationError;

/// Errors that can occur while talking to the forum server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed client-side validation; nothing was sent
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] ValidationError),

    /// No valid session (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Resource already exists (409)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Server refused the payload (400, 422)
    #[error("Rejected by server: {message}")]
    Validation { message: String },

    /// Any other non-success status
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Failed to reach the server
    #[error("Connection failed to '{base_url}': {source}")]
    Connection {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl ApiError {
    /// Classifies a non-success response.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            409 => ApiError::Conflict { message },
            400 | 422 => ApiError::Validation { message },
            _ => ApiError::Upstream { status, message },
        }
    }

    /// HTTP status the server answered with, if it answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Conflict { .. } => Some(409),
            ApiError::Validation { .. } => Some(422),
            ApiError::Upstream { status, .. } => Some(*status),
            ApiError::InvalidPayload(_)
            | ApiError::Connection { .. }
            | ApiError::Timeout { .. }
            | ApiError::ClientBuild(_) => None,
        }
    }

    /// Stable error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidPayload(_) => "invalid_payload",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Conflict { .. } => "conflict",
            ApiError::Validation { .. } => "validation",
            ApiError::Upstream { .. } => "upstream_error",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::ClientBuild(_) => "client_build",
        }
    }

    /// How the vote reconciler should treat this failure.
    pub fn rejection_kind(&self) -> RejectionKind {
        match self {
            ApiError::Unauthorized => RejectionKind::Unauthenticated,
            _ => RejectionKind::Other,
        }
    }
}
