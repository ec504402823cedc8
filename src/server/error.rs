//! Adapter error types and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::types::ErrorResponse;

/// Message returned when `/api/ask` gets no usable question
pub const QUESTION_REQUIRED: &str = "question required";

/// Errors surfaced at the adapter boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The caller sent an unusable request
    #[error("{0}")]
    ClientInput(String),

    /// The external collaborator failed
    #[error("{0}")]
    Collaborator(String),

    /// The request body could not be read, e.g. it exceeds the size limit
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl AdapterError {
    pub fn question_required() -> Self {
        AdapterError::ClientInput(QUESTION_REQUIRED.to_string())
    }

    /// Wrap a collaborator failure, keeping its message as-is
    pub fn collaborator(err: anyhow::Error) -> Self {
        AdapterError::Collaborator(err.to_string())
    }

    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        AdapterError::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Convert error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdapterError::ClientInput(_) => StatusCode::BAD_REQUEST,
            AdapterError::Collaborator(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdapterError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_input_status() {
        let err = AdapterError::question_required();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "question required");
    }

    #[test]
    fn test_collaborator_keeps_message() {
        let err = AdapterError::collaborator(anyhow::anyhow!("boom"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err, AdapterError::Collaborator("boom".to_string()));
    }

    #[test]
    fn test_rejected_keeps_status() {
        let err = AdapterError::rejected(StatusCode::PAYLOAD_TOO_LARGE, "too big");
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "too big");
    }
}
