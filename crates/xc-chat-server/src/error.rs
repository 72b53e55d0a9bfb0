// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Server error types and handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use xc_chat_api_contract::ProblemDetails;
use xc_intents::LoadError;

/// Server result type
pub type ServerResult<T> = Result<T, ServerError>;

const PROBLEM_TYPE: &str = "about:blank";

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load corpus: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The body parsed as JSON but `message` is missing or not a string
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Convert error to Problem+JSON response
    pub fn to_problem(&self) -> ProblemDetails {
        match self {
            ServerError::InvalidMessage(detail) => ProblemDetails::new(
                PROBLEM_TYPE,
                "Bad Request",
                StatusCode::BAD_REQUEST.as_u16(),
                "Request body must be a JSON object with a string `message` field",
            )
            .with_field_error("message", detail.clone()),
            ServerError::BadRequest(detail) => ProblemDetails::new(
                PROBLEM_TYPE,
                "Bad Request",
                StatusCode::BAD_REQUEST.as_u16(),
                detail.clone(),
            ),
            // Startup failures never reach a client, but keep the mapping total.
            ServerError::Load(_) | ServerError::Config(_) | ServerError::Internal(_) => {
                ProblemDetails::new(
                    PROBLEM_TYPE,
                    "Internal Server Error",
                    StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    self.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let problem = self.to_problem();
        let status = problem
            .status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(problem)).into_response()
    }
}

/// Every body rejection is a client error, including a missing content type.
impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ServerError::InvalidMessage(err.body_text()),
            other => ServerError::BadRequest(other.body_text()),
        }
    }
}

/// Convert IO errors
impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}
