//! Error types for shield-rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::scoring::AnalysisType;

/// Result type alias for shield operations
pub type Result<T> = std::result::Result<T, ShieldError>;

/// Shield error types
#[derive(Error, Debug)]
pub enum ShieldError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Analysis failed unexpectedly; the whole request is aborted
    #[error("{}: {message}", .kind.error_prefix())]
    Analysis { kind: AnalysisType, message: String },
}

impl ShieldError {
    /// Build an analysis failure for the given analysis type
    pub fn analysis(kind: AnalysisType, message: impl Into<String>) -> Self {
        Self::Analysis {
            kind,
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for ShieldError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// JSON error body returned by the API, `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub detail: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            detail: msg.to_string(),
        }
    }
}

impl IntoResponse for ShieldError {
    fn into_response(self) -> Response {
        // Analysis faults are the only error surfaced by handlers; anything
        // else reaching a response is still an internal failure.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new(&self.to_string())),
        )
            .into_response()
    }
}
