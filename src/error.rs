use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use riftview_shared::UpstreamError;
use serde_json::json;
use thiserror::Error;

/// Application error taxonomy, mapped onto HTTP statuses by
/// [`IntoResponse`]. Error bodies are `{"detail": "..."}`, which is what
/// the front end reads.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("{0}")]
    NotFound(String),

    /// Non-404 failure of a required upstream call; the upstream status
    /// and message are propagated as-is.
    #[error("Riot API error {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Error communicating with the Riot API: {0}")]
    Unreachable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { code, message } => Self::Upstream {
                status: code,
                message,
            },
            UpstreamError::Transport(msg) => Self::Unreachable(msg),
            UpstreamError::Decode(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidRegion(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Unreachable(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = match self {
            Self::Upstream { message, .. } => message,
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
