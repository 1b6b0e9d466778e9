use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

/// Relay errors with their client-facing status codes and bodies
///
/// The `Display` string of each variant is exactly the `error` field the
/// client receives.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request body carried no usable prompt; no upstream call was made
    #[error("No prompt provided")]
    MissingPrompt,

    /// Upstream reported the model is still warming up
    #[error("Model is loading, please try again in 30 seconds.")]
    ModelLoading,

    /// Upstream rejected the request; its status code and raw body text are
    /// passed through so the caller keeps the diagnostic detail
    #[error("Failed to generate image")]
    UpstreamFailure { status: u16, details: String },

    /// Network failure, timeout, or a response that could not be read
    #[error("{0}")]
    Unexpected(String),
}

impl RelayError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPrompt => StatusCode::BAD_REQUEST,
            Self::ModelLoading => StatusCode::SERVICE_UNAVAILABLE,
            Self::UpstreamFailure { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire format for error responses
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.to_string();

        let details = match self {
            Self::UpstreamFailure { details, .. } => Some(details),
            _ => None,
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
