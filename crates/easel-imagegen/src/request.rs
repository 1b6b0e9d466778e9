use axum::extract::{FromRequest, Request};

use crate::{error::RelayError, types::GenerateRequest};

/// Extractor for the generate-image request body
///
/// Every rejection (an unreadable or oversized body, malformed JSON, a
/// missing, null, non-string, or empty `prompt`) maps to the same typed
/// 400, so no upstream call happens for bad input.
pub struct ExtractPrompt(pub GenerateRequest);

/// Body limit for generate requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

impl<S> FromRequest<S> for ExtractPrompt
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(request: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(request.into_body(), BODY_LIMIT_BYTES)
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, "failed to read request body");
                RelayError::MissingPrompt
            })?;

        let payload = serde_json::from_slice::<GenerateRequest>(&bytes).map_err(|err| {
            tracing::debug!(error = %err, "failed to parse request body");
            RelayError::MissingPrompt
        })?;

        if payload.prompt.is_empty() {
            return Err(RelayError::MissingPrompt);
        }

        Ok(Self(payload))
    }
}
