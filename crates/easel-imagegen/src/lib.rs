#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::missing_const_for_fn)]

mod error;
mod http_client;
mod request;
mod types;
mod upstream;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{RelayError, Result};
pub use types::{GenerateRequest, GenerateResponse};
pub use upstream::InferenceClient;

use request::ExtractPrompt;

/// The relay: one upstream client shared across requests
///
/// Holds no other state; each request is handled independently and nothing
/// outlives it.
pub struct Relay {
    upstream: InferenceClient,
}

impl Relay {
    /// Generate an image for the prompt and wrap it as a data URL response
    pub async fn generate(&self, prompt: &str) -> Result<GenerateResponse> {
        let bytes = self.upstream.generate(prompt).await?;

        Ok(GenerateResponse::from_image_bytes(&bytes))
    }
}

/// Build the relay from configuration
///
/// # Errors
///
/// Returns an error if the upstream endpoint or API key is missing
pub fn build_relay(config: &easel_config::Config) -> anyhow::Result<Arc<Relay>> {
    let upstream = InferenceClient::from_config(&config.upstream)
        .map_err(|e| anyhow::anyhow!("failed to initialize image generation relay: {e}"))?;

    Ok(Arc::new(Relay { upstream }))
}

/// Create the endpoint router for image generation
pub fn endpoint_router() -> Router<Arc<Relay>> {
    Router::new().route("/generate-image", post(generate_image))
}

/// Handle image generation requests
async fn generate_image(
    State(relay): State<Arc<Relay>>,
    ExtractPrompt(request): ExtractPrompt,
) -> Result<Json<GenerateResponse>> {
    tracing::debug!(prompt_chars = request.prompt.chars().count(), "image generation handler called");

    let response = relay.generate(&request.prompt).await?;

    tracing::debug!("image generation complete");

    Ok(Json(response))
}
