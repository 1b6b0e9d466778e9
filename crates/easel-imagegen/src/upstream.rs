use easel_config::UpstreamConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::{
    error::{RelayError, Result},
    http_client::http_client,
};

/// Client for the upstream text-to-image inference endpoint
pub struct InferenceClient {
    client: Client,
    url: Url,
    api_key: SecretString,
}

/// Wire format for the inference API request
#[derive(Serialize)]
struct InferencePayload<'a> {
    inputs: &'a str,
}

impl InferenceClient {
    /// Build the client from upstream configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL or API key is unset; a loaded
    /// and validated configuration always carries both
    pub fn from_config(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let url = config
            .url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("upstream.url is not configured"))?;
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("upstream.api_key is not configured"))?;

        Ok(Self {
            client: http_client(),
            url,
            api_key,
        })
    }

    /// Request an image for the prompt, returning the raw bytes
    ///
    /// Non-200 responses are classified: a JSON body carrying both `error`
    /// and `estimated_time` keys means the model is still warming up and
    /// maps to `ModelLoading`; anything else passes through as
    /// `UpstreamFailure` with the upstream's status and raw body text.
    pub async fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
        tracing::debug!(url = %self.url, "sending inference request");

        let response = self
            .client
            .post(self.url.clone())
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&InferencePayload { inputs: prompt })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "inference request failed");
                RelayError::Unexpected(e.to_string())
            })?;

        let status = response.status();

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.map_err(|e| {
                tracing::error!(error = %e, "failed to read upstream error body");
                RelayError::Unexpected(e.to_string())
            })?;

            tracing::error!(status = %status, body = %body, "upstream inference error");

            if is_model_loading(&body) {
                return Err(RelayError::ModelLoading);
            }

            return Err(RelayError::UpstreamFailure {
                status: status.as_u16(),
                details: body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "failed to read upstream image bytes");
            RelayError::Unexpected(e.to_string())
        })?;

        tracing::debug!(bytes = bytes.len(), "inference request complete");

        Ok(bytes.to_vec())
    }
}

/// Check whether an upstream error body signals a model warm-up
///
/// Hosted inference reports warm-up as a JSON object carrying both `error`
/// and `estimated_time` keys; the status code varies, so only the body
/// shape is inspected.
fn is_model_loading(body: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(body)
        .is_ok_and(|value| value.get("error").is_some() && value.get("estimated_time").is_some())
}
