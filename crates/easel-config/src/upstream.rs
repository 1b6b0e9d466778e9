use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Upstream text-to-image inference endpoint configuration
///
/// Both fields may be omitted from the config file and supplied through the
/// `MODEL_API_URL` and `HF_API_KEY` environment variables instead; the
/// loader fills them in before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Full URL of the inference endpoint
    #[serde(default)]
    pub url: Option<Url>,
    /// Bearer token sent with every upstream request
    #[serde(default)]
    pub api_key: Option<SecretString>,
}
