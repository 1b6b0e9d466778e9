use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::Config;

/// Environment fallback for `upstream.api_key`
const API_KEY_ENV: &str = "HF_API_KEY";

/// Environment fallback for `upstream.url`
const UPSTREAM_URL_ENV: &str = "MODEL_API_URL";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes the result. A missing file is not an error: the
    /// documented minimal deployment is environment-only, so defaults apply.
    /// Unset upstream fields fall back to `HF_API_KEY` and `MODEL_API_URL`
    /// before validation runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

            let expanded =
                crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?
        } else {
            Self::default()
        };

        config.apply_env_fallback()?;
        config.validate()?;

        Ok(config)
    }

    /// Fill unset upstream fields from the environment
    ///
    /// File values take precedence; the environment only covers gaps.
    fn apply_env_fallback(&mut self) -> anyhow::Result<()> {
        if self.upstream.api_key.is_none()
            && let Ok(key) = std::env::var(API_KEY_ENV)
        {
            self.upstream.api_key = Some(SecretString::from(key));
        }

        if self.upstream.url.is_none()
            && let Ok(raw) = std::env::var(UPSTREAM_URL_ENV)
        {
            let url = Url::parse(&raw).map_err(|e| anyhow::anyhow!("{UPSTREAM_URL_ENV} is not a valid URL: {e}"))?;
            self.upstream.url = Some(url);
        }

        Ok(())
    }

    /// Validate that the configuration is complete enough to serve
    ///
    /// The upstream endpoint and key are checked here so that a
    /// misconfigured process aborts at startup instead of failing on the
    /// first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream URL is missing or not an http(s)
    /// URL, or if the API key is missing or empty
    pub fn validate(&self) -> anyhow::Result<()> {
        let Some(ref url) = self.upstream.url else {
            anyhow::bail!("upstream.url must be configured (set it in the config file or export {UPSTREAM_URL_ENV})");
        };

        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("upstream.url must be an http(s) URL, got scheme '{}'", url.scheme());
        }

        match self.upstream.api_key {
            None => {
                anyhow::bail!(
                    "upstream.api_key must be configured (set it in the config file or export {API_KEY_ENV})"
                );
            }
            Some(ref key) if key.expose_secret().is_empty() => {
                anyhow::bail!("upstream.api_key must not be empty");
            }
            Some(_) => Ok(()),
        }
    }
}
