//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use easel_config::{Config, CorsConfig, HealthConfig, ServerConfig, UpstreamConfig};
use secrecy::SecretString;

/// API key baked into test configurations
pub const TEST_API_KEY: &str = "hf-test-key";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder pointing at the given mock inference endpoint
    pub fn new(upstream_url: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: CorsConfig::default(),
                },
                upstream: UpstreamConfig {
                    url: Some(upstream_url.parse().expect("valid URL")),
                    api_key: Some(SecretString::from(TEST_API_KEY)),
                },
            },
        }
    }

    /// Override the upstream API key
    pub fn with_api_key(mut self, key: &str) -> Self {
        self.config.upstream.api_key = Some(SecretString::from(key));
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
