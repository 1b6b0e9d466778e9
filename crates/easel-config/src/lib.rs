#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod upstream;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use server::*;
pub use upstream::*;

/// Top-level easel configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream inference endpoint configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}
