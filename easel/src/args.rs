use std::path::PathBuf;

use clap::Parser;

/// easel image generation relay
#[derive(Debug, Parser)]
#[command(name = "easel", about = "Relay server for text-to-image inference")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "easel.toml", env = "EASEL_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "EASEL_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
