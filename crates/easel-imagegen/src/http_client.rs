use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client for upstream inference calls
///
/// Built once and cloned per use; clones share the connection pool, so
/// concurrent requests reuse warm connections to the inference host.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
