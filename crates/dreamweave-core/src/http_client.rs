use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client so every provider reuses one connection pool
///
/// No overall request timeout is set: transcription and story generation
/// run unbounded, and callers that need a bound set it per request.
///
/// # Panics
///
/// Panics if the TLS backend cannot be initialized
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = http::HeaderMap::new();
            headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

            Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(headers)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
