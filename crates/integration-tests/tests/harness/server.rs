//! Test server wrapper that starts Dreamweave on a random port

use std::net::SocketAddr;

use dreamweave_config::Config;
use dreamweave_server::Server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(&config);
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Submit a dream recording as the browser recorder does
    pub async fn submit_dream(&self, audio: &[u8], style: &str) -> reqwest::Response {
        let audio = reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name("recording.webm")
            .mime_str("audio/webm")
            .expect("valid mime type");

        let form = reqwest::multipart::Form::new()
            .part("audio", audio)
            .text("style", style.to_owned());

        self.client
            .post(self.url("/api/process-dream"))
            .multipart(form)
            .send()
            .await
            .expect("request reaches the test server")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
