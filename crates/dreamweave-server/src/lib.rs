mod cors;
mod health;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use dreamweave_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Provider credentials are resolved here but their absence only
    /// surfaces when a dream is submitted.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let dream_service = dream::build_service(config);

        let mut app = Router::new().route("/", get(health::root_handler));

        match config.server.health.route_path() {
            Some(path) => app = app.route(path, get(health::health_handler)),
            None if config.server.health.enabled => {
                tracing::warn!(path = %config.server.health.path, "health path is not mountable, health route disabled");
            }
            None => {}
        }

        app = app.merge(dream::endpoint_router().with_state(dream_service));

        // Apply middleware layers (innermost first)
        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
