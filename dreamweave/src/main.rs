#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use clap::Parser;
use dreamweave_config::Config;
use dreamweave_server::Server;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;

    if let Some(listen) = args.listen {
        config.server.listen_address = Some(listen);
    }

    let _telemetry_guard = dreamweave_telemetry::init(config.telemetry.as_ref(), "info")?;

    tracing::info!(
        config_path = %args.config.display(),
        "starting dreamweave"
    );

    let server = Server::new(&config);

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    server.serve(shutdown).await?;

    tracing::info!("dreamweave stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
