use clap::Parser; // for cli
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gatekeeper::config::Args;
use gatekeeper::{RateLimiter, RemoteAddr, Visitor, app, ops_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // parse cli arguments
    let args = Args::parse();

    // one limiter for the whole service
    let limiter = Arc::new(RateLimiter::new(args.limit, args.window()));
    let visitor = Arc::new(Visitor::new(limiter, args.body.clone()));

    if let Some(metrics_addr) = args.metrics_addr() {
        let listener = tokio::net::TcpListener::bind(&metrics_addr).await?;
        info!(addr = %metrics_addr, "Metrics and health endpoints enabled");
        let ops = ops_app(visitor.clone());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, ops).await {
                warn!(error = %e, "metrics server stopped");
            }
        });
    }

    let addr = args.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Gatekeeper running on http://{}", addr);
    info!(
        "Rate limit: {} requests per {} seconds",
        args.limit, args.interval
    );

    axum::serve(
        listener,
        app(visitor).into_make_service_with_connect_info::<RemoteAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Gatekeeper stopped");
    Ok(())
}

// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
