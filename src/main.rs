use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qr_gateway::config::Args;
use qr_gateway::router::router;
use qr_gateway::state::AppState;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = Arc::new(AppState::from_args(&args));

    // Periodic reclamation of idle rate limit buckets; stopped on shutdown
    let sweeper = state
        .limiter
        .start_sweeper(Duration::from_secs(args.sweep_interval));

    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("gateway running on http://localhost:{}", args.port);
    info!(
        "rate limit: {} requests per {}s per client",
        args.rate_limit, args.rate_window
    );
    info!(
        "free plan quota: {} total / {} active",
        args.free_max_total, args.free_max_active
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .unwrap();

    sweeper.stop();
    info!("gateway stopped");
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown requested");
}
