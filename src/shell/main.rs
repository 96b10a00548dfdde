use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use service_bootstrap::modules::lifecycle::ports::StdProcessExit;
use service_bootstrap::modules::lifecycle::sequencer::ShutdownSequencer;
use service_bootstrap::modules::lifecycle::signals::TerminationSignals;
use service_bootstrap::shell::application::HttpApplication;
use service_bootstrap::shell::config::Config;
use service_bootstrap::shell::http::router;
use service_bootstrap::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env().context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    // Registered before the listener exists so no signal falls back to the default action.
    let signals =
        TerminationSignals::register().context("failed to install termination signal handlers")?;

    let state = AppState::from_config(&config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.service_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let application = Arc::new(HttpApplication::start(listener, router(state))?);
    tracing::info!("health endpoint: http://{}/health", application.local_addr());

    let sequencer = Arc::new(ShutdownSequencer::new(
        application,
        Arc::new(StdProcessExit),
        config.shutdown_grace_period,
    ));
    tracing::info!("listening for SIGINT and SIGTERM");
    sequencer.dispatch(signals).await;
    Ok(())
}
