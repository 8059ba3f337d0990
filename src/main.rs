use anyhow::Context;
use std::sync::Arc;

use feed_relay::config::Config;
use feed_relay::{AppState, app, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let state = Arc::new(
        AppState::from_config(&config).context("Failed to build HTTP clients")?,
    );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    log::info!("Server is running on port {}", config.port);
    axum::serve(listener, app(state))
        .await
        .context("Server failed")?;
    Ok(())
}
