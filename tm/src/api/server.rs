//! HTTP server bootstrap

use std::sync::Arc;

use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use super::routes::{AppState, router};
use crate::backend::Planner;
use crate::config::Config;
use crate::state::SessionState;

/// Bind the chat API and serve until the process is stopped
pub async fn serve(config: &Config) -> Result<()> {
    let planner = Planner::from_config(&config.backend).context("Failed to create planner backend")?;

    let state = AppState {
        planner: Arc::new(planner),
        sessions: Arc::new(SessionState::new()),
    };

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {addr}"))?;

    println!(
        "{} TravelMate chat API running at {}",
        "✓".green(),
        format!("http://{addr}").bright_blue()
    );
    info!(%addr, mode = ?config.backend.mode, "serve: listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
