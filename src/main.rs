use crate::config::Config;
use crate::db::{init_db, Database};
use crate::router::handle;
use crate::state::AppState;
use anyhow::Context;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listify=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(?config, "configuration loaded");

    // Local device storage
    let db = Database::new(config.db_path.clone());
    init_db(&db).context("Database initialization failed")?;

    let state = Arc::new(AppState::new(&config, db));

    tracing::info!(addr = %config.addr, "Listify running at http://{}", config.addr);

    let server = Server::bind(&config.addr).max_workers(config.workers);

    let handler_state = Arc::clone(&state);
    let result = server.serve(move |req, _info| match handle(req, &handler_state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    state.shutdown();

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        return Err(e).context("server failed");
    }

    tracing::info!("server shut down cleanly");
    Ok(())
}
