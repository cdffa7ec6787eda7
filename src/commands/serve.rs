use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use colored::Colorize;
use std::sync::Arc;

use crate::config::RunConfig;
use crate::scanner;
use crate::serve::render;

pub async fn handle_serve(config: RunConfig) -> Result<()> {
    scanner::check_search_dir(config.search_dir())?;

    o_step!("{} {}", "Serving compose files from".cyan(), config.search_dir().display());
    match config.link_host() {
        Some(host) => o_step!("  service links use {}", host.cyan()),
        None => o_step!("  service links disabled (no host)"),
    }

    let listener = tokio::net::TcpListener::bind((config.host(), config.port()))
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;

    o_success!(
        "{} compose-viewer listening on {}",
        "✓".green(),
        format!("http://{}", config.bind_addr()).cyan()
    );

    axum::serve(listener, app(Arc::new(config))).await?;

    Ok(())
}

fn app(config: Arc<RunConfig>) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(config)
}

// --- Route handlers ---

async fn index(State(config): State<Arc<RunConfig>>) -> Result<Html<String>, StatusCode> {
    o_debug!("GET / ({})", config.search_dir().display());

    // Walking and parsing are plain blocking filesystem work.
    let report = tokio::task::spawn_blocking(move || scanner::build_report(&config)).await;

    match report {
        Ok(Ok(groups)) => Ok(Html(render::render_report(&groups))),
        Ok(Err(e)) => {
            o_error!("{}: {:#}", "report error".red(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(e) => {
            o_error!("{}: {}", "report task failed".red(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
