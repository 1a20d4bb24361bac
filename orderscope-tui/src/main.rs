//! Orderscope TUI
//!
//! Terminal client for the order backend, structured as an Elm-style
//! loop:
//! - **Model**: application state (`model/`)
//! - **Message**: what can happen (`message`)
//! - **Update**: state transitions (`update`)
//! - **View**: rendering (`view/`)
//! - **Event**: input translation (`event/`)
//!
//! The lookup state machine itself lives in `orderscope-core`; this
//! binary supplies the terminal shell around it.

mod app;
mod config;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use orderscope_core::location;
use orderscope_gateway::HttpOrderGateway;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::util::TerminalSession;

/// Terminal order lookup client.
#[derive(Debug, Parser)]
#[command(name = "orderscope", version, about)]
struct Args {
    /// Order id, or a /order/<id> path, to open on startup.
    location: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let config = AppConfig::load();
    tracing::info!("Using backend at {}", config.base_url);

    let gateway = Arc::new(HttpOrderGateway::new(&config.base_url));
    let initial_path = match args.location {
        Some(loc) if loc.starts_with('/') => loc,
        Some(loc) => location::canonical_path(&loc),
        None => location::EMPTY_PATH.to_string(),
    };

    // 1. Enter the terminal session
    let mut session = TerminalSession::enter()?;

    // 2. Create the application instance
    let mut app = model::App::new(gateway, &initial_path);

    // 3. Run the main loop; the session restores the terminal on drop
    app::run(&mut session, &mut app).await
}

/// File logging, enabled by `ORDERSCOPE_LOG=<path>`.
///
/// No subscriber is installed when the variable is unset; stderr belongs
/// to the terminal UI. `RUST_LOG` refines the filter, defaulting to
/// `debug`.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("ORDERSCOPE_LOG") else {
        return Ok(());
    };
    if path.is_empty() {
        return Ok(());
    }

    let file =
        File::create(&path).with_context(|| format!("cannot open log file {path}"))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(Level::DEBUG.into()))
        .init();
    Ok(())
}
