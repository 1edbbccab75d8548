//! # generikd — generik daemon
//!
//! Composition root that wires all adapters together, publishes the
//! dashboard and serves it.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Set up logging to stdout and to the log file
//! - Load the optional page template
//! - Construct the catalog store, renderer and site writer (adapters)
//! - Publish the dashboard once
//! - Bind to a TCP port and serve the web root
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! Exits with `0` after a graceful shutdown and `1` on any startup failure.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod logging;
mod shutdown;

use std::process::ExitCode;

use anyhow::Context;
use tokio::net::TcpListener;

use generik_adapter_http_axum::router;
use generik_adapter_storage_fs::{CsvCatalogStore, FsSiteWriter, load_template};
use generik_app::render::{DashboardRenderer, PageTemplate};
use generik_app::services::catalog_service::CatalogService;
use generik_app::services::publish_service::PublishService;

use crate::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load().context("failed to load configuration") {
        Ok(config) => config,
        Err(err) => {
            eprintln!("generikd: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = logging::init(&config.logging).context("failed to set up logging") {
        eprintln!("generikd: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => {
            tracing::info!("generikd stopped");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let error = format!("{err:#}");
            tracing::error!(%error, "generikd failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        catalog = %config.catalog.path.display(),
        web_root = %config.site.web_root.display(),
        "starting generikd"
    );

    let template = match &config.site.template {
        Some(path) => load_template(path)
            .await
            .with_context(|| format!("failed to load page template {}", path.display()))?,
        None => PageTemplate::Builtin,
    };

    // Catalog → renderer → site
    let publisher = PublishService::new(
        CatalogService::new(CsvCatalogStore::new(&config.catalog.path)),
        DashboardRenderer::new(config.page.clone().into(), template),
        FsSiteWriter::new(&config.site.web_root),
    );
    publisher
        .publish()
        .await
        .context("failed to publish the dashboard")?;

    // HTTP
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("generikd listening on http://{bind_addr}");

    generik_adapter_http_axum::serve(
        listener,
        router::build(&config.site.web_root),
        shutdown::signal(),
    )
    .await
    .context("HTTP server failed")?;

    Ok(())
}
