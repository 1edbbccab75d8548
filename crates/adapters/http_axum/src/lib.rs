//! # generik-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the web root as **static files** (`index.html` on directories,
//!   content type from the file extension)
//! - Trace every request through `tower-http`
//! - Run until the shutdown future resolves, then drain connections
//!
//! There are no dynamic routes: the dashboard is generated once before the
//! server starts.
//!
//! ## Dependency rule
//! Knows nothing about the catalog or the renderer; it only serves a
//! directory.

pub mod router;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "serving dashboard");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
