//! Axum router assembly.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the top-level axum [`Router`] serving `web_root`.
///
/// Every request falls through to a [`ServeDir`]: directories resolve to
/// their `index.html`, missing files answer `404`, and methods other than
/// `GET`/`HEAD` answer `405`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response using the `tracing` ecosystem.
pub fn build(web_root: impl AsRef<Path>) -> Router {
    let files = ServeDir::new(web_root).append_index_html_on_directories(true);

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}
