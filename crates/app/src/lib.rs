//! # generik-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CatalogStore` — read and replace the service catalog
//!   - `SiteSink` — write generated files into the web root
//! - Define **use-cases**:
//!   - `CatalogService` — load the catalog, restoring defaults when needed
//!   - `DashboardRenderer` — turn services into the HTML page
//!   - `PublishService` — load, render and write the dashboard once
//!
//! ## Dependency rule
//! Depends on `generik-domain` only (plus `askama` for the page and serialization
//! for the page script).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod render;
pub mod services;
