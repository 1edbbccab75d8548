//! # generik-adapter-storage-fs
//!
//! Filesystem persistence adapter.
//!
//! ## Responsibilities
//! - Implement `CatalogStore` over a CSV file (`Name,URL,Category` header)
//!   using the [csv](https://docs.rs/csv) crate
//! - Implement `SiteSink` by writing files below a web root
//! - Load operator-supplied page templates
//!
//! ## Dependency rule
//! Depends on `generik-app` (for port traits) and `generik-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod catalog_store;
pub mod error;
pub mod site_writer;
pub mod template;

pub use catalog_store::CsvCatalogStore;
pub use error::StorageError;
pub use site_writer::FsSiteWriter;
pub use template::load_template;
