//! Catalog port — the persisted list of services.

use std::future::Future;

use generik_domain::error::GenerikError;
use generik_domain::service::{CatalogRow, ServiceEntry};

/// Backing store of the service catalog.
pub trait CatalogStore {
    /// Read every record of the catalog in stored order.
    ///
    /// Resolves to `Ok(None)` when the catalog does not exist yet. Records
    /// are returned unvalidated; deciding which ones are usable is up to the
    /// caller.
    fn read(&self) -> impl Future<Output = Result<Option<Vec<CatalogRow>>, GenerikError>> + Send;

    /// Replace the whole catalog content with `entries`.
    fn write(
        &self,
        entries: &[ServiceEntry],
    ) -> impl Future<Output = Result<(), GenerikError>> + Send;
}
