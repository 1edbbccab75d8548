//! Catalog service — loads the service list, restoring the seed catalog when
//! the stored one is missing or unusable.

use generik_domain::catalog::seed_entries;
use generik_domain::error::GenerikError;
use generik_domain::service::ServiceEntry;

use crate::ports::CatalogStore;

/// Application service reading the catalog through a [`CatalogStore`].
pub struct CatalogService<S> {
    store: S,
}

impl<S: CatalogStore> CatalogService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load every valid entry of the catalog, in stored order.
    ///
    /// Rows missing a required field are skipped with a warning. When the
    /// catalog does not exist or yields no valid entry, the seed entries are
    /// written back and the catalog is read exactly once more.
    ///
    /// # Errors
    ///
    /// Returns a storage error when reading or restoring the catalog fails,
    /// and [`GenerikError::EmptyCatalog`] when the restored catalog is still
    /// unusable.
    pub async fn load(&self) -> Result<Vec<ServiceEntry>, GenerikError> {
        if let Some(entries) = self.try_load().await? {
            return Ok(entries);
        }

        self.restore_defaults().await?;

        self.try_load().await?.ok_or(GenerikError::EmptyCatalog)
    }

    async fn try_load(&self) -> Result<Option<Vec<ServiceEntry>>, GenerikError> {
        let Some(rows) = self.store.read().await? else {
            tracing::warn!("catalog not found");
            return Ok(None);
        };

        let total = rows.len();
        let entries: Vec<ServiceEntry> = rows
            .into_iter()
            .filter_map(|row| {
                let line = row.line;
                match row.into_entry() {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        tracing::warn!(line, reason = %err, "skipping invalid catalog row");
                        None
                    }
                }
            })
            .collect();

        if entries.is_empty() {
            tracing::warn!(rows = total, "catalog has no valid entry");
            return Ok(None);
        }

        tracing::debug!(
            accepted = entries.len(),
            skipped = total - entries.len(),
            "catalog parsed"
        );
        Ok(Some(entries))
    }

    async fn restore_defaults(&self) -> Result<(), GenerikError> {
        let seeds = seed_entries();
        tracing::warn!(entries = seeds.len(), "restoring default catalog");
        self.store.write(&seeds).await
    }
}
