//! Publish service — loads the catalog, renders the page and writes it to
//! the site, once.

use generik_domain::catalog::group_by_category;
use generik_domain::error::GenerikError;

use crate::ports::{CatalogStore, SiteSink};
use crate::render::{DashboardRenderer, RenderError};
use crate::services::catalog_service::CatalogService;

/// Site path of the dashboard page.
pub const PAGE_PATH: &str = "index.html";

/// Summary of a successful publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// Number of services on the page.
    pub services: usize,
    /// Number of category blocks on the page.
    pub categories: usize,
    /// Size of the written page, in bytes.
    pub bytes: usize,
}

/// Errors raised while publishing the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The catalog could not be loaded or restored.
    #[error("failed to load the service catalog")]
    Catalog(#[source] GenerikError),

    /// The page could not be rendered.
    #[error("failed to render the dashboard")]
    Render(#[from] RenderError),

    /// A site file could not be written.
    #[error("failed to write {path}")]
    Write {
        path: &'static str,
        #[source]
        source: GenerikError,
    },
}

/// Runs catalog → renderer → site once.
pub struct PublishService<C, S> {
    catalog: CatalogService<C>,
    renderer: DashboardRenderer,
    site: S,
}

impl<C: CatalogStore, S: SiteSink> PublishService<C, S> {
    /// Create a publisher from its three stages.
    pub fn new(catalog: CatalogService<C>, renderer: DashboardRenderer, site: S) -> Self {
        Self {
            catalog,
            renderer,
            site,
        }
    }

    /// Load the catalog, render the page and write it with its assets.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] naming the stage that failed.
    pub async fn publish(&self) -> Result<PublishReport, PublishError> {
        let services = self.catalog.load().await.map_err(PublishError::Catalog)?;
        let html = self.renderer.render(&services)?;

        self.write(PAGE_PATH, html.as_bytes()).await?;
        for asset in self.renderer.assets() {
            self.write(asset.path, asset.contents.as_bytes()).await?;
        }

        let report = PublishReport {
            services: services.len(),
            categories: group_by_category(&services).len(),
            bytes: html.len(),
        };
        tracing::info!(
            services = report.services,
            categories = report.categories,
            bytes = report.bytes,
            page = PAGE_PATH,
            "dashboard published"
        );
        Ok(report)
    }

    async fn write(&self, path: &'static str, contents: &[u8]) -> Result<(), PublishError> {
        tracing::debug!(path, bytes = contents.len(), "writing site file");
        self.site
            .write(path, contents)
            .await
            .map_err(|source| PublishError::Write { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ICONS_ASSET_PATH, PageSettings, PageTemplate};
    use generik_domain::presentation::IconSet;
    use generik_domain::service::{CatalogRow, ServiceEntry};
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    struct FixedCatalog {
        rows: Option<Vec<CatalogRow>>,
        fail: bool,
    }

    impl CatalogStore for FixedCatalog {
        fn read(
            &self,
        ) -> impl Future<Output = Result<Option<Vec<CatalogRow>>, GenerikError>> + Send {
            let rows = self.rows.clone();
            let fail = self.fail;
            async move {
                if fail {
                    return Err(GenerikError::Storage("unreadable".into()));
                }
                Ok(rows)
            }
        }

        fn write(
            &self,
            _entries: &[ServiceEntry],
        ) -> impl Future<Output = Result<(), GenerikError>> + Send {
            async { Ok(()) }
        }
    }

    #[derive(Default)]
    struct InMemorySite {
        files: Mutex<HashMap<String, Vec<u8>>>,
        read_only: bool,
    }

    impl InMemorySite {
        fn file(&self, path: &str) -> Option<String> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
        }
    }

    impl SiteSink for InMemorySite {
        fn write(
            &self,
            path: &str,
            contents: &[u8],
        ) -> impl Future<Output = Result<(), GenerikError>> + Send {
            let result = if self.read_only {
                Err(GenerikError::Storage("read-only".into()))
            } else {
                self.files
                    .lock()
                    .unwrap()
                    .insert(path.to_string(), contents.to_vec());
                Ok(())
            };
            async { result }
        }
    }

    fn rows() -> Vec<CatalogRow> {
        [("A", "url1", "Dev"), ("B", "url2", "Media"), ("C", "url3", "Dev")]
            .into_iter()
            .zip(2..)
            .map(|((name, url, category), line)| CatalogRow {
                line,
                name: Some(name.to_string()),
                url: Some(url.to_string()),
                category: Some(category.to_string()),
            })
            .collect()
    }

    fn publisher(
        rows: Option<Vec<CatalogRow>>,
        settings: PageSettings,
        site: InMemorySite,
    ) -> PublishService<FixedCatalog, InMemorySite> {
        PublishService::new(
            CatalogService::new(FixedCatalog { rows, fail: false }),
            DashboardRenderer::new(settings, PageTemplate::Builtin),
            site,
        )
    }

    #[tokio::test]
    async fn should_write_rendered_page_to_index() {
        let settings = PageSettings {
            title: "My Links".to_string(),
            ..PageSettings::default()
        };
        let service = publisher(Some(rows()), settings, InMemorySite::default());

        let report = service.publish().await.unwrap();

        assert_eq!(report.services, 3);
        assert_eq!(report.categories, 2);
        let page = service.site.file(PAGE_PATH).unwrap();
        assert_eq!(page.len(), report.bytes);
        assert!(page.contains("<h1>My Links</h1>"));
        assert!(service.site.file(ICONS_ASSET_PATH).is_none());
    }

    #[tokio::test]
    async fn should_write_icon_asset_when_icons_enabled() {
        let settings = PageSettings {
            icons: IconSet::FontAwesome,
            ..PageSettings::default()
        };
        let service = publisher(Some(rows()), settings, InMemorySite::default());

        service.publish().await.unwrap();

        assert!(service.site.file(ICONS_ASSET_PATH).is_some());
    }

    #[tokio::test]
    async fn should_report_catalog_failure() {
        let service = PublishService::new(
            CatalogService::new(FixedCatalog {
                rows: None,
                fail: true,
            }),
            DashboardRenderer::new(PageSettings::default(), PageTemplate::Builtin),
            InMemorySite::default(),
        );

        let result = service.publish().await;

        assert!(matches!(result, Err(PublishError::Catalog(_))));
        assert!(service.site.file(PAGE_PATH).is_none());
    }

    #[tokio::test]
    async fn should_report_write_failure_with_path() {
        let site = InMemorySite {
            read_only: true,
            ..InMemorySite::default()
        };
        let service = publisher(Some(rows()), PageSettings::default(), site);

        let result = service.publish().await;

        assert!(matches!(
            result,
            Err(PublishError::Write {
                path: PAGE_PATH,
                ..
            })
        ));
    }
}
