//! CSV implementation of [`CatalogStore`].

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use generik_app::ports::CatalogStore;
use generik_domain::error::GenerikError;
use generik_domain::service::{CatalogRow, ServiceEntry};

use crate::error::StorageError;

const HEADER: [&str; 3] = ["Name", "URL", "Category"];

/// One catalog record as laid out in the file. Columns are matched by
/// header name, so their order does not matter.
#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "URL", default)]
    url: Option<String>,
    #[serde(rename = "Category", default)]
    category: Option<String>,
}

/// Parse catalog content into raw rows.
///
/// Fields are trimmed, empty fields and missing trailing columns become
/// `None`. Records that cannot be decoded at all are skipped with a
/// warning. Content whose header row cannot be read yields no rows at all.
#[must_use]
pub fn parse_catalog(content: &[u8]) -> Vec<CatalogRow> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content);
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            tracing::warn!(error = %err, "catalog header row is unreadable");
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map(csv::Position::line);
                tracing::warn!(?line, error = %err, "skipping unreadable catalog record");
                continue;
            }
        };
        let line = record.position().map_or(0, csv::Position::line);
        match record.deserialize::<Record>(Some(&headers)) {
            Ok(decoded) => rows.push(CatalogRow {
                line,
                name: decoded.name,
                url: decoded.url,
                category: decoded.category,
            }),
            Err(err) => {
                tracing::warn!(line, error = %err, "skipping undecodable catalog record");
            }
        }
    }
    rows
}

/// Encode `entries` as catalog content, header first.
///
/// # Errors
///
/// Returns [`StorageError::Csv`] if a record cannot be serialized.
pub fn encode_catalog(entries: &[ServiceEntry]) -> Result<Vec<u8>, StorageError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer
        .into_inner()
        .map_err(|err| StorageError::Csv(err.into_error().into()))
}

/// Catalog stored as a CSV file.
pub struct CsvCatalogStore {
    path: PathBuf,
}

impl CsvCatalogStore {
    /// Create a store reading and writing the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for CsvCatalogStore {
    fn read(&self) -> impl Future<Output = Result<Option<Vec<CatalogRow>>, GenerikError>> + Send {
        let path = self.path.clone();
        async move {
            let content = match tokio::fs::read(&path).await {
                Ok(content) => content,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
                Err(err) => return Err(StorageError::io(path, err).into()),
            };

            let rows = parse_catalog(&content);
            tracing::debug!(path = %path.display(), rows = rows.len(), "catalog read");
            Ok(Some(rows))
        }
    }

    fn write(
        &self,
        entries: &[ServiceEntry],
    ) -> impl Future<Output = Result<(), GenerikError>> + Send {
        let path = self.path.clone();
        let count = entries.len();
        let encoded = encode_catalog(entries);
        async move {
            let content = encoded?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| StorageError::io(parent, err))?;
            }
            tokio::fs::write(&path, content)
                .await
                .map_err(|err| StorageError::io(&path, err))?;

            tracing::info!(path = %path.display(), entries = count, "catalog written");
            Ok(())
        }
    }
}
