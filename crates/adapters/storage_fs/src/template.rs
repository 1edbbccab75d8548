//! Loading of operator-supplied page templates.

use std::path::Path;

use generik_app::render::PageTemplate;

use crate::error::StorageError;

/// Read the page template at `path`.
///
/// # Errors
///
/// Returns [`StorageError::Io`] if the file cannot be read or is not UTF-8.
pub async fn load_template(path: &Path) -> Result<PageTemplate, StorageError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| StorageError::io(path, err))?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "page template loaded");
    Ok(PageTemplate::External(source))
}
