//! Filesystem implementation of [`SiteSink`].

use std::future::Future;
use std::path::{Component, Path, PathBuf};

use generik_app::ports::SiteSink;
use generik_domain::error::GenerikError;

use crate::error::StorageError;

/// Writes site files below a web root directory.
pub struct FsSiteWriter {
    root: PathBuf,
}

impl FsSiteWriter {
    /// Create a writer for the web root at `root`. The directory is created
    /// on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);
        let is_plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if path.is_empty() || !is_plain {
            return Err(StorageError::OutsideRoot(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl SiteSink for FsSiteWriter {
    fn write(
        &self,
        path: &str,
        contents: &[u8],
    ) -> impl Future<Output = Result<(), GenerikError>> + Send {
        let target = self.resolve(path);
        let contents = contents.to_vec();
        async move {
            let target = target?;
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| StorageError::io(parent, err))?;
            }
            tokio::fs::write(&target, &contents)
                .await
                .map_err(|err| StorageError::io(&target, err))?;

            tracing::debug!(path = %target.display(), bytes = contents.len(), "site file written");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_write_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsSiteWriter::new(dir.path());
        let html = "<!DOCTYPE html><html><body>héllo</body></html>";

        writer.write("index.html", html.as_bytes()).await.unwrap();

        let written = std::fs::read(dir.path().join("index.html")).unwrap();
        assert_eq!(written, html.as_bytes());
    }

    #[tokio::test]
    async fn should_create_missing_root_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("srv").join("www");
        let writer = FsSiteWriter::new(&root);

        writer.write("index.html", b"<html></html>").await.unwrap();

        assert!(root.join("index.html").is_file());
    }

    #[tokio::test]
    async fn should_create_nested_asset_directories() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsSiteWriter::new(dir.path());

        writer.write("assets/icons.js", b"// icons").await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("assets/icons.js")).unwrap();
        assert_eq!(written, "// icons");
    }

    #[tokio::test]
    async fn should_overwrite_previous_content_fully() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsSiteWriter::new(dir.path());

        writer.write("index.html", b"a much longer first version").await.unwrap();
        writer.write("index.html", b"short").await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(written, "short");
    }

    #[tokio::test]
    async fn should_refuse_paths_leaving_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsSiteWriter::new(dir.path().join("www"));

        for path in ["../escape.html", "/etc/passwd", "", "./index.html"] {
            let result = writer.write(path, b"x").await;
            assert!(
                matches!(result, Err(GenerikError::Storage(_))),
                "{path} should be refused"
            );
        }
        assert!(!dir.path().join("escape.html").exists());
    }

    #[tokio::test]
    async fn should_fail_when_root_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("www");
        std::fs::write(&root, "not a directory").unwrap();
        let writer = FsSiteWriter::new(&root);

        let result = writer.write("index.html", b"x").await;

        assert!(matches!(result, Err(GenerikError::Storage(_))));
    }
}
