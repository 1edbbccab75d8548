//! Site port — where the rendered dashboard is published.

use std::future::Future;

use generik_domain::error::GenerikError;

/// Destination of the generated site files.
pub trait SiteSink {
    /// Write `contents` to `path`, relative to the site root, replacing any
    /// previous content.
    fn write(
        &self,
        path: &str,
        contents: &[u8],
    ) -> impl Future<Output = Result<(), GenerikError>> + Send;
}
