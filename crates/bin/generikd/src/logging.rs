//! Logging setup — every event goes to stdout and to the log file.
//!
//! The subscriber is built once here and installed as the process-wide
//! dispatcher; the rest of the workspace only emits through `tracing`
//! macros.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Logging setup errors.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be opened.
    #[error("failed to open log file {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The filter directive is not valid `RUST_LOG` syntax.
    #[error("invalid log filter")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// Another subscriber was installed first.
    #[error("logging already initialised")]
    AlreadyInitialised(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Build the subscriber described by `config`.
///
/// # Errors
///
/// Returns [`LoggingError`] if the log file cannot be opened or the filter
/// does not parse.
pub fn subscriber(
    config: &LoggingConfig,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError> {
    let file = open_log_file(&config.file)?;
    let filter = EnvFilter::try_new(&config.filter)?;

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file))))
}

/// Build the subscriber and install it for the whole process.
///
/// # Errors
///
/// Returns [`LoggingError`] if the subscriber cannot be built or a global
/// subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    tracing::subscriber::set_global_default(subscriber(config)?)?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let wrap = |source| LoggingError::File {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(wrap)
}
