//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `generik.toml` in the working directory (or the file named by
//! `GENERIK_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use generik_app::render::PageSettings;
use generik_domain::presentation::{IconSet, Theme, TrustedMarkup};

const DEFAULT_CONFIG_FILE: &str = "generik.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Service catalog settings.
    pub catalog: CatalogConfig,
    /// Generated site settings.
    pub site: SiteConfig,
    /// Page content settings.
    pub page: PageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Service catalog configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// CSV file listing the services.
    pub path: PathBuf,
}

/// Generated site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory the page is written to and served from.
    pub web_root: PathBuf,
    /// Page template replacing the built-in one.
    pub template: Option<PathBuf>,
}

/// Page content configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page title and heading.
    pub title: String,
    /// Theme name.
    pub theme: Theme,
    /// Footer HTML, inserted without escaping.
    pub footer: TrustedMarkup,
    /// Embed the client-side reachability probes.
    pub status_check: bool,
    /// Icon source for service tiles.
    pub icons: IconSet,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
    /// File receiving a copy of every log line.
    pub file: PathBuf,
}

impl Config {
    /// Load configuration from `generik.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the final configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("GENERIK_CONFIG")
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("TITLE") {
            self.page.title = val;
        }
        if let Some(val) = var("THEME") {
            self.page.theme = Theme::new(&val);
        }
        if let Some(val) = var("FOOTER") {
            self.page.footer = TrustedMarkup::new(val);
        }
        if let Some(val) = var("PORT") {
            self.server.port = val.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("PORT must be a TCP port number, got {val:?}"))
            })?;
        }
        if let Some(val) = var("GENERIK_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("GENERIK_CATALOG") {
            self.catalog.path = PathBuf::from(val);
        }
        if let Some(val) = var("GENERIK_WEB_ROOT") {
            self.site.web_root = PathBuf::from(val);
        }
        if let Some(val) = var("GENERIK_TEMPLATE") {
            self.site.template = (!val.trim().is_empty()).then(|| PathBuf::from(val));
        }
        if let Some(val) = var("GENERIK_STATUS_CHECK") {
            self.page.status_check = parse_flag(&val).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "GENERIK_STATUS_CHECK must be a boolean, got {val:?}"
                ))
            })?;
        }
        if let Some(val) = var("GENERIK_ICONS") {
            self.page.icons = val
                .parse()
                .map_err(|err| ConfigError::Validation(format!("GENERIK_ICONS: {err}")))?;
        }
        if let Some(val) = var("GENERIK_LOG_FILE") {
            self.logging.file = PathBuf::from(val);
        }
        if let Some(val) = var("GENERIK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "catalog path must not be empty".to_string(),
            ));
        }
        if self.site.web_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "web root must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl From<PageConfig> for PageSettings {
    fn from(page: PageConfig) -> Self {
        Self {
            title: page.title,
            theme: page.theme,
            footer: page.footer,
            status_check: page.status_check,
            icons: page.icons,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5877,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("config/services.csv"),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            web_root: PathBuf::from("public"),
            template: None,
        }
    }
}

impl From<PageSettings> for PageConfig {
    fn from(settings: PageSettings) -> Self {
        Self {
            title: settings.title,
            theme: settings.theme,
            footer: settings.footer,
            status_check: settings.status_check,
            icons: settings.icons,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        PageSettings::default().into()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "generikd=info,generik_app=info,generik_adapter_storage_fs=info,\
                     generik_adapter_http_axum=info,tower_http=info"
                .to_string(),
            file: PathBuf::from("logs/generik.log"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
