//! Presentation settings chosen by the operator: theme, icon set and
//! trusted footer markup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const DEFAULT_THEME: &str = "light";

/// Normalised theme name.
///
/// Lower-cased and restricted to `[a-z0-9_-]`; any other character is
/// dropped. Blank input falls back to `light`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Theme(String);

impl Theme {
    /// Normalise `name` into a theme.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let normalised: String = name
            .trim()
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        if normalised.is_empty() {
            Self(DEFAULT_THEME.to_string())
        } else {
            Self(normalised)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class applied to the page `<body>`.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("theme-{}", self.0)
    }

    /// Whether the built-in page ships styles for this theme.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        matches!(self.0.as_str(), "light" | "dark")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self(DEFAULT_THEME.to_string())
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<Theme> for String {
    fn from(value: Theme) -> Self {
        value.0
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of per-service icons added client-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconSet {
    #[default]
    None,
    SimpleIcons,
    FontAwesome,
}

impl IconSet {
    /// Base URL icons are fetched from, `None` when icons are disabled.
    ///
    /// The icon file name is the lower-cased service name with whitespace
    /// runs replaced by `-`, plus `.svg`.
    #[must_use]
    pub fn base_url(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::SimpleIcons => Some("https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/"),
            Self::FontAwesome => {
                Some("https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/svgs/solid/")
            }
        }
    }
}

/// The icon set name did not match any known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon set {0:?}, expected one of none, simple-icons, font-awesome")]
pub struct UnknownIconSet(pub String);

impl FromStr for IconSet {
    type Err = UnknownIconSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "simple-icons" => Ok(Self::SimpleIcons),
            "font-awesome" => Ok(Self::FontAwesome),
            _ => Err(UnknownIconSet(s.to_string())),
        }
    }
}

/// Operator-supplied HTML inserted into the page exactly as given.
///
/// Wrapping a string in `TrustedMarkup` grants it the right to carry raw
/// markup (links, formatting). It is never escaped, so it must only be built
/// from configuration the operator controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
