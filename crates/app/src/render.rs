//! Dashboard rendering — turns the service list into one HTML document.
//!
//! The built-in page, the category blocks and the script tags are `askama`
//! templates, so service fields and the title are escaped on output. The
//! footer is [`TrustedMarkup`] and goes in untouched. An operator supplied
//! page is filled by replacing `{{title}}`, `{{theme}}`, `{{categories}}`,
//! `{{footer}}` and `{{scripts}}` with the same rendered fragments.

pub mod ids;
pub mod template;

use askama::Template;
use serde::Serialize;

use generik_domain::catalog::group_by_category;
use generik_domain::presentation::{IconSet, Theme, TrustedMarkup};
use generik_domain::service::ServiceEntry;

use self::ids::ElementIds;
use self::template::Tokens;

/// Page title used when none is configured.
pub const DEFAULT_TITLE: &str = "GENERIK DASHBOARD";

/// Footer used when none is configured.
pub const DEFAULT_FOOTER: &str = "Powered by <a href=\"https://github.com/generik-dashboard/generik\" \
     target=\"_blank\" rel=\"noopener noreferrer\">generik</a>";

/// Delay between two status probes of the same service.
pub const PROBE_INTERVAL_MS: u32 = 5000;

/// Site path of the icon loader script.
pub const ICONS_ASSET_PATH: &str = "assets/icons.js";

const STATUS_SCRIPT: &str = include_str!("render/status.js");
const ICONS_SCRIPT: &str = include_str!("render/icons.js");

/// Operator-facing page settings.
#[derive(Debug, Clone)]
pub struct PageSettings {
    /// Text of the `<title>` element and the page heading.
    pub title: String,
    /// Theme applied as a class on `<body>`.
    pub theme: Theme,
    /// Footer content, inserted verbatim.
    pub footer: TrustedMarkup,
    /// Embed the client-side reachability probes.
    pub status_check: bool,
    /// Icon source for service tiles.
    pub icons: IconSet,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
            footer: TrustedMarkup::new(DEFAULT_FOOTER),
            status_check: true,
            icons: IconSet::None,
        }
    }
}

/// Page skeleton the services are rendered into.
#[derive(Debug, Clone, Default)]
pub enum PageTemplate {
    /// Embedded template with inline styles for the `light` and `dark` themes.
    #[default]
    Builtin,
    /// Template source supplied by the operator.
    External(String),
}

impl PageTemplate {
    /// Token names the template never references.
    #[must_use]
    pub fn missing_tokens(&self) -> Vec<&'static str> {
        match self {
            Self::Builtin => Vec::new(),
            Self::External(source) => Tokens::NAMES
                .into_iter()
                .filter(|name| !template::references(source, name))
                .collect(),
        }
    }
}

/// Rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The probe targets could not be encoded as JSON.
    #[error("failed to encode status probe targets")]
    Encode(#[from] serde_json::Error),
    /// A page template failed to render.
    #[error("failed to render page template")]
    Template(#[from] askama::Error),
}

/// One file the page needs next to it in the web root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub path: &'static str,
    pub contents: &'static str,
}

#[derive(Serialize)]
struct ProbeTarget<'a> {
    id: String,
    url: &'a str,
}

struct Tile<'a> {
    id: String,
    name: &'a str,
    url: &'a str,
}

struct Group<'a> {
    name: &'a str,
    tiles: Vec<Tile<'a>>,
}

#[derive(Template)]
#[template(path = "categories.html")]
struct CategoryBlocks<'a> {
    groups: Vec<Group<'a>>,
    status_check: bool,
}

#[derive(Template)]
#[template(path = "scripts.html")]
struct PageScripts<'a> {
    probes: Option<String>,
    interval_ms: u32,
    status_script: &'a str,
    icons_path: &'a str,
    icon_base: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct DashboardPage<'a> {
    title: &'a str,
    theme: &'a str,
    categories: &'a str,
    footer: &'a str,
    scripts: &'a str,
}

#[derive(Template)]
#[template(source = "{{ text }}", ext = "html")]
struct EscapedText<'a> {
    text: &'a str,
}

/// Renders the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardRenderer {
    settings: PageSettings,
    template: PageTemplate,
}

impl DashboardRenderer {
    /// Create a renderer for the given settings and template.
    #[must_use]
    pub fn new(settings: PageSettings, template: PageTemplate) -> Self {
        let missing = template.missing_tokens();
        if missing.contains(&"categories") {
            tracing::warn!("page template never references categories, services stay hidden");
        } else if !missing.is_empty() {
            tracing::debug!(?missing, "page template does not use every token");
        }
        if !settings.theme.is_builtin() {
            tracing::debug!(theme = %settings.theme, "theme has no built-in styles");
        }
        Self { settings, template }
    }

    #[must_use]
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Files that must be published alongside the page.
    #[must_use]
    pub fn assets(&self) -> Vec<Asset> {
        match self.settings.icons {
            IconSet::None => Vec::new(),
            IconSet::SimpleIcons | IconSet::FontAwesome => vec![Asset {
                path: ICONS_ASSET_PATH,
                contents: ICONS_SCRIPT,
            }],
        }
    }

    /// Render `services` into a complete HTML document.
    ///
    /// Services are grouped by category in first-seen order. An empty list
    /// renders a page without any category block.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the status probe list cannot be serialized
    /// or a template fails to render.
    pub fn render(&self, services: &[ServiceEntry]) -> Result<String, RenderError> {
        let groups = tiles(services);
        let status_check = self.settings.status_check;

        let probes = if status_check {
            let targets: Vec<ProbeTarget<'_>> = groups
                .iter()
                .flat_map(|group| &group.tiles)
                .map(|tile| ProbeTarget {
                    id: format!("status-{}", tile.id),
                    url: tile.url,
                })
                .collect();
            Some(serde_json::to_string(&targets)?.replace("</", "<\\/"))
        } else {
            None
        };

        let categories = CategoryBlocks {
            groups,
            status_check,
        }
        .render()?;
        let scripts = PageScripts {
            probes,
            interval_ms: PROBE_INTERVAL_MS,
            status_script: STATUS_SCRIPT,
            icons_path: ICONS_ASSET_PATH,
            icon_base: self.settings.icons.base_url(),
        }
        .render()?;
        let theme = self.settings.theme.css_class();
        let footer = self.settings.footer.as_str();

        match &self.template {
            PageTemplate::Builtin => Ok(DashboardPage {
                title: &self.settings.title,
                theme: &theme,
                categories: &categories,
                footer,
                scripts: &scripts,
            }
            .render()?),
            PageTemplate::External(source) => {
                let title = EscapedText {
                    text: &self.settings.title,
                }
                .render()?;
                let tokens = Tokens {
                    title: &title,
                    theme: &theme,
                    categories: &categories,
                    footer,
                    scripts: &scripts,
                };
                Ok(template::substitute(source, &tokens))
            }
        }
    }
}

fn tiles(services: &[ServiceEntry]) -> Vec<Group<'_>> {
    let mut ids = ElementIds::default();
    let mut groups = Vec::new();
    for group in group_by_category(services) {
        let mut tiles = Vec::with_capacity(group.services.len());
        for service in group.services {
            tiles.push(Tile {
                id: ids.allocate(&service.name),
                name: &service.name,
                url: &service.url,
            });
        }
        groups.push(Group {
            name: group.name,
            tiles,
        });
    }
    groups
}
