//! `{{token}}` substitution for operator supplied page templates.

/// Values available to a page template.
#[derive(Debug, Clone, Copy)]
pub struct Tokens<'a> {
    pub title: &'a str,
    pub theme: &'a str,
    pub categories: &'a str,
    pub footer: &'a str,
    pub scripts: &'a str,
}

impl Tokens<'_> {
    /// Names every template may reference.
    pub const NAMES: [&'static str; 5] = ["title", "theme", "categories", "footer", "scripts"];

    fn get(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(self.title),
            "theme" => Some(self.theme),
            "categories" => Some(self.categories),
            "footer" => Some(self.footer),
            "scripts" => Some(self.scripts),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Part<'a> {
    Text(&'a str),
    Token { name: &'a str, raw: &'a str },
}

fn parts(source: &str) -> Vec<Part<'_>> {
    let mut parts = Vec::new();
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        if start > 0 {
            parts.push(Part::Text(&rest[..start]));
        }
        parts.push(Part::Token {
            name: after[..end].trim(),
            raw: &rest[start..start + end + 4],
        });
        rest = &after[end + 2..];
    }
    if !rest.is_empty() {
        parts.push(Part::Text(rest));
    }
    parts
}

/// Whether `source` references the token `name`.
pub fn references(source: &str, name: &str) -> bool {
    parts(source)
        .iter()
        .any(|part| matches!(part, Part::Token { name: found, .. } if *found == name))
}

/// Replace every known `{{token}}` of `source` in a single pass.
///
/// Whitespace inside the braces is ignored. Unknown tokens are kept as
/// written, and substituted values are never scanned again.
pub fn substitute(source: &str, tokens: &Tokens<'_>) -> String {
    let mut out = String::with_capacity(source.len() + tokens.categories.len());
    for part in parts(source) {
        match part {
            Part::Text(text) => out.push_str(text),
            Part::Token { name, raw } => out.push_str(tokens.get(name).unwrap_or(raw)),
        }
    }
    out
}
