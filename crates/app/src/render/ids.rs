//! Element identifiers for service tiles.

use std::collections::HashSet;

/// Hands out one unique identifier per service tile.
///
/// The identifier is the service name with every character outside
/// `[A-Za-z0-9_-]` replaced by `-`. A name that was already handed out (or
/// normalises to one that was) gets a `-2`, `-3`, … suffix.
#[derive(Debug, Default)]
pub struct ElementIds {
    used: HashSet<String>,
}

impl ElementIds {
    pub fn allocate(&mut self, name: &str) -> String {
        let base: String = name
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        let base = if base.is_empty() {
            "service".to_string()
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut suffix = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}
