//! Catalog — the ordered list of service entries and its category view.

use crate::service::ServiceEntry;

/// Entries written to a catalog that is missing or has no usable row.
#[must_use]
pub fn seed_entries() -> Vec<ServiceEntry> {
    vec![
        ServiceEntry {
            name: "Github".to_string(),
            url: "https://github.com".to_string(),
            category: "Developer".to_string(),
        },
        ServiceEntry {
            name: "Youtube".to_string(),
            url: "https://youtube.com".to_string(),
            category: "Media".to_string(),
        },
    ]
}

/// All entries sharing one category value.
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub name: &'a str,
    pub services: Vec<&'a ServiceEntry>,
}

/// Group `entries` by category.
///
/// Categories appear in order of first appearance, and entries keep their
/// relative order inside each category. Matching is exact (case-sensitive).
#[must_use]
pub fn group_by_category(entries: &[ServiceEntry]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|g| g.name == entry.category) {
            Some(group) => group.services.push(entry),
            None => groups.push(CategoryGroup {
                name: &entry.category,
                services: vec![entry],
            }),
        }
    }
    groups
}
