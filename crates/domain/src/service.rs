//! Service entry — one link shown on the dashboard.

use serde::Serialize;

use crate::error::ValidationError;

/// A link to display: its label, its target and the category it is grouped
/// under.
///
/// Serializes its fields in catalog column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub name: String,
    pub url: String,
    pub category: String,
}

impl ServiceEntry {
    /// Create a builder for constructing a [`ServiceEntry`].
    #[must_use]
    pub fn builder() -> ServiceEntryBuilder {
        ServiceEntryBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first blank field, checked in
    /// `name`, `url`, `category` order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(())
    }
}

/// Step-by-step builder for [`ServiceEntry`].
#[derive(Debug, Default)]
pub struct ServiceEntryBuilder {
    name: Option<String>,
    url: Option<String>,
    category: Option<String>,
}

impl ServiceEntryBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Consume the builder, trim and validate every field, and return a
    /// [`ServiceEntry`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any field is missing or blank.
    pub fn build(self) -> Result<ServiceEntry, ValidationError> {
        let entry = ServiceEntry {
            name: trimmed(self.name),
            url: trimmed(self.url),
            category: trimmed(self.category),
        };
        entry.validate()?;
        Ok(entry)
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// A raw catalog record as read from storage, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRow {
    /// 1-based line number of the record in the catalog file (header included).
    pub line: u64,
    pub name: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
}

impl CatalogRow {
    /// Turn the raw record into a validated [`ServiceEntry`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first missing field.
    pub fn into_entry(self) -> Result<ServiceEntry, ValidationError> {
        let mut builder = ServiceEntry::builder();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(url) = self.url {
            builder = builder.url(url);
        }
        if let Some(category) = self.category {
            builder = builder.category(category);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_entry_when_all_fields_provided() {
        let entry = ServiceEntry::builder()
            .name("Jellyfin")
            .url("http://media.lan:8096")
            .category("Media")
            .build()
            .unwrap();
        assert_eq!(entry.name, "Jellyfin");
        assert_eq!(entry.url, "http://media.lan:8096");
        assert_eq!(entry.category, "Media");
    }

    #[test]
    fn should_trim_surrounding_whitespace() {
        let entry = ServiceEntry::builder()
            .name("  Gitea ")
            .url(" http://git.lan ")
            .category(" Developer")
            .build()
            .unwrap();
        assert_eq!(entry.name, "Gitea");
        assert_eq!(entry.url, "http://git.lan");
        assert_eq!(entry.category, "Developer");
    }

    #[test]
    fn should_reject_missing_name() {
        let result = ServiceEntry::builder().url("http://x").category("C").build();
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn should_reject_blank_url() {
        let result = ServiceEntry::builder()
            .name("X")
            .url("   ")
            .category("C")
            .build();
        assert_eq!(result, Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn should_reject_missing_category() {
        let result = ServiceEntry::builder().name("X").url("http://x").build();
        assert_eq!(result, Err(ValidationError::EmptyCategory));
    }

    #[test]
    fn should_convert_complete_row_into_entry() {
        let row = CatalogRow {
            line: 2,
            name: Some("Github".to_string()),
            url: Some("https://github.com".to_string()),
            category: Some("Developer".to_string()),
        };
        let entry = row.into_entry().unwrap();
        assert_eq!(entry.name, "Github");
    }

    #[test]
    fn should_report_first_missing_field_of_row() {
        let row = CatalogRow {
            line: 3,
            name: Some("Github".to_string()),
            ..CatalogRow::default()
        };
        assert_eq!(row.into_entry(), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn should_serialize_fields_in_column_order() {
        let entry = ServiceEntry::builder()
            .name("Github")
            .url("https://github.com")
            .category("Developer")
            .build()
            .unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Github","url":"https://github.com","category":"Developer"}"#
        );
    }
}
