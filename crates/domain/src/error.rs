//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GenerikError`] via `From` when crossing a port boundary.

/// A service entry failed a domain invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `Name` field is missing or blank.
    #[error("missing Name")]
    EmptyName,

    /// The `URL` field is missing or blank.
    #[error("missing URL")]
    EmptyUrl,

    /// The `Category` field is missing or blank.
    #[error("missing Category")]
    EmptyCategory,
}

/// Base error crossing the application's port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum GenerikError {
    /// A domain invariant does not hold.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The catalog still had no usable entry after the default content was
    /// written back.
    #[error("catalog has no valid entries after restoring the defaults")]
    EmptyCatalog,

    /// An adapter failed to read or write its backing resource.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
