//! Error types for the catalog crate.
//!
//! Grouping and lookups never fail; every variant here comes from turning a
//! raw catalog document into a validated [`Catalog`](crate::Catalog).

use thiserror::Error;

/// Errors that can occur while reading or validating a catalog document
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a local catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not have the `{ "movies": [...] }` shape
    #[error("Malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share the same slug
    #[error("Duplicate movie id '{id}' at position {position}")]
    DuplicateId { id: String, position: usize },

    /// A record is missing a value that grouping or display depends on
    #[error("Movie at position {position} has an empty {field}")]
    EmptyField { field: &'static str, position: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
