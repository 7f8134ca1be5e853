//! Parser for the catalog document.
//!
//! The remote source serves a single JSON document:
//!
//! ```json
//! { "movies": [ { "id": "nomadland", "title": "Nomadland",
//!                 "category": "Best Picture", "photoUrl": "https://..." } ] }
//! ```
//!
//! Parsing decodes the envelope with serde and then validates the records
//! through [`Catalog::new`].

use crate::error::Result;
use crate::types::*;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Wire shape of the catalog document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    movies: Vec<Movie>,
}

/// Parse a catalog document from raw bytes.
pub fn parse_catalog(bytes: &[u8]) -> Result<Catalog> {
    let document: CatalogDocument = serde_json::from_slice(bytes)?;
    debug!("Decoded catalog document with {} records", document.movies.len());

    Catalog::new(document.movies)
}

/// Parse a catalog document stored on disk (an offline copy of the remote file).
pub fn parse_catalog_file(path: &Path) -> Result<Catalog> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    parse_catalog(&bytes)
}
