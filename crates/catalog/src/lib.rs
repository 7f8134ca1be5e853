//! # Catalog Crate
//!
//! Loads the awards catalog and derives the grouped-by-category view.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog, CategoryIndex)
//! - **parser**: Decode the `{ "movies": [...] }` document into a validated Catalog
//! - **index**: Group movies by category and order categories for display
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{parse_catalog, CategoryIndex};
//!
//! let catalog = parse_catalog(&bytes)?;
//! let index = CategoryIndex::from_catalog(&catalog);
//!
//! for (category, movies) in index.iter() {
//!     println!("{} ({} nominees)", category, movies.len());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::locale_compare;
pub use parser::{parse_catalog, parse_catalog_file};
pub use types::{
    // Type aliases
    Category,
    MovieId,
    // Core types
    Catalog,
    CategoryIndex,
    Movie,
    // Helpers
    display_label,
};
