//! Title search over the awards catalog.
//!
//! This crate provides:
//! - Filter trait and implementations (title, category)
//! - FilterPipeline for composing filters
//! - SearchIndex for gated, display-ready search results
//!
//! ## Example Usage
//! ```ignore
//! use search::{filter, SearchIndex, PREVIEW_LIMIT};
//!
//! // Raw filtering: pure, stable, case-insensitive
//! let hits = filter(catalog.movies(), "tenet");
//!
//! // Gated search, as shown under the search box
//! let index = SearchIndex::new(catalog.clone());
//! let results = index.search("ten");
//! println!("Results: {}", results.count());
//! for movie in results.preview(PREVIEW_LIMIT) {
//!     println!("{}", movie.display_label());
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod index;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use index::{filter, SearchIndex, SearchResults, MIN_QUERY_LEN, PREVIEW_LIMIT};
