//! Filter implementations for the search pipeline.
//!
//! This module contains all the concrete filters
//! that can be composed into a FilterPipeline.

pub mod category;
pub mod title;

// Re-export for convenience
pub use category::CategoryFilter;
pub use title::TitleFilter;
