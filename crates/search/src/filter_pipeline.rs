//! The FilterPipeline combines multiple filters.
//!
//! This module provides the FilterPipeline struct that chains
//! filters together using the builder pattern.

use crate::traits::Filter;
use catalog::Movie;
use tracing;

/// Chains multiple filters together into a single pass over a catalog.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitleFilter::new("land"))
///     .add_filter(CategoryFilter::new("Best Picture"));
///
/// let matches = pipeline.apply(catalog.movies());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Return the movies every filter keeps, cloned, in catalog order.
    ///
    /// The input is only borrowed; an empty pipeline returns a copy of the
    /// whole catalog.
    pub fn apply(&self, catalog: &[Movie]) -> Vec<Movie> {
        let kept: Vec<Movie> = catalog
            .iter()
            .filter(|movie| self.filters.iter().all(|filter| filter.keep(movie)))
            .cloned()
            .collect();

        tracing::debug!(
            "Applied filters [{}] (input count: {}, output count: {})",
            self.filters
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", "),
            catalog.len(),
            kept.len()
        );
        kept
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
