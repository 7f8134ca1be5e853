//! Core traits for the search pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a catalog.

use catalog::Movie;

/// Core trait for filtering movies.
///
/// Filters are predicates: they decide per movie and never reorder, so a
/// pipeline of filters is always a stable subsequence of its input.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `movie` survives this filter
    fn keep(&self, movie: &Movie) -> bool;
}
