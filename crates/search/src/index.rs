//! Incremental title search over a loaded catalog.
//!
//! [`filter`] is the raw, pure operation. [`SearchIndex::search`] wraps it
//! with the display rules of the voting page: queries shorter than
//! [`MIN_QUERY_LEN`] show nothing at all.

use std::sync::Arc;

use catalog::{Catalog, Category, Movie};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{CategoryFilter, TitleFilter};

/// Shortest query (in characters) that produces displayed results
pub const MIN_QUERY_LEN: usize = 1;

/// Number of result labels the voting page lists under the search box
pub const PREVIEW_LIMIT: usize = 8;

/// Case-insensitive substring match of `query` against every title.
///
/// Pure and stable: the catalog is not touched and survivors keep their
/// catalog order. An empty query matches every movie; display gating
/// belongs to [`SearchIndex::search`].
pub fn filter(catalog: &[Movie], query: &str) -> Vec<Movie> {
    FilterPipeline::new()
        .add_filter(TitleFilter::new(query))
        .apply(catalog)
}

/// Search front end over a shared catalog.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    catalog: Arc<Catalog>,
}

impl SearchIndex {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run a query with display gating applied.
    pub fn search(&self, query: &str) -> SearchResults {
        if query.chars().count() < MIN_QUERY_LEN {
            return SearchResults::inactive(query);
        }

        SearchResults {
            query: query.to_string(),
            active: true,
            matches: filter(self.catalog.movies(), query),
        }
    }

    /// Same as [`SearchIndex::search`] restricted to a single category.
    pub fn search_in(&self, category: impl Into<Category>, query: &str) -> SearchResults {
        if query.chars().count() < MIN_QUERY_LEN {
            return SearchResults::inactive(query);
        }

        let pipeline = FilterPipeline::new()
            .add_filter(CategoryFilter::new(category))
            .add_filter(TitleFilter::new(query));

        SearchResults {
            query: query.to_string(),
            active: true,
            matches: pipeline.apply(self.catalog.movies()),
        }
    }
}

/// Outcome of a gated search.
///
/// An inactive result (query too short) always reports zero matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    query: String,
    active: bool,
    matches: Vec<Movie>,
}

impl SearchResults {
    fn inactive(query: &str) -> Self {
        Self {
            query: query.to_string(),
            active: false,
            matches: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the query was long enough to display anything
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[Movie] {
        &self.matches
    }

    /// First `limit` matches, in catalog order
    pub fn preview(&self, limit: usize) -> &[Movie] {
        &self.matches[..self.matches.len().min(limit)]
    }

    /// The match shown with its poster
    pub fn featured(&self) -> Option<&Movie> {
        self.matches.first()
    }
}
