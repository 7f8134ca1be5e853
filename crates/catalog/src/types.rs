//! Core domain types for the awards catalog.
//!
//! A catalog is the flat, ordered list of nominees exactly as the remote
//! document lists them. The grouped view lives in [`CategoryIndex`], built
//! once per successful load.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{CatalogError, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// Human-readable, hyphenated slug identifying a nominee (e.g. "chadwick-boseman")
pub type MovieId = String;

/// Free-form award category label (e.g. "Best Picture")
pub type Category = String;

// =============================================================================
// Movie
// =============================================================================

/// A single nominee in the catalog.
///
/// Movies are immutable once loaded; the rest of the engine only ever
/// borrows or clones them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub category: Category,
    /// Required. The reference data set spells this field `photoUrL`
    #[serde(alias = "photoUrL")]
    pub photo_url: String,
}

impl Movie {
    /// Label shown to voters for this nominee
    pub fn display_label(&self) -> String {
        display_label(&self.id)
    }
}

/// Turn a slug into its display form by replacing every hyphen with a space.
///
/// ```
/// assert_eq!(catalog::display_label("chadwick-boseman"), "chadwick boseman");
/// ```
pub fn display_label(id: &str) -> String {
    id.replace('-', " ")
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered list of movies as received from the source.
///
/// Invariant: no two entries share an `id`. The only way to build a
/// non-empty catalog is [`Catalog::new`], which checks this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Validate a list of records and wrap it as a catalog.
    ///
    /// Rejects duplicate ids and records with an empty id or category, since
    /// both would break grouping and selection downstream.
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(movies.len());

        for (position, movie) in movies.iter().enumerate() {
            if movie.id.is_empty() {
                return Err(CatalogError::EmptyField { field: "id", position });
            }
            if movie.category.is_empty() {
                return Err(CatalogError::EmptyField { field: "category", position });
            }
            if !seen.insert(movie.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: movie.id.clone(),
                    position,
                });
            }
        }

        Ok(Self { movies })
    }

    /// An empty catalog, the state before any load has succeeded
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look a movie up by its slug
    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }
}

impl AsRef<[Movie]> for Catalog {
    fn as_ref(&self) -> &[Movie] {
        &self.movies
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

// =============================================================================
// CategoryIndex
// =============================================================================

/// Movies grouped by award category.
///
/// Buckets keep source order. `categories` holds the distinct bucket keys
/// sorted for display (see [`CategoryIndex::load`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    pub(crate) buckets: HashMap<Category, Vec<Movie>>,
    pub(crate) categories: Vec<Category>,
}

impl CategoryIndex {
    /// Creates a new, empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Category names in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Movies in a category, in source order.
    ///
    /// Returns an empty slice for an unknown category.
    pub fn movies_in(&self, category: &str) -> &[Movie] {
        self.buckets
            .get(category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.buckets.contains_key(category)
    }

    /// Iterate categories in display order together with their movies
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Movie])> + '_ {
        self.categories
            .iter()
            .map(move |category| (category.as_str(), self.movies_in(category)))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn movie_count(&self) -> usize {
        self.buckets.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
