//! Restrict a search to one award category.

use crate::traits::Filter;
use catalog::{Category, Movie};

/// Keeps only movies nominated in the given category (exact label match).
pub struct CategoryFilter {
    category: Category,
}

impl CategoryFilter {
    pub fn new(category: impl Into<Category>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn keep(&self, movie: &Movie) -> bool {
        movie.category == self.category
    }
}
