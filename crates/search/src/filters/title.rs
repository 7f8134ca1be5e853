//! Case-insensitive title search.
//!
//! Keeps movies whose title contains the query as a substring, ignoring
//! case on both sides.

use crate::traits::Filter;
use catalog::Movie;

/// Keeps movies whose title contains the query, case-insensitively.
///
/// An empty query matches every title.
pub struct TitleFilter {
    needle: String,
}

impl TitleFilter {
    /// Create a new TitleFilter.
    ///
    /// The query is lowercased once here rather than per movie.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.needle)
    }
}

impl Filter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn keep(&self, movie: &Movie) -> bool {
        self.matches(&movie.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignoring_case() {
        let filter = TitleFilter::new("TeNeT");

        assert!(filter.matches("Tenet"));
        assert!(filter.matches("TENET: extended"));
        assert!(!filter.matches("Mulan"));
    }

    #[test]
    fn test_substring_anywhere() {
        let filter = TitleFilter::new("land");

        assert!(filter.matches("Nomadland"));
        assert!(filter.matches("Landline"));
        assert!(!filter.matches("Minari"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let filter = TitleFilter::new("");

        assert!(filter.matches("Tenet"));
        assert!(filter.matches(""));
    }
}
