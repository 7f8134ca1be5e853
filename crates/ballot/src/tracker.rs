//! Live selection holder for an interactive voting form.
//!
//! [`Selection`] is a value; `SelectionTracker` owns the current one and
//! swaps it on every vote, so callers that prefer `&mut self` methods never
//! have to thread the value through themselves.

use crate::types::{Ballot, Selection};
use catalog::Category;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    current: Selection,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote, overwriting any earlier choice in the same category
    pub fn choose(&mut self, category: impl Into<Category>, movie_id: &str) {
        let category = category.into();
        debug!("Vote recorded: {} -> {}", category, movie_id);

        self.current = std::mem::take(&mut self.current).choose(category, movie_id);
    }

    /// Clear every vote
    pub fn reset(&mut self) {
        debug!("Selection reset ({} votes cleared)", self.current.len());
        self.current = Selection::reset();
    }

    pub fn submit(&self) -> Ballot {
        self.current.submit()
    }

    pub fn selection(&self) -> &Selection {
        &self.current
    }
}
