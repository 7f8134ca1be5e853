//! Selection and Ballot types.
//!
//! A [`Selection`] is the in-progress state of the voting form: one chosen
//! nominee label per category. A [`Ballot`] is an owned snapshot of a
//! selection taken at submit time.

use catalog::{display_label, locale_compare, Category, CategoryIndex};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Chosen nominee label per category.
///
/// Values are display labels (slug with hyphens turned into spaces), not raw
/// ids. A category with no entry has not been voted on yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    choices: BTreeMap<Category, String>,
}

impl Selection {
    /// Creates an empty selection (no votes yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote for `movie_id` in `category`.
    ///
    /// Consumes the selection and returns the updated one. Only `category`
    /// is written; every other entry is carried over untouched. Choosing the
    /// same nominee twice leaves the selection unchanged.
    pub fn choose(mut self, category: impl Into<Category>, movie_id: &str) -> Self {
        self.choices.insert(category.into(), display_label(movie_id));
        self
    }

    /// The empty selection a dismissed confirmation returns to
    pub fn reset() -> Self {
        Self::new()
    }

    /// Snapshot the selection into a ballot.
    pub fn submit(&self) -> Ballot {
        Ballot {
            votes: self.choices.clone(),
        }
    }

    /// Label chosen for a category, if any
    pub fn get(&self, category: &str) -> Option<&str> {
        self.choices.get(category).map(|label| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Heading for a category panel: `"{category}: {label} selected!"` once
    /// voted, the bare category name otherwise.
    pub fn heading(&self, category: &str) -> String {
        match self.get(category) {
            Some(label) => format!("{}: {} selected!", category, label),
            None => category.to_string(),
        }
    }

    /// Categories of `index` that have no vote yet, in display order
    pub fn missing_categories<'a>(&self, index: &'a CategoryIndex) -> Vec<&'a str> {
        index
            .categories()
            .iter()
            .filter(|category| !self.choices.contains_key(category.as_str()))
            .map(|category| category.as_str())
            .collect()
    }

    /// Whether every category in `index` has a vote
    pub fn is_complete(&self, index: &CategoryIndex) -> bool {
        self.missing_categories(index).is_empty()
    }
}

/// Votes as they were at submit time.
///
/// Owns its data; nothing done to the originating [`Selection`] afterwards
/// is visible here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ballot {
    votes: BTreeMap<Category, String>,
}

impl Ballot {
    pub fn get(&self, category: &str) -> Option<&str> {
        self.votes.get(category).map(|label| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// `(category, label)` pairs ordered like the category headings
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .votes
            .iter()
            .map(|(category, label)| (category.as_str(), label.as_str()))
            .collect();
        entries.sort_by(|a, b| locale_compare(a.0, b.0));
        entries
    }

    /// Confirmation lines, `"{category}: {label}"`
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(category, label)| format!("{}: {}", category, label))
            .collect()
    }

    pub fn into_map(self) -> BTreeMap<Category, String> {
        self.votes
    }
}

impl fmt::Display for Ballot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Serializes as a JSON object whose keys follow [`Ballot::entries`] order
impl Serialize for Ballot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (category, label) in entries {
            map.serialize_entry(category, label)?;
        }
        map.end()
    }
}
