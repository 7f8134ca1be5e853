//! CategoryIndex building.
//!
//! Grouping is a single pass over the records; the display order of
//! categories is computed afterwards with [`locale_compare`].

use crate::types::*;
use std::cmp::Ordering;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

impl CategoryIndex {
    /// Group records by category.
    ///
    /// Steps:
    /// 1. Walk the records once, appending each to its category bucket
    ///    (creating the bucket on first sight)
    /// 2. Sort the distinct category names ascending with [`locale_compare`]
    ///
    /// Never fails. An empty input produces an index with zero categories.
    pub fn load(records: &[Movie]) -> Self {
        let mut index = CategoryIndex::new();

        for movie in records {
            index
                .buckets
                .entry(movie.category.clone())
                .or_insert_with(Vec::new)
                .push(movie.clone());
        }

        let mut categories: Vec<Category> = index.buckets.keys().cloned().collect();
        categories.sort_by(|a, b| locale_compare(a, b));
        index.categories = categories;

        debug!(
            "Grouped {} movies into {} categories",
            records.len(),
            index.categories.len()
        );
        index
    }

    /// Convenience wrapper over [`CategoryIndex::load`] for a validated catalog
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::load(catalog.movies())
    }
}

/// Locale-aware string ordering used for category headings.
///
/// Compares in three levels, like a root-locale collator:
/// 1. Base letters, ignoring case and accents ("Épique" sits with the E's)
/// 2. Accents, unaccented first
/// 3. Case, lowercase first
///
/// Strings equal on all three fall back to code point order so distinct
/// names never compare equal.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_marks(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, category: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: id.replace('-', " "),
            category: category.to_string(),
            photo_url: String::new(),
        }
    }

    fn reference_records() -> Vec<Movie> {
        vec![
            movie("nomadland", "Best Picture"),
            movie("chadwick-boseman", "Best Actor"),
            movie("minari", "Best Picture"),
            movie("vanessa-kirby", "Best Actress"),
            movie("anthony-hopkins", "Best Actor"),
            movie("tenet", "Best Visual Effects"),
        ]
    }

    #[test]
    fn test_categories_sorted_alphabetically() {
        let index = CategoryIndex::load(&reference_records());

        assert_eq!(
            index.categories(),
            &["Best Actor", "Best Actress", "Best Picture", "Best Visual Effects"]
        );
    }

    #[test]
    fn test_buckets_keep_source_order() {
        let index = CategoryIndex::load(&reference_records());

        let actors: Vec<_> = index
            .movies_in("Best Actor")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(actors, vec!["chadwick-boseman", "anthony-hopkins"]);

        let pictures: Vec<_> = index
            .movies_in("Best Picture")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(pictures, vec!["nomadland", "minari"]);
    }

    #[test]
    fn test_partition_keeps_every_movie_once() {
        let records = reference_records();
        let index = CategoryIndex::load(&records);

        assert_eq!(index.movie_count(), records.len());

        let mut regrouped: Vec<&Movie> = index.iter().flat_map(|(_, movies)| movies).collect();
        regrouped.sort_by(|a, b| a.id.cmp(&b.id));
        let mut expected: Vec<&Movie> = records.iter().collect();
        expected.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(regrouped, expected);

        for (category, movies) in index.iter() {
            assert!(movies.iter().all(|m| m.category == category));
        }
    }

    #[test]
    fn test_categories_strictly_ascending() {
        let records = vec![
            movie("a", "best picture"),
            movie("b", "Best Picture"),
            movie("c", "Best Actor"),
            movie("d", "Zoetrope"),
            movie("e", "animated Feature"),
        ];
        let index = CategoryIndex::load(&records);

        for pair in index.categories().windows(2) {
            assert_eq!(locale_compare(&pair[0], &pair[1]), Ordering::Less);
        }
        assert_eq!(index.categories()[0], "animated Feature");
        assert_eq!(index.category_count(), 5);
    }

    #[test]
    fn test_empty_records_give_empty_index() {
        let index = CategoryIndex::load(&[]);

        assert!(index.is_empty());
        assert_eq!(index.category_count(), 0);
        assert!(index.movies_in("Best Picture").is_empty());
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn test_locale_compare_is_case_insensitive_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Banana", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_lowercase_sorts_before_uppercase_on_ties() {
        assert_eq!(locale_compare("best", "Best"), Ordering::Less);
        assert_eq!(locale_compare("Best Picture", "best picture"), Ordering::Greater);

        let index = CategoryIndex::load(&[
            movie("a", "Best Picture"),
            movie("b", "best picture"),
        ]);
        assert_eq!(index.categories(), &["best picture", "Best Picture"]);
    }

    #[test]
    fn test_accented_categories_sort_with_their_base_letter() {
        let index = CategoryIndex::load(&[
            movie("a", "Meilleur film"),
            movie("b", "Épique"),
            movie("c", "Zeta"),
        ]);
        assert_eq!(index.categories(), &["Épique", "Meilleur film", "Zeta"]);

        // same letters: unaccented first, accents still ahead of case
        assert_eq!(locale_compare("Epique", "Épique"), Ordering::Less);
        assert_eq!(locale_compare("epique", "Épique"), Ordering::Less);
        assert_eq!(locale_compare("Epique", "épique"), Ordering::Less);
        assert_eq!(locale_compare("Équipe", "Ezra"), Ordering::Less);
    }
}
