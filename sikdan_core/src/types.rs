//! Core domain types for the sikdan meal lookup system.
//!
//! This module defines the types that flow between the pipeline stages:
//! - User preferences (favorite foods, allergen codes)
//! - Annotated menu lines and the per-day match summaries
//! - The per-date view handed to the presentation layer

use crate::allergens::AllergenCode;
use crate::date::MealDate;
use std::collections::BTreeSet;

/// User interest lists, captured once at startup and read-only afterwards
#[derive(Clone, Debug, Default)]
pub struct Preferences {
    /// Favorite food names: ordered, distinct, trimmed, non-empty
    pub favorites: Vec<String>,
    /// Validated allergen codes
    pub allergens: BTreeSet<AllergenCode>,
}

impl Preferences {
    pub fn new(favorites: Vec<String>, allergens: BTreeSet<AllergenCode>) -> Self {
        Self {
            favorites,
            allergens,
        }
    }

    /// Parse a free-form favorites list separated by commas or newlines.
    ///
    /// Entries are trimmed; empties are dropped and duplicates keep their
    /// first occurrence.
    pub fn parse_favorites(text: &str) -> Vec<String> {
        let mut favorites: Vec<String> = Vec::new();
        for entry in text.replace(',', "\n").split('\n') {
            let entry = entry.trim();
            if entry.is_empty() || favorites.iter().any(|f| f == entry) {
                continue;
            }
            favorites.push(entry.to_string());
        }
        favorites
    }

    /// Parse allergen code numbers separated by commas or whitespace.
    ///
    /// Tokens that are not base-10 integers in the valid code range are
    /// silently dropped.
    pub fn parse_allergen_codes(text: &str) -> BTreeSet<AllergenCode> {
        text.replace(',', " ")
            .split_whitespace()
            .filter_map(AllergenCode::parse)
            .collect()
    }
}

/// One rendered menu line with its annotation tags
///
/// A line may carry both tags at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedLine {
    pub text: String,
    pub favorite: bool,
    pub allergy: bool,
}

/// Annotated menu for one day: tagged lines plus the deduplicated match
/// summaries meant for one-shot notification
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotatedMenu {
    pub lines: Vec<AnnotatedLine>,
    /// Matched favorites, in favorites-list order
    pub matched_favorites: Vec<String>,
    /// Matched allergen codes, ascending by number
    pub matched_allergens: BTreeSet<AllergenCode>,
}

/// Result of displaying one date
#[derive(Clone, Debug)]
pub struct MenuView {
    pub date: MealDate,
    /// `None` when the page carries no meal information for the date
    pub menu: Option<AnnotatedMenu>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_favorites_commas_and_newlines() {
        let favorites = Preferences::parse_favorites("귤, 마카롱\n핫초코");
        assert_eq!(favorites, vec!["귤", "마카롱", "핫초코"]);
    }

    #[test]
    fn test_parse_favorites_drops_empties_and_duplicates() {
        let favorites = Preferences::parse_favorites("귤,, 귤 ,\n\n마카롱");
        assert_eq!(favorites, vec!["귤", "마카롱"]);
    }

    #[test]
    fn test_parse_favorites_empty_input() {
        assert!(Preferences::parse_favorites("").is_empty());
        assert!(Preferences::parse_favorites(" , \n ").is_empty());
    }

    #[test]
    fn test_parse_allergen_codes_mixed_separators() {
        let codes = Preferences::parse_allergen_codes("1,5 10");
        let numbers: Vec<u8> = codes.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 5, 10]);
    }

    #[test]
    fn test_parse_allergen_codes_drops_invalid_tokens() {
        let codes = Preferences::parse_allergen_codes("0, 1, 20, abc, 19");
        let numbers: Vec<u8> = codes.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 19]);
    }
}
