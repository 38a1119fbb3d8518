//! Line classification against the user's interest lists.

use crate::types::{AnnotatedLine, AnnotatedMenu, Preferences};
use std::collections::BTreeSet;

/// Tag each line of `text` against the preferences and collect the matched
/// term summaries.
///
/// Matching is case-sensitive raw substring containment, with no
/// tokenization or normalization on either side. Allergen codes match their
/// decimal digit string, not the resolved ingredient name; a pure function
/// of its inputs, so re-annotating the same text yields the same result.
pub fn annotate(text: &str, prefs: &Preferences) -> AnnotatedMenu {
    let mut lines = Vec::new();
    let mut favorite_hit = vec![false; prefs.favorites.len()];
    let mut matched_allergens = BTreeSet::new();

    for raw in text.split('\n') {
        let line = raw.trim_end_matches('\r');
        let mut favorite = false;
        let mut allergy = false;

        for (i, food) in prefs.favorites.iter().enumerate() {
            if line.contains(food.as_str()) {
                favorite = true;
                favorite_hit[i] = true;
            }
        }

        for code in &prefs.allergens {
            if line.contains(&code.digits()) {
                allergy = true;
                matched_allergens.insert(*code);
            }
        }

        lines.push(AnnotatedLine {
            text: line.to_string(),
            favorite,
            allergy,
        });
    }

    let matched_favorites = prefs
        .favorites
        .iter()
        .zip(&favorite_hit)
        .filter(|(_, hit)| **hit)
        .map(|(food, _)| food.clone())
        .collect();

    AnnotatedMenu {
        lines,
        matched_favorites,
        matched_allergens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Preferences;

    fn prefs(favorites: &[&str], codes: &str) -> Preferences {
        Preferences::new(
            favorites.iter().map(|s| s.to_string()).collect(),
            Preferences::parse_allergen_codes(codes),
        )
    }

    #[test]
    fn test_favorite_line_is_tagged() {
        let menu = annotate("현미밥\n귤\n우유", &prefs(&["귤"], ""));
        assert!(!menu.lines[0].favorite);
        assert!(menu.lines[1].favorite);
        assert_eq!(menu.matched_favorites, vec!["귤"]);
        assert!(menu.matched_allergens.is_empty());
    }

    #[test]
    fn test_allergy_line_is_tagged() {
        let menu = annotate("돈까스 (2.5.6)\n샐러드", &prefs(&[], "5"));
        assert!(menu.lines[0].allergy);
        assert!(!menu.lines[1].allergy);
        let numbers: Vec<u8> = menu.matched_allergens.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![5]);
    }

    #[test]
    fn test_line_can_carry_both_tags() {
        let menu = annotate("귤 샐러드 (5)", &prefs(&["귤"], "5"));
        assert!(menu.lines[0].favorite);
        assert!(menu.lines[0].allergy);
    }

    #[test]
    fn test_blank_lines_are_preserved_untagged() {
        let menu = annotate("밥\n\n국", &prefs(&["밥"], "1"));
        assert_eq!(menu.lines.len(), 3);
        assert_eq!(menu.lines[1].text, "");
        assert!(!menu.lines[1].favorite);
        assert!(!menu.lines[1].allergy);
    }

    #[test]
    fn test_matched_favorites_dedup_in_favorites_order() {
        let menu = annotate("핫초코\n귤\n귤잼", &prefs(&["귤", "핫초코"], ""));
        // 귤 matches twice but reports once, in favorites-list order
        assert_eq!(menu.matched_favorites, vec!["귤", "핫초코"]);
    }

    #[test]
    fn test_matched_allergens_sorted_ascending() {
        let menu = annotate("A (16)\nB (2)\nC (10)", &prefs(&[], "2, 10, 16"));
        let numbers: Vec<u8> = menu.matched_allergens.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![2, 10, 16]);
    }

    #[test]
    fn test_annotation_is_idempotent() {
        let p = prefs(&["귤"], "1, 5");
        let text = "귤\n돈까스 (1.5)\n우유";
        assert_eq!(annotate(text, &p), annotate(text, &p));
    }

    #[test]
    fn test_matching_is_case_sensitive_substring() {
        let p = prefs(&["Apple"], "");
        assert!(annotate("apple pie", &p).matched_favorites.is_empty());
        assert_eq!(annotate("Apple pie", &p).matched_favorites, vec!["Apple"]);
    }

    // Known limitation: codes match as digit substrings, so code 1 also
    // fires on the "1" inside "10".
    #[test]
    fn test_code_digits_match_inside_longer_numbers() {
        let menu = annotate("돼지고기 (10)", &prefs(&[], "1"));
        assert!(menu.lines[0].allergy);
        let numbers: Vec<u8> = menu.matched_allergens.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1]);
    }

    #[test]
    fn test_no_preferences_tags_nothing() {
        let menu = annotate("현미밥\n우유 (2)", &Preferences::default());
        assert!(menu.lines.iter().all(|l| !l.favorite && !l.allergy));
        assert!(menu.matched_favorites.is_empty());
        assert!(menu.matched_allergens.is_empty());
    }
}
