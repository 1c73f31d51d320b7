//! Locale-aware ordering of display strings.
//!
//! Strings are compared in three passes, the way dictionary collations do:
//! base letters first (accents and case ignored), then accents, then case
//! with lower case first. Punctuation and spaces sort before digits, digits
//! before letters.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Separator,
    Digit,
    Letter,
}

fn class_of(c: char) -> CharClass {
    if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Separator
    }
}

/// Base letters of lower-case letters that carry a diacritic or ligature
/// without a canonical decomposition, so NFD alone leaves them unfolded.
fn fold_base_letter(c: char) -> Option<&'static str> {
    let base = match c {
        'ø' => "o",
        'ł' | 'ŀ' => "l",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ŧ' => "t",
        'ŋ' => "n",
        'ĸ' => "k",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'þ' => "th",
        _ => return None,
    };
    Some(base)
}

/// Precomputed sort key for one string. Equal keys mean the strings collate equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<char>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        let decomposed = s.nfd().collect::<Vec<char>>();

        let primary = decomposed
            .iter()
            .filter(|c| !is_combining_mark(**c))
            .flat_map(|c| c.to_lowercase())
            .flat_map(|c| match fold_base_letter(c) {
                Some(base) => base.chars().collect::<Vec<_>>(),
                None => vec![c],
            })
            .map(|c| (class_of(c), c))
            .collect();

        let secondary = decomposed.iter().flat_map(|c| c.to_lowercase()).collect();

        let tertiary = decomposed
            .iter()
            .filter(|c| !is_combining_mark(**c))
            .map(|c| c.is_uppercase())
            .collect();

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    fn compare(a: &str, b: &str) -> Ordering {
        CollationKey::new(a).cmp(&CollationKey::new(b))
    }

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut words = words.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        words.sort_by(|a, b| compare(a, b));
        words
    }

    #[test]
    fn accents_sort_next_to_base_letter() {
        assert_eq!(
            sorted(&["Zebra", "Éclair", "Echo", "apple"]),
            vec!["apple", "Echo", "Éclair", "Zebra"]
        );
    }

    #[test]
    fn case_is_ignored_at_first_level() {
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        assert_eq!(compare("Banana", "apple"), Ordering::Greater);
    }

    #[test]
    fn unaccented_before_accented_when_otherwise_equal() {
        assert_eq!(compare("cote", "côte"), Ordering::Less);
        assert_eq!(compare("résumé", "resume"), Ordering::Greater);
    }

    #[test]
    fn lower_case_before_upper_case_when_otherwise_equal() {
        assert_eq!(compare("river", "River"), Ordering::Less);
    }

    #[test]
    fn precomposed_and_decomposed_forms_are_equal() {
        assert_eq!(compare("Caf\u{e9}", "Cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn digits_before_letters() {
        assert_eq!(
            sorted(&["Wildfire", "99 Problems", "(Intro)"]),
            vec!["(Intro)", "99 Problems", "Wildfire"]
        );
    }

    #[test]
    fn letters_without_decomposition_sort_next_to_base_letter() {
        assert_eq!(compare("Øresund", "Paris"), Ordering::Less);
        assert_eq!(compare("Łódź", "Mars"), Ordering::Less);
        assert_eq!(compare("Ærø", "Bergen"), Ordering::Less);
        assert_eq!(compare("Straße", "Strasse"), Ordering::Greater);
        assert_eq!(
            sorted(&["Zebra", "Øresund", "Orbit", "Paris"]),
            vec!["Orbit", "Øresund", "Paris", "Zebra"]
        );
    }
}
