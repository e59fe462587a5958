//! # Letter Equivalence Normalizer
//!
//! Produces the canonical, machine-comparable form of a plate: uppercase,
//! no whitespace or hyphens, and Cyrillic letterforms wherever a Latin
//! lookalike was typed. Every search, filter and duplicate check compares
//! plates in this form, so `"a 123 bc-77"` and `"А123ВС77"` are the same
//! vehicle.
//!
//! ## Invariants
//!
//! - `normalize(normalize(x)) == normalize(x)`.
//! - Pure function of the input; never fails.

use serde::{Deserialize, Serialize};

/// Latin letters that stand in for Cyrillic plate letters.
///
/// `R → Р` is not a visual lookalike but a long-standing input convention;
/// stored records depend on it.
const LOOKALIKES: [(char, char); 13] = [
    ('A', 'А'),
    ('B', 'В'),
    ('C', 'С'),
    ('E', 'Е'),
    ('H', 'Н'),
    ('K', 'К'),
    ('M', 'М'),
    ('O', 'О'),
    ('P', 'Р'),
    ('T', 'Т'),
    ('X', 'Х'),
    ('Y', 'У'),
    ('R', 'Р'),
];

/// A plate in canonical form.
///
/// The only constructor is [`normalize()`] (and [`NormalizedPlate::new`],
/// which routes through it), so every value upholds the canonical-form
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct NormalizedPlate(String);

impl NormalizedPlate {
    /// Normalize arbitrary text into a canonical plate.
    pub fn new(raw: &str) -> Self {
        normalize(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of characters (not bytes) in the canonical form.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Drop every character that is neither a letter nor a digit.
    pub(crate) fn retain_alphanumeric(mut self) -> Self {
        self.0.retain(char::is_alphanumeric);
        self
    }
}

impl<'de> Deserialize<'de> for NormalizedPlate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(normalize(&raw))
    }
}

impl AsRef<str> for NormalizedPlate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NormalizedPlate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NormalizedPlate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<NormalizedPlate> for String {
    fn from(plate: NormalizedPlate) -> Self {
        plate.0
    }
}

impl std::fmt::Display for NormalizedPlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map a single uppercase character to its Cyrillic plate equivalent.
fn cyrillic_equivalent(c: char) -> char {
    LOOKALIKES
        .iter()
        .find(|(latin, _)| *latin == c)
        .map_or(c, |(_, cyrillic)| *cyrillic)
}

/// Canonicalize a raw plate string.
///
/// Uppercases, drops whitespace and `-`, and replaces Latin lookalike
/// letters with Cyrillic ones. Digits, Cyrillic letters and any other
/// characters pass through.
pub fn normalize(raw: &str) -> NormalizedPlate {
    let canonical = raw
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(cyrillic_equivalent)
        .collect();
    NormalizedPlate(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_and_cyrillic_collapse() {
        assert_eq!(normalize("A123BC77"), normalize("А123ВС77"));
        assert_eq!(normalize("A123BC77"), "А123ВС77");
    }

    #[test]
    fn test_strips_whitespace_and_hyphens() {
        assert_eq!(normalize(" a 123-bc\t77 "), "А123ВС77");
        assert_eq!(normalize("1234 AB-1"), "1234АВ1");
    }

    #[test]
    fn test_uppercases_cyrillic() {
        assert_eq!(normalize("а123вс"), "А123ВС");
    }

    #[test]
    fn test_r_maps_to_er() {
        assert_eq!(normalize("R"), "Р");
        assert_eq!(normalize("r"), normalize("P"));
    }

    #[test]
    fn test_full_lookalike_table() {
        assert_eq!(normalize("ABCEHKMOPTXYR"), "АВСЕНКМОРТХУР");
    }

    #[test]
    fn test_non_lookalike_latin_untouched() {
        assert_eq!(normalize("dfgz"), "DFGZ");
    }

    #[test]
    fn test_other_characters_pass_through() {
        assert_eq!(normalize("A.123/BC"), "А.123/ВС");
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("  - \n").is_empty());
    }

    #[test]
    fn test_char_len_counts_characters() {
        let plate = normalize("A123BC77");
        assert_eq!(plate.char_len(), 8);
        assert!(plate.as_str().len() > 8);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let plate: NormalizedPlate = serde_json::from_str("\"a 123 bc 77\"").unwrap();
        assert_eq!(plate, "А123ВС77");
        assert_eq!(serde_json::to_string(&plate).unwrap(), "\"А123ВС77\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "[A-Za-zА-Яа-яЁё0-9 \\-._/]{0,20}") {
            let once = normalize(&raw);
            let twice = normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalize_output_has_no_separators(raw in "[A-Za-zА-Яа-я0-9 \\-\t]{0,20}") {
            let plate = normalize(&raw);
            prop_assert!(!plate.as_str().contains(|c: char| c.is_whitespace() || c == '-'));
        }

        #[test]
        fn normalize_output_has_no_lookalikes(raw in "[A-Za-z0-9]{0,20}") {
            let plate = normalize(&raw);
            prop_assert!(!plate.as_str().contains(|c: char| LOOKALIKES.iter().any(|(l, _)| *l == c)));
        }
    }
}
