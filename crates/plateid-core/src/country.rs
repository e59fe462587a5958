//! # Country Codes — Single Source of Truth
//!
//! Defines the closed [`CountryCode`] enumeration of plate-numbering systems
//! the engine recognizes, together with the literal country tokens accepted
//! in hints and as plate prefixes.
//!
//! `Unknown` is a regular value, not an error: it is what detection returns
//! when nothing matches, and callers render it like any other country.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PlateError;
use crate::normalize::{normalize, NormalizedPlate};

/// Plate-numbering systems known to the engine.
///
/// | Code | Country |
/// |------|---------|
/// | RUS | Russia |
/// | BY | Belarus |
/// | KZ | Kazakhstan |
/// | UA | Ukraine |
/// | AM | Armenia |
/// | AZ | Azerbaijan |
/// | KG | Kyrgyzstan |
/// | MD | Moldova |
/// | TJ | Tajikistan |
/// | TM | Turkmenistan |
/// | UZ | Uzbekistan |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    /// Russia.
    Rus,
    /// Belarus.
    By,
    /// Kazakhstan.
    Kz,
    /// Ukraine.
    Ua,
    /// Armenia.
    Am,
    /// Azerbaijan.
    Az,
    /// Kyrgyzstan.
    Kg,
    /// Moldova.
    Md,
    /// Tajikistan.
    Tj,
    /// Turkmenistan.
    Tm,
    /// Uzbekistan.
    Uz,
    /// No plate grammar matched and no hint applied.
    Unknown,
}

/// Number of concrete countries (everything except `Unknown`).
pub const COUNTRY_COUNT: usize = 11;

/// Display placeholder used in place of an unresolved country code.
pub const UNKNOWN_PLACEHOLDER: &str = "—";

/// Country tokens recognized in hints and plate prefixes, in lookup order.
///
/// Each token is stored as typed and in canonical form, so a token typed
/// with Cyrillic lookalikes (`ВУ`) is the same token as `BY`.
const COUNTRY_TOKENS: [(&str, &str, CountryCode); COUNTRY_COUNT] = [
    ("RUS", "РUS", CountryCode::Rus),
    ("BY", "ВУ", CountryCode::By),
    ("KZ", "КZ", CountryCode::Kz),
    ("UA", "UА", CountryCode::Ua),
    ("AM", "АМ", CountryCode::Am),
    ("AZ", "АZ", CountryCode::Az),
    ("KG", "КG", CountryCode::Kg),
    ("MD", "МD", CountryCode::Md),
    ("TJ", "ТJ", CountryCode::Tj),
    ("TM", "ТМ", CountryCode::Tm),
    ("UZ", "UZ", CountryCode::Uz),
];

impl CountryCode {
    /// Returns every concrete country, excluding `Unknown`.
    pub fn all_countries() -> &'static [CountryCode] {
        &[
            Self::Rus,
            Self::By,
            Self::Kz,
            Self::Ua,
            Self::Am,
            Self::Az,
            Self::Kg,
            Self::Md,
            Self::Tj,
            Self::Tm,
            Self::Uz,
        ]
    }

    /// Returns the uppercase code, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rus => "RUS",
            Self::By => "BY",
            Self::Kz => "KZ",
            Self::Ua => "UA",
            Self::Am => "AM",
            Self::Az => "AZ",
            Self::Kg => "KG",
            Self::Md => "MD",
            Self::Tj => "TJ",
            Self::Tm => "TM",
            Self::Uz => "UZ",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable country name shown in the plate badge.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rus => "Россия",
            Self::By => "Беларусь",
            Self::Kz => "Казахстан",
            Self::Ua => "Украина",
            Self::Am => "Армения",
            Self::Az => "Азербайджан",
            Self::Kg => "Кыргызстан",
            Self::Md => "Молдова",
            Self::Tj => "Таджикистан",
            Self::Tm => "Туркменистан",
            Self::Uz => "Узбекистан",
            Self::Unknown => "Неизвестно",
        }
    }

    /// The code for display, with [`UNKNOWN_PLACEHOLDER`] standing in for `Unknown`.
    pub fn display_code(&self) -> &'static str {
        match self {
            Self::Unknown => UNKNOWN_PLACEHOLDER,
            known => known.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Look up a country token, ignoring case and the Latin/Cyrillic
    /// spelling of lookalike letters.
    ///
    /// Only the eleven country codes are tokens; `UNKNOWN` is not.
    pub fn from_token(token: &str) -> Option<Self> {
        let canonical = normalize(token);
        COUNTRY_TOKENS
            .iter()
            .find(|(_, token, _)| canonical == *token)
            .map(|(_, _, code)| *code)
    }

    /// Find the first whole country token inside a free-text hint.
    ///
    /// The hint is split on every non-alphanumeric character, so `"BY"`,
    /// `"by / Belarus"` and `"(KZ)"` all resolve, while `"BYE"` does not.
    pub fn from_hint(hint: &str) -> Option<Self> {
        hint.split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .find_map(Self::from_token)
    }

    /// Match a country token at the very start of a canonical plate body.
    ///
    /// Returns the code and the byte length of the token. Tokens are tried
    /// in table order; since none is a prefix of another, at most one can
    /// match.
    pub(crate) fn leading_token(body: &NormalizedPlate) -> Option<(Self, usize)> {
        COUNTRY_TOKENS
            .iter()
            .find(|(_, token, _)| body.as_str().starts_with(token))
            .map(|(_, token, code)| (*code, token.len()))
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = PlateError;

    /// Parse a country code, ignoring surrounding whitespace, case, and the
    /// script used for lookalike letters.
    ///
    /// Accepts everything [`CountryCode::as_str()`] produces, `UNKNOWN`
    /// included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("UNKNOWN") {
            return Ok(Self::Unknown);
        }
        Self::from_token(trimmed).ok_or_else(|| PlateError::UnknownCountry(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_countries_count() {
        assert_eq!(CountryCode::all_countries().len(), COUNTRY_COUNT);
        assert!(!CountryCode::all_countries().contains(&CountryCode::Unknown));
    }

    #[test]
    fn test_every_country_has_a_token() {
        for country in CountryCode::all_countries() {
            assert_eq!(CountryCode::from_token(country.as_str()), Some(*country));
        }
        assert_eq!(CountryCode::from_token("UNKNOWN"), None);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for country in CountryCode::all_countries() {
            let parsed: CountryCode = country.as_str().parse().unwrap_or_else(|e| {
                panic!("Failed to parse {country}: {e}")
            });
            assert_eq!(*country, parsed);
        }
        assert_eq!("unknown".parse::<CountryCode>(), Ok(CountryCode::Unknown));
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(" by ".parse::<CountryCode>(), Ok(CountryCode::By));
        assert_eq!("Rus".parse::<CountryCode>(), Ok(CountryCode::Rus));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "XX".parse::<CountryCode>(),
            Err(PlateError::UnknownCountry("XX".to_string()))
        );
        assert!("".parse::<CountryCode>().is_err());
        assert!("RU".parse::<CountryCode>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for country in CountryCode::all_countries() {
            let json = serde_json::to_string(country).unwrap();
            assert_eq!(json, format!("\"{}\"", country.as_str()));
        }
        assert_eq!(
            serde_json::to_string(&CountryCode::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }

    #[test]
    fn test_hint_matches_whole_tokens_only() {
        assert_eq!(CountryCode::from_hint("BY"), Some(CountryCode::By));
        assert_eq!(CountryCode::from_hint("by / Belarus"), Some(CountryCode::By));
        assert_eq!(CountryCode::from_hint("(kz)"), Some(CountryCode::Kz));
        assert_eq!(CountryCode::from_hint("BYE"), None);
        assert_eq!(CountryCode::from_hint("Russia"), None);
        assert_eq!(CountryCode::from_hint(""), None);
    }

    #[test]
    fn test_hint_first_token_wins() {
        assert_eq!(CountryCode::from_hint("UZ or KG"), Some(CountryCode::Uz));
    }

    #[test]
    fn test_canonical_tokens_match_normalizer() {
        for (literal, canonical, _) in COUNTRY_TOKENS {
            assert_eq!(normalize(literal), canonical, "token {literal}");
        }
    }

    #[test]
    fn test_token_spelling_is_alphabet_independent() {
        assert_eq!(CountryCode::from_token("ВУ"), Some(CountryCode::By));
        assert_eq!(CountryCode::from_token("ам"), Some(CountryCode::Am));
        assert_eq!(CountryCode::from_hint("страна: ВУ"), Some(CountryCode::By));
    }

    #[test]
    fn test_leading_token() {
        let lead = |raw: &str| CountryCode::leading_token(&normalize(raw));
        assert_eq!(lead("BY1234"), Some((CountryCode::By, "ВУ".len())));
        assert_eq!(lead("ВУ 1234"), Some((CountryCode::By, "ВУ".len())));
        assert_eq!(lead("rusA123"), Some((CountryCode::Rus, "РUS".len())));
        assert_eq!(lead("A123BC77"), None);
        assert_eq!(lead("Б"), None);
        assert_eq!(lead(""), None);
    }

    #[test]
    fn test_display_code_placeholder() {
        assert_eq!(CountryCode::Unknown.display_code(), UNKNOWN_PLACEHOLDER);
        assert_eq!(CountryCode::Md.display_code(), "MD");
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for country in CountryCode::all_countries() {
            assert!(seen.insert(country.label()), "Duplicate label: {country}");
        }
    }
}
