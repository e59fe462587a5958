//! # Plate Identity
//!
//! Caller-facing views of a plate: the country badge shown next to it, the
//! one-call [`PlateIdentity`] record, and the equality and search helpers
//! used by duplicate checks and list filters. All of them are built on the
//! normalized form, so they agree with each other by construction.

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;
use crate::detect::detect;
use crate::format::display;
use crate::normalize::{normalize, NormalizedPlate};

/// Country code and label rendered as the badge next to a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryBadge {
    pub code: CountryCode,
    pub label: &'static str,
}

impl From<CountryCode> for CountryBadge {
    fn from(code: CountryCode) -> Self {
        Self {
            code,
            label: code.label(),
        }
    }
}

impl std::fmt::Display for CountryBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code.display_code(), self.label)
    }
}

/// Detect the country of a plate and pair it with its display label.
pub fn country_badge(raw: &str, hint: Option<&str>) -> CountryBadge {
    detect(raw, hint).country.into()
}

/// The detected country code, or `"—"` when it is unknown.
pub fn resolve_country_code(raw: &str, hint: Option<&str>) -> &'static str {
    detect(raw, hint).country.display_code()
}

/// Whether two raw strings denote the same plate.
pub fn same_plate(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Whether `plate` contains `query` once both are normalized.
///
/// An empty query matches every plate, so an empty search box filters
/// nothing out.
pub fn plate_contains(plate: &str, query: &str) -> bool {
    normalize(plate).as_str().contains(normalize(query).as_str())
}

/// Every view of a plate, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateIdentity {
    pub raw: String,
    pub normalized: NormalizedPlate,
    pub country: CountryCode,
    pub label: String,
    pub formatted: String,
}

impl PlateIdentity {
    pub fn analyze(raw: &str, hint: Option<&str>) -> Self {
        let detection = detect(raw, hint);
        let country = detection.country;
        Self {
            raw: raw.to_string(),
            normalized: normalize(raw),
            country,
            label: country.label().to_string(),
            formatted: display(raw, detection),
        }
    }

    pub fn badge(&self) -> CountryBadge {
        self.country.into()
    }
}
