//! # Country Detector
//!
//! Decides which plate-numbering system a raw string belongs to. Three
//! sources are consulted, strongest first:
//!
//! 1. **Explicit hint** — an out-of-band country field containing a country
//!    token as a whole word wins outright, whatever the plate looks like.
//! 2. **Plate prefix** — a raw plate that starts with a country token
//!    (`"BY 1234AB1"`, `"kz-123ABC45"`) identifies itself, unless the whole
//!    string is already a valid plate of some grammar.
//! 3. **Shape** — the cleaned body is matched against the
//!    [registry](crate::registry::REGISTRY) in priority order.
//!
//! When nothing applies the result is [`CountryCode::Unknown`].

use serde::Serialize;

use crate::country::CountryCode;
use crate::normalize::{normalize, NormalizedPlate};
use crate::registry::{first_match, Layout};

/// Why a country was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DetectionSource {
    /// The caller-supplied hint named the country.
    Hint,
    /// The raw input started with a country token.
    Prefix,
    /// A registry grammar matched; `priority` is its 1-based position.
    Shape {
        priority: usize,
        #[serde(skip)]
        layout: Layout,
    },
    /// Nothing matched.
    Unmatched,
}

/// Outcome of country detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub country: CountryCode,
    /// Normalized plate body with any country prefix and residual
    /// non-alphanumeric characters removed.
    pub body: NormalizedPlate,
    pub source: DetectionSource,
}

/// Detect the country of a raw plate, reporting the cleaned body and the
/// rule that decided.
pub fn detect(raw: &str, hint: Option<&str>) -> Detection {
    let cleaned = clean(raw);
    let (prefix, body) = match split_prefix(&cleaned) {
        Some((country, rest)) => (Some(country), rest),
        None => (None, cleaned),
    };

    let (country, source) = if let Some(country) = hint.and_then(CountryCode::from_hint) {
        (country, DetectionSource::Hint)
    } else if let Some(country) = prefix {
        (country, DetectionSource::Prefix)
    } else if let Some((priority, pattern)) = first_match(body.as_str()) {
        (
            pattern.country,
            DetectionSource::Shape {
                priority,
                layout: pattern.layout,
            },
        )
    } else {
        (CountryCode::Unknown, DetectionSource::Unmatched)
    };

    tracing::trace!(raw, body = %body, country = %country, source = ?source, "plate country detected");

    Detection {
        country,
        body,
        source,
    }
}

/// Detect the country of a raw plate.
pub fn detect_country(raw: &str, hint: Option<&str>) -> CountryCode {
    detect(raw, hint).country
}

fn clean(raw: &str) -> NormalizedPlate {
    normalize(raw).retain_alphanumeric()
}

/// Split a leading country token off a cleaned plate.
///
/// The token only counts as a prefix when the whole string matches no
/// grammar on its own. Otherwise the letters belong to the plate, as in the
/// Ukrainian `"AM 1234 KK"`, whichever script or separators it was typed
/// with.
fn split_prefix(cleaned: &NormalizedPlate) -> Option<(CountryCode, NormalizedPlate)> {
    if first_match(cleaned.as_str()).is_some() {
        return None;
    }
    let (country, len) = CountryCode::leading_token(cleaned)?;
    Some((country, normalize(&cleaned.as_str()[len..])))
}
