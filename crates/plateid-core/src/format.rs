//! # Display Formatter
//!
//! Renders a plate the way it is printed in its country: the normalized
//! body split into groups with spaces or hyphens between them. Countries
//! with two legal layouts (AM, UZ) try the primary layout first and fall
//! back to the alternate one.
//!
//! Formatting never fails. When no country is resolved, or the resolved
//! country has no layout that fits the body, the normalized input is
//! returned as is, country prefix included, so no typed character is lost.

use crate::country::CountryCode;
use crate::detect::{detect, Detection};
use crate::normalize::normalize;
use crate::registry::patterns_for;

/// Format a raw plate for display.
pub fn format(raw: &str) -> String {
    format_with_hint(raw, None)
}

/// Format a raw plate for display, honouring an explicit country hint.
pub fn format_with_hint(raw: &str, hint: Option<&str>) -> String {
    display(raw, detect(raw, hint))
}

/// Render an already computed detection of `raw`.
pub(crate) fn display(raw: &str, detection: Detection) -> String {
    if detection.country == CountryCode::Unknown {
        return normalize(raw).into_string();
    }

    match render_for(detection.country, detection.body.as_str()) {
        Some(rendered) => rendered,
        None => {
            tracing::debug!(
                country = %detection.country,
                body = %detection.body,
                "no layout fits plate body; showing normalized input"
            );
            normalize(raw).into_string()
        }
    }
}

/// Apply the first layout of `country` whose shape fits `body`.
fn render_for(country: CountryCode, body: &str) -> Option<String> {
    patterns_for(country).find_map(|pattern| pattern.render(body))
}
