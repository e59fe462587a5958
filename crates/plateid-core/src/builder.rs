//! # Plate Builder
//!
//! Create and edit forms collect the plate body and the region code in
//! separate fields. [`build()`] merges them into one canonical plate,
//! coping with bodies that already carry a region.

use crate::normalize::{normalize, NormalizedPlate};
use crate::registry::RUSSIAN;

/// Compose a canonical plate from a body and an optional region suffix.
///
/// - A Russian-shaped body (`А123ВС`, optionally followed by up to three
///   region digits) gets its region replaced by `region` when one is
///   supplied; the newly entered region always wins over an embedded one.
///   The region is taken as entered, so `build("A123BC", Some("7777"), None)`
///   yields `А123ВС7777`, which no longer has a Russian shape.
/// - Any other body gets `region` appended unless it already ends with it.
///
/// The country hint does not influence composition. It is accepted so form
/// handlers can pass their fields straight through; detection and
/// formatting consume it downstream.
pub fn build(body: &str, region: Option<&str>, _country_hint: Option<&str>) -> NormalizedPlate {
    let body = normalize(body);
    let region = normalize(region.unwrap_or_default());

    if region.is_empty() {
        return body;
    }

    if let Some(groups) = RUSSIAN.split(body.as_str()) {
        let skeleton: String = groups[..3].concat();
        if region.as_str().chars().count() > 3 {
            tracing::debug!(
                body = %body,
                region = %region,
                "region longer than three characters; plate leaves the Russian shape"
            );
        }
        return normalize(&format!("{skeleton}{region}"));
    }

    if body.as_str().ends_with(region.as_str()) {
        body
    } else {
        normalize(&format!("{body}{region}"))
    }
}
