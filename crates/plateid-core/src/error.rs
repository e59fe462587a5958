//! # Error Types
//!
//! The plate engine itself is total: normalization, detection, formatting
//! and composition never fail, and the only negative signal they produce is
//! [`CountryCode::Unknown`](crate::CountryCode::Unknown). Errors only arise
//! at the edges where free text is parsed into typed values.

use thiserror::Error;

/// Top-level error type for the plate identity engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlateError {
    /// A string did not name any supported country.
    #[error("unknown country code: {0:?}")]
    UnknownCountry(String),

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
