//! # plateid-core — License-Plate Identity Engine
//!
//! Turns raw, messy plate strings into three views the rest of the system
//! relies on: a canonical form for comparison and storage, the plate's
//! country, and a display form separated the way that country prints it.
//!
//! ## Key Design Principles
//!
//! 1. **One canonical form.** `NormalizedPlate` is produced only by
//!    [`normalize()`]. Equality, search and storage all go through it, so
//!    `"a123bc 77"` and `"А123ВС77"` are the same vehicle.
//!
//! 2. **Ordered grammars.** Country shapes overlap. The registry is an
//!    ordered slice and the first match wins; the order is the tie-break
//!    policy and must not change.
//!
//! 3. **Total functions.** Nothing in the engine fails. Unrecognized input
//!    yields `CountryCode::Unknown` and an unseparated display form.
//!
//! 4. **No state.** Every function is a pure function of its arguments over
//!    static tables, safe to call from any thread and to memoize.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Errors exist only where text is parsed into typed values.

pub mod builder;
pub mod country;
pub mod detect;
pub mod error;
pub mod format;
pub mod identity;
pub mod normalize;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use builder::build;
pub use country::{CountryCode, COUNTRY_COUNT, UNKNOWN_PLACEHOLDER};
pub use detect::{detect, detect_country, Detection, DetectionSource};
pub use error::PlateError;
pub use format::{format, format_with_hint};
pub use identity::{
    country_badge, plate_contains, resolve_country_code, same_plate, CountryBadge, PlateIdentity,
};
pub use normalize::{normalize, NormalizedPlate};
