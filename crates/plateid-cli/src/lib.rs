//! # plateid-cli — Plate Identity Command-Line Interface
//!
//! Exposes every operation of `plateid-core` to scripts and operators.
//!
//! ## Subcommands
//!
//! - `normalize` — canonical form of a plate
//! - `detect` — country badge, `CODE (label)`
//! - `format` — display form with country separators
//! - `build` — compose a plate from body and region
//! - `resolve` — country code or placeholder
//! - `batch` — analyze one plate per line from a file or stdin
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here write to any
//!   `io::Write` so they can be tested without a terminal.
//! - Handlers delegate to `plateid-core`; no plate logic here.
//! - Results go to stdout, diagnostics go to stderr through `tracing`.

pub mod batch;
pub mod config;
pub mod inspect;

pub use config::{CliConfig, OutputFormat, Settings};

