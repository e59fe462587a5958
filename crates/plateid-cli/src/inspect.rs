//! # Single-Plate Subcommands
//!
//! `normalize`, `detect`, `format`, `build` and `resolve`: each takes one
//! plate on the command line and prints one result.
//!
//! ```bash
//! plateid format "a 123 bc 77"          # А123ВС 77
//! plateid detect 123ABC45 --hint BY     # BY (Беларусь)
//! plateid build A123BC77 --region 50    # А123ВС50
//! ```

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde_json::json;

use plateid_core::{
    build, detect, format_with_hint, normalize, CountryBadge, CountryCode, PlateIdentity,
};

use crate::config::{OutputFormat, Settings};

/// Arguments shared by commands that read one raw plate.
#[derive(Args, Debug)]
pub struct PlateArgs {
    /// Raw plate as typed, e.g. "a 123 bc-77".
    pub plate: String,

    /// Country hint; a country code anywhere in it overrides detection.
    #[arg(long)]
    pub hint: Option<String>,
}

/// Arguments for `build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Plate body without (or with) its region.
    pub body: String,

    /// Region code entered separately.
    #[arg(long)]
    pub region: Option<String>,

    /// Country hint, used only for the formatted echo.
    #[arg(long)]
    pub hint: Option<String>,
}

fn write_json(out: &mut impl Write, value: &serde_json::Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(value)?)?;
    Ok(())
}

/// Print the canonical form of a plate.
pub fn run_normalize(args: &PlateArgs, settings: &Settings, out: &mut impl Write) -> Result<u8> {
    let normalized = normalize(&args.plate);
    match settings.output {
        OutputFormat::Text => writeln!(out, "{normalized}")?,
        OutputFormat::Json => write_json(out, &json!({
            "raw": args.plate,
            "normalized": normalized,
        }))?,
    }
    Ok(0)
}

/// Print the detected country badge.
pub fn run_detect(args: &PlateArgs, settings: &Settings, out: &mut impl Write) -> Result<u8> {
    let detection = detect(&args.plate, settings.hint(args.hint.as_deref()));
    let badge = CountryBadge::from(detection.country);
    match settings.output {
        OutputFormat::Text => writeln!(out, "{badge}")?,
        OutputFormat::Json => write_json(out, &json!({
            "code": badge.code,
            "label": badge.label,
            "body": detection.body,
            "source": detection.source,
        }))?,
    }
    Ok(0)
}

/// Print the display form of a plate.
pub fn run_format(args: &PlateArgs, settings: &Settings, out: &mut impl Write) -> Result<u8> {
    let identity = PlateIdentity::analyze(&args.plate, settings.hint(args.hint.as_deref()));
    match settings.output {
        OutputFormat::Text => writeln!(out, "{}", identity.formatted)?,
        OutputFormat::Json => write_json(out, &json!({
            "raw": identity.raw,
            "formatted": identity.formatted,
            "country": identity.country,
        }))?,
    }
    Ok(0)
}

/// Compose a plate from body and region and print its canonical form.
pub fn run_build(args: &BuildArgs, settings: &Settings, out: &mut impl Write) -> Result<u8> {
    let hint = settings.hint(args.hint.as_deref());
    let plate = build(&args.body, args.region.as_deref(), hint);
    match settings.output {
        OutputFormat::Text => writeln!(out, "{plate}")?,
        OutputFormat::Json => write_json(out, &json!({
            "plate": plate,
            "formatted": format_with_hint(plate.as_str(), hint),
        }))?,
    }
    Ok(0)
}

/// Print the country code, or the configured placeholder when unknown.
pub fn run_resolve(args: &PlateArgs, settings: &Settings, out: &mut impl Write) -> Result<u8> {
    let country = detect(&args.plate, settings.hint(args.hint.as_deref())).country;
    let code = match country {
        CountryCode::Unknown => settings.unknown_placeholder.as_str(),
        known => known.as_str(),
    };
    match settings.output {
        OutputFormat::Text => writeln!(out, "{code}")?,
        OutputFormat::Json => write_json(out, &json!({ "code": code }))?,
    }
    Ok(0)
}
