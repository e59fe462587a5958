//! # Batch Subcommand
//!
//! Analyzes one plate per input line, for bulk re-indexing of stored
//! records or checking an import before it is loaded.
//!
//! A line is either a raw plate or `raw<TAB>hint`. Blank lines are
//! skipped. JSON output is one `PlateIdentity` object per line; text output
//! is tab-separated `raw`, `normalized`, `code`, `formatted`.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use plateid_core::{CountryCode, PlateIdentity};

use crate::config::{OutputFormat, Settings};

/// Arguments for the batch subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input file with one plate per line. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Exit with status 2 when any plate resolves to no country.
    #[arg(long)]
    pub strict: bool,
}

/// Totals reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub unknown: usize,
}

/// Execute the batch subcommand.
pub fn run_batch(args: &BatchArgs, settings: &Settings, out: &mut impl Write) -> Result<u8> {
    let summary = match &args.input {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening batch input: {}", path.display()))?;
            process(BufReader::new(file), settings, out)?
        }
        None => process(std::io::stdin().lock(), settings, out)?,
    };

    tracing::info!(
        processed = summary.processed,
        unknown = summary.unknown,
        "batch complete"
    );

    if args.strict && summary.unknown > 0 {
        tracing::warn!(unknown = summary.unknown, "plates without a country in strict mode");
        return Ok(2);
    }
    Ok(0)
}

/// Analyze every line of `input`, writing one result per plate.
pub fn process(input: impl BufRead, settings: &Settings, out: &mut impl Write) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading batch line {}", index + 1))?;
        let (raw, hint) = match line.split_once('\t') {
            Some((raw, hint)) => (raw, Some(hint)),
            None => (line.as_str(), None),
        };
        if raw.trim().is_empty() {
            continue;
        }

        let identity = PlateIdentity::analyze(raw, settings.hint(hint));
        summary.processed += 1;
        if identity.country == CountryCode::Unknown {
            summary.unknown += 1;
            tracing::debug!(line = index + 1, raw, "no country detected");
        }

        match settings.output {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&identity)?)?,
            OutputFormat::Text => writeln!(
                out,
                "{}\t{}\t{}\t{}",
                identity.raw,
                identity.normalized,
                identity.country.display_code(),
                identity.formatted
            )?,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "a123bc77\n\n1234AB1\tBY\n000000\nBY 1234AB1\n";

    #[test]
    fn text_output() {
        let mut out = Vec::new();
        let summary = process(INPUT.as_bytes(), &Settings::default(), &mut out).unwrap();
        assert_eq!(summary, BatchSummary { processed: 4, unknown: 1 });

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "a123bc77\tА123ВС77\tRUS\tА123ВС 77",
                "1234AB1\t1234АВ1\tBY\t1234 АВ-1",
                "000000\t000000\t—\t000000",
                "BY 1234AB1\tВУ1234АВ1\tBY\t1234 АВ-1",
            ]
        );
    }

    #[test]
    fn json_output_round_trips() {
        let settings = Settings {
            output: OutputFormat::Json,
            ..Settings::default()
        };
        let mut out = Vec::new();
        process("123ABC45\tBY\n".as_bytes(), &settings, &mut out).unwrap();

        let identity: PlateIdentity = serde_json::from_slice(&out).unwrap();
        assert_eq!(identity.country, CountryCode::By);
        assert_eq!(identity.formatted, "123АВС45");
    }

    #[test]
    fn strict_mode_flags_unknown_plates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plates.txt");
        std::fs::write(&path, "A123BC77\nnonsense\n").unwrap();

        let args = BatchArgs {
            input: Some(path.clone()),
            strict: true,
        };
        let mut out = Vec::new();
        assert_eq!(run_batch(&args, &Settings::default(), &mut out).unwrap(), 2);

        let args = BatchArgs {
            input: Some(path),
            strict: false,
        };
        let mut out = Vec::new();
        assert_eq!(run_batch(&args, &Settings::default(), &mut out).unwrap(), 0);
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let args = BatchArgs {
            input: Some(PathBuf::from("/nonexistent/plates.txt")),
            strict: false,
        };
        let mut out = Vec::new();
        let err = run_batch(&args, &Settings::default(), &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("opening batch input"));
    }
}
