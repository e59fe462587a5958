//! # plateid CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use plateid_cli::batch::{run_batch, BatchArgs};
use plateid_cli::inspect::{
    run_build, run_detect, run_format, run_normalize, run_resolve, BuildArgs, PlateArgs,
};
use plateid_cli::{CliConfig, Settings};

/// Plate identity toolkit.
///
/// Normalizes licence plates typed with mixed Latin and Cyrillic letters,
/// detects their country, and prints them the way that country does.
#[derive(Parser, Debug)]
#[command(name = "plateid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical form of a plate.
    Normalize(PlateArgs),

    /// Detect the country of a plate.
    Detect(PlateArgs),

    /// Print a plate with its country's separators.
    Format(PlateArgs),

    /// Compose a plate from a body and a separately entered region.
    Build(BuildArgs),

    /// Print the country code, or a placeholder when unknown.
    Resolve(PlateArgs),

    /// Analyze one plate per line from a file or stdin.
    Batch(BatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let settings = load_settings(cli.config.as_deref(), cli.json)?;
    tracing::debug!(?settings, "resolved settings");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Normalize(args) => run_normalize(args, &settings, &mut out),
        Commands::Detect(args) => run_detect(args, &settings, &mut out),
        Commands::Format(args) => run_format(args, &settings, &mut out),
        Commands::Build(args) => run_build(args, &settings, &mut out),
        Commands::Resolve(args) => run_resolve(args, &settings, &mut out),
        Commands::Batch(args) => run_batch(args, &settings, &mut out),
    }
}

fn load_settings(path: Option<&std::path::Path>, json: bool) -> Result<Settings> {
    let config = match path {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    Ok(config.into_settings(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_format_with_hint() {
        let cli = Cli::try_parse_from(["plateid", "format", "A123BC77", "--hint", "RUS"]).unwrap();
        if let Commands::Format(args) = cli.command {
            assert_eq!(args.plate, "A123BC77");
            assert_eq!(args.hint.as_deref(), Some("RUS"));
        } else {
            panic!("expected format command");
        }
    }

    #[test]
    fn cli_parse_build_with_region() {
        let cli = Cli::try_parse_from(["plateid", "build", "A123BC", "--region", "77"]).unwrap();
        if let Commands::Build(args) = cli.command {
            assert_eq!(args.body, "A123BC");
            assert_eq!(args.region.as_deref(), Some("77"));
            assert!(args.hint.is_none());
        } else {
            panic!("expected build command");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["plateid", "detect", "1234AB1", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Detect(_)));
    }

    #[test]
    fn cli_parse_batch_stdin() {
        let cli = Cli::try_parse_from(["plateid", "batch", "--strict"]).unwrap();
        if let Commands::Batch(args) = cli.command {
            assert!(args.input.is_none());
            assert!(args.strict);
        } else {
            panic!("expected batch command");
        }
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["plateid"]).is_err());
        assert!(Cli::try_parse_from(["plateid", "normalize"]).is_err());
    }

    #[test]
    fn load_settings_rejects_bad_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plateid.yaml");
        std::fs::write(&path, "default_hint: Narnia\n").unwrap();
        let err = load_settings(Some(path.as_path()), false).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn load_settings_without_file() {
        let settings = load_settings(None, true).unwrap();
        assert_eq!(settings.output, plateid_cli::OutputFormat::Json);
    }
}
