//! # CLI Configuration
//!
//! Optional YAML file supplied with `--config`. Every key is optional and
//! command-line flags take precedence over file values.
//!
//! ```yaml
//! default_hint: RUS
//! output: json
//! unknown_placeholder: "?"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use plateid_core::{CountryCode, PlateError, UNKNOWN_PLACEHOLDER};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration file as parsed from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Country hint applied when a command has no `--hint`.
    #[serde(default)]
    pub default_hint: Option<String>,
    #[serde(default)]
    pub output: Option<OutputFormat>,
    /// Text printed by `resolve` for an unknown country.
    #[serde(default)]
    pub unknown_placeholder: Option<String>,
}

/// Effective settings after merging the config file with global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_hint: Option<CountryCode>,
    pub output: OutputFormat,
    pub unknown_placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_hint: None,
            output: OutputFormat::Text,
            unknown_placeholder: UNKNOWN_PLACEHOLDER.to_string(),
        }
    }
}

impl Settings {
    /// The hint to use for a command: its own `--hint`, else the default.
    pub fn hint<'a>(&self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit.or(self.default_hint.map(|code| code.as_str()))
    }
}

impl CliConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config file: {}", path.display()))
    }

    /// Validate the file values and apply the `--json` flag on top.
    pub fn into_settings(self, force_json: bool) -> Result<Settings, PlateError> {
        let default_hint = match self.default_hint.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<CountryCode>() {
                Ok(CountryCode::Unknown) | Err(_) => {
                    return Err(PlateError::InvalidConfig(format!(
                        "default_hint must name a country, got {raw:?}"
                    )))
                }
                Ok(code) => Some(code),
            },
        };

        let output = if force_json {
            OutputFormat::Json
        } else {
            self.output.unwrap_or_default()
        };

        Ok(Settings {
            default_hint,
            output,
            unknown_placeholder: self
                .unknown_placeholder
                .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string()),
        })
    }
}
