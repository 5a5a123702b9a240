use serde::Deserialize;

use crate::document::ScopePolicy;
use crate::engine::{CaseSensitivity, CompareOptions};
use crate::error::ReconError;
use crate::style::{Palette, Rgb};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// A comparison job described in TOML.
///
/// `golden`, `report` and `output.path` are plain strings; callers resolve
/// them relative to the config file's directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReconConfig {
    pub name: String,
    pub golden: String,
    pub report: String,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    #[serde(default)]
    pub missing_scope: ScopePolicy,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareConfig {
    #[serde(default)]
    pub case: CaseSensitivity,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub path: Option<String>,
    /// "xlsx", "csv" or "json". Inferred from `path` when absent.
    #[serde(default)]
    pub format: Option<String>,
}

/// Optional palette overrides as `RRGGBB` strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    pub green: Option<String>,
    pub red: Option<String>,
    pub pink: Option<String>,
    pub yellow: Option<String>,
}

impl PaletteConfig {
    /// Apply overrides on top of the default palette.
    pub fn resolve(&self) -> Result<Palette, ReconError> {
        let mut palette = Palette::default();
        let slots = [
            (&self.green, &mut palette.green),
            (&self.red, &mut palette.red),
            (&self.pink, &mut palette.pink),
            (&self.yellow, &mut palette.yellow),
        ];
        for (value, slot) in slots {
            if let Some(hex) = value {
                *slot = Rgb::parse_hex(hex)?;
            }
        }
        Ok(palette)
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ReconConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: ReconConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if self.name.trim().is_empty() {
            return Err(ReconError::ConfigValidation("name must not be empty".into()));
        }
        if self.golden.trim().is_empty() {
            return Err(ReconError::ConfigValidation("golden path must not be empty".into()));
        }
        if self.report.trim().is_empty() {
            return Err(ReconError::ConfigValidation("report path must not be empty".into()));
        }
        if let Some(ref format) = self.output.format {
            if !matches!(format.to_ascii_lowercase().as_str(), "xlsx" | "csv" | "json") {
                return Err(ReconError::ConfigValidation(format!(
                    "output.format must be xlsx, csv or json, got '{format}'"
                )));
            }
        }
        self.palette.resolve()?;
        Ok(())
    }

    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            case: self.compare.case,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
