use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level dreamspell configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DreamspellConfig {
    /// Anchor date and Kin of the count.
    #[serde(default)]
    pub anchor: AnchorToml,

    /// Accepted date range.
    #[serde(default)]
    pub range: RangeToml,

    /// Content table source.
    #[serde(default)]
    pub content: ContentToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl DreamspellConfig {
    /// Reads the TOML file at `path`, or returns the defaults when no path
    /// is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorToml {
    #[serde(default = "default_anchor_date")]
    pub date: String,
    #[serde(default = "default_anchor_kin")]
    pub kin: u16,
}

impl Default for AnchorToml {
    fn default() -> Self {
        Self {
            date: default_anchor_date(),
            kin: default_anchor_kin(),
        }
    }
}

fn default_anchor_date() -> String {
    "1986-05-19".to_string()
}
fn default_anchor_kin() -> u16 {
    121
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_range_min")]
    pub min: String,
    #[serde(default = "default_range_max")]
    pub max: String,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            min: default_range_min(),
            max: default_range_max(),
        }
    }
}

fn default_range_min() -> String {
    "0001-01-01".to_string()
}
fn default_range_max() -> String {
    "5000-12-31".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ContentToml {
    /// JSON content file. The built-in English table is used if unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Panels rendered in text mode, in order.
    #[serde(default = "default_panels")]
    pub panels: Vec<String>,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            panels: default_panels(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
fn default_panels() -> Vec<String> {
    ["identity", "oracle", "cycles", "moon"]
        .map(String::from)
        .to_vec()
}
