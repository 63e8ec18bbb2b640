use anyhow::{Context, Result};
use icon_core::{Color, IconSize};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Icon edge lengths generated on every run, in output order.
pub const DEFAULT_SIZES: [u32; 6] = [32, 64, 128, 192, 256, 512];

/// Directory the icons are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "logos";

/// Circle fill color.
pub const DEFAULT_COLOR: &str = "#4A90E2";

/// What to do when one icon cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failure and return its error.
    #[default]
    FailFast,
    /// Record the failure in the report and go on with the next size.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
    /// Circle fill color as `#rrggbb` (also `#rgb`, `#rgba`, `#rrggbbaa`)
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_sizes() -> Vec<u32> {
    DEFAULT_SIZES.to_vec()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            sizes: default_sizes(),
            color: default_color(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl Config {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid logo generator config")
    }

    /// The configured fill color.
    pub fn fill_color(&self) -> Result<Color> {
        self.color
            .parse()
            .with_context(|| format!("Invalid fill color '{}'", self.color))
    }

    /// The configured sizes, rejecting zero.
    pub fn icon_sizes(&self) -> Result<Vec<IconSize>> {
        self.sizes
            .iter()
            .map(|&size| IconSize::new(size).with_context(|| format!("Invalid icon size {}", size)))
            .collect()
    }
}
