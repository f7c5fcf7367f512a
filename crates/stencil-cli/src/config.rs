use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use stencil_merge::MergeConfig;

use crate::cli::OutputFormat;

/// Defaults loaded from a `--config` TOML file.
///
/// ```toml
/// [merge]
/// mark_new_items = false
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub merge: MergeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
