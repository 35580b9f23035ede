use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub default_limit: Option<usize>,
    pub suggest_limit: Option<usize>,
    /// One of the sort mode names, e.g. "relevance" or "popularity".
    pub default_sort: Option<String>,

    /// Replaces the builtin alias table when present. Order matters: the
    /// first composer whose aliases match a query wins.
    pub composers: Option<Vec<ComposerAliasConfig>>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ComposerAliasConfig {
    pub canonical: String,
    pub aliases: Vec<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
