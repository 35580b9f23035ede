mod file_config;

pub use file_config::{ComposerAliasConfig, FileConfig};

use crate::search::{ComposerAliasTable, Pagination, SortMode};
use anyhow::{Context, Result};
use tracing::info;

pub const DEFAULT_SUGGEST_LIMIT: usize = 10;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub default_limit: Option<usize>,
    pub suggest_limit: Option<usize>,
    pub default_sort: Option<SortMode>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_limit: usize,
    pub suggest_limit: usize,
    pub default_sort: SortMode,
    pub composer_aliases: ComposerAliasTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_limit: Pagination::DEFAULT_LIMIT,
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
            default_sort: SortMode::default(),
            composer_aliases: ComposerAliasTable::builtin(),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();
        let defaults = AppConfig::default();

        let default_limit = file
            .default_limit
            .or(cli.default_limit)
            .unwrap_or(defaults.default_limit);

        let suggest_limit = file
            .suggest_limit
            .or(cli.suggest_limit)
            .unwrap_or(defaults.suggest_limit);

        let default_sort = match file.default_sort {
            Some(name) => name
                .parse::<SortMode>()
                .with_context(|| format!("Invalid default_sort in config file: {:?}", name))?,
            None => cli.default_sort.unwrap_or(defaults.default_sort),
        };

        let composer_aliases = match file.composers {
            Some(composers) => {
                let table = ComposerAliasTable::from_entries(
                    composers.into_iter().map(|c| (c.canonical, c.aliases)),
                )
                .context("Invalid [[composers]] configuration")?;
                info!("Loaded {} composers from config file", table.len());
                table
            }
            None => defaults.composer_aliases,
        };

        Ok(Self {
            default_limit,
            suggest_limit,
            default_sort,
            composer_aliases,
        })
    }

    pub fn default_page(&self) -> Pagination {
        Pagination {
            limit: self.default_limit,
            offset: 0,
        }
    }
}
