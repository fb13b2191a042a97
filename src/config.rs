use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use config::{Config, File};
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";
pub const DEFAULT_QUERY: &str = "react";
pub const DEFAULT_HITS_PER_PAGE: u32 = 100;

/// User settings read from `config.toml`. Every field has a default, so
/// a missing or partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub api_base: String,
    pub hits_per_page: u32,
    pub default_query: String,
    pub dark_mode: bool,
    pub log_level: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            hits_per_page: DEFAULT_HITS_PER_PAGE,
            default_query: DEFAULT_QUERY.to_string(),
            dark_mode: true,
            log_level: "info".to_string(),
        }
    }
}

impl SearchConfig {
    /// Reads the config file from the platform config directory, if any.
    pub fn load() -> Result<Self> {
        match default_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()?;

        let config: SearchConfig = settings.try_deserialize()?;
        if config.hits_per_page == 0 {
            return Err(anyhow!("hits_per_page must be at least 1"));
        }
        Ok(config)
    }
}

pub fn default_config_file() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("hn_search").join("config.toml"))
}
