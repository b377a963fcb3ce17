use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::format::DataFormat;
use crate::query::DEFAULT_PAGE_LIMIT;
use crate::recommend::DEFAULT_RECOMMEND_COUNT;
use crate::search::SearchConfig;
use crate::{CatalogError, Result};

/// Items returned by "recently added" when no count is given.
pub const DEFAULT_RECENT_COUNT: usize = 4;

/// Source that produced the catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Top-level catalog settings. Everything here is read once when the catalog
/// is built; changing it afterwards has no effect on a built catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Data file holding the catalog items (JSON or TOML). Optional so that
    /// library callers can build a catalog from items they already hold.
    pub catalog_path: Option<PathBuf>,
    /// Page size used when a page request omits `limit`.
    pub default_page_limit: usize,
    /// How many items "recently added" shows.
    pub recent_count: usize,
    /// How many items a default recommendation draws. Must not exceed the
    /// catalog size, or recommendations fail.
    pub recommend_count: usize,
    /// Fuzzy search index settings.
    pub search: SearchConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_page_limit: DEFAULT_PAGE_LIMIT,
            recent_count: DEFAULT_RECENT_COUNT,
            recommend_count: DEFAULT_RECOMMEND_COUNT,
            search: SearchConfig::default(),
        }
    }
}

const CONFIG_PATH_ENV: &str = "REGDEX_CONFIG_PATH";
const CONFIG_JSON_ENV: &str = "REGDEX_CONFIG_JSON";

impl CatalogConfig {
    /// Resolve settings from the environment, first match wins:
    /// 1) `$REGDEX_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$REGDEX_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found in the working directory,
    /// 4) built-in defaults.
    ///
    /// Whatever the source, the result has passed [`CatalogConfig::validate`].
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        let (config, source) = match (
            non_blank_env(CONFIG_PATH_ENV),
            non_blank_env(CONFIG_JSON_ENV),
        ) {
            (Some(path), _) => {
                let path = PathBuf::from(path);
                (Self::load_from_file(&path)?, ConfigSource::EnvPath(path))
            }
            (None, Some(raw)) => {
                let config = Self::parse_json(&raw).with_context(|| {
                    format!("failed to parse {CONFIG_JSON_ENV}")
                })?;
                (config, ConfigSource::EnvInline)
            }
            (None, None) => match Self::find_default_file() {
                Some(path) => {
                    (Self::load_from_file(&path)?, ConfigSource::File(path))
                }
                None => (Self::default(), ConfigSource::Default),
            },
        };

        debug!(
            ?source,
            catalog = ?config.catalog_path,
            "catalog config resolved"
        );
        Ok((config, source))
    }

    /// Load and validate a config file.
    ///
    /// A relative `catalog_path` is taken relative to the config file's
    /// directory, so a config and its data file can move together.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read catalog config from {}", path.display())
        })?;

        let format = DataFormat::detect(path, &contents);
        let mut config = Self::parse_str(&contents, format).with_context(|| {
            format!("invalid catalog config {}", path.display())
        })?;

        if let Some(base) = path.parent()
            && let Some(catalog_path) = config.catalog_path.as_mut()
            && catalog_path.is_relative()
        {
            *catalog_path = base.join(catalog_path.as_path());
        }
        Ok(config)
    }

    /// Parse `contents` as `format`, then validate.
    pub fn parse_str(
        contents: &str,
        format: DataFormat,
    ) -> anyhow::Result<Self> {
        let config: Self = match format {
            DataFormat::Json => serde_json::from_str(contents)?,
            DataFormat::Toml => toml::from_str(contents)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        Self::parse_str(raw, DataFormat::Json)
    }

    /// Reject settings that would make every query fail.
    pub fn validate(&self) -> Result<()> {
        if self.default_page_limit == 0 {
            return Err(CatalogError::InvalidParameter(
                "default_page_limit must be at least 1".to_string(),
            ));
        }
        if self.recent_count == 0 {
            return Err(CatalogError::InvalidParameter(
                "recent_count must be at least 1".to_string(),
            ));
        }
        if self.recommend_count == 0 {
            return Err(CatalogError::InvalidParameter(
                "recommend_count must be at least 1".to_string(),
            ));
        }
        if self.search.fields.is_empty() {
            return Err(CatalogError::InvalidSearchConfig(
                "at least one search field is required".to_string(),
            ));
        }
        Ok(())
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "regdex.toml",
            "regdex.json",
            "config/regdex.toml",
            "config/regdex.json",
        ];

        CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.is_file())
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
