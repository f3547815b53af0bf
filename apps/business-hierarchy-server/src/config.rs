//! Layered application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the YAML file given
//! with `--config`, `APP__*` environment variables (`__` separates nesting
//! levels, e.g. `APP__DATABASE__DSN`), then command-line overrides.

use std::path::Path;

use anyhow::{Context, Result, bail};
use business_hierarchy::BusinessHierarchyConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub modules: ModulesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub dsn: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://business_hierarchy.db?mode=rwc".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Plain,
        }
    }
}

/// Per-module sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    pub business_hierarchy: BusinessHierarchyConfig,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dsn: Option<String>,
    pub verbose: u8,
}

impl AppConfig {
    /// Merge defaults, the optional YAML file and the environment.
    ///
    /// # Errors
    /// Missing file, unreadable YAML or values of the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(dsn) = &overrides.dsn {
            self.database.dsn.clone_from(dsn);
        }
        let level = match overrides.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
    }

    /// # Errors
    /// Inconsistent or oversized page sizes, or an empty DSN.
    pub fn validate(&self) -> Result<()> {
        if self.database.dsn.trim().is_empty() {
            bail!("database.dsn must not be empty");
        }
        let pages = &self.modules.business_hierarchy;
        if pages.default_page_size == 0 {
            bail!("modules.business_hierarchy.default_page_size must be at least 1");
        }
        if pages.max_page_size < pages.default_page_size {
            bail!(
                "modules.business_hierarchy.max_page_size ({}) is below default_page_size ({})",
                pages.max_page_size,
                pages.default_page_size
            );
        }
        if pages.max_page_size > BusinessHierarchyConfig::PAGE_SIZE_CEILING {
            bail!(
                "modules.business_hierarchy.max_page_size ({}) exceeds {}",
                pages.max_page_size,
                BusinessHierarchyConfig::PAGE_SIZE_CEILING
            );
        }
        Ok(())
    }

    /// # Errors
    /// Serialization failure.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}
