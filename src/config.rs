//! Configuration loading and composition.
//!
//! Settings merge from four layers, lowest to highest precedence:
//! built-in defaults, the global file (`~/.config/promptdex/config.toml`),
//! the workspace file (`{workspace}/promptdex.toml`), and `PROMPTDEX__*`
//! environment variables (`__` separates nested keys, for example
//! `PROMPTDEX__SOURCE__BASE_URL`).

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upstream host serving prompt files as `{category}/{id}.md`.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/contains-studio/agents/main";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptdexConfig {
    /// Prompt source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where prompt files are fetched from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL prompt paths are joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Where the agent catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON file path; None means use the embedded catalog
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_upstream() {
        let config = PromptdexConfig::default();
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.source.timeout_secs, 30);
        assert_eq!(config.catalog.path, None);
        assert!(config.logging.enabled);
    }

    #[test]
    fn partial_toml_fills_remaining_defaults() {
        let parsed: PromptdexConfig = toml_from_str(
            r#"
            [source]
            timeout_secs = 5
            "#,
        );
        assert_eq!(parsed.source.timeout_secs, 5);
        assert_eq!(parsed.source.base_url, DEFAULT_BASE_URL);
        assert_eq!(parsed.logging.level, "info");
    }

    fn toml_from_str(raw: &str) -> PromptdexConfig {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
