//! MergeService: orchestrates sources, applies merge policy, deserializes to PromptdexConfig.

use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::PromptdexConfig;
use config::ConfigError;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from workspace and standard sources.
    /// Precedence: global file (lowest) -> workspace file -> environment (highest).
    pub fn load(workspace_root: &Path) -> Result<PromptdexConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<PromptdexConfig, ConfigError> {
        use config::Environment;
        use config::File;

        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = builder.add_source(
            Environment::with_prefix("PROMPTDEX")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn workspace_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let workspace_file = temp.path().join("promptdex.toml");
        let mut file = std::fs::File::create(&workspace_file).unwrap();
        writeln!(file, "[source]").unwrap();
        writeln!(file, "base_url = \"https://mirror.test/prompts\"").unwrap();

        let config = MergeService::load(temp.path()).unwrap();
        assert_eq!(config.source.base_url, "https://mirror.test/prompts");
        assert_eq!(config.source.timeout_secs, 30);
    }

    #[test]
    fn missing_workspace_file_falls_back_to_defaults() {
        let temp = tempfile::tempdir().unwrap();

        let config = MergeService::load(temp.path()).unwrap();
        assert_eq!(config.source.base_url, crate::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn explicit_file_is_loaded() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[source]").unwrap();
        writeln!(file, "timeout_secs = 7").unwrap();

        let config = MergeService::load_from_file(&path).unwrap();
        assert_eq!(config.source.timeout_secs, 7);
    }
}
