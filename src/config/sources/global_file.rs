//! Global file source: ~/.config/promptdex/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::PathBuf;

/// Add the global config file to the builder if HOME is known.
/// The file is optional; a missing file contributes nothing.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Some(home) = std::env::var_os("HOME") else {
        return Ok(builder);
    };
    let path = PathBuf::from(home)
        .join(".config")
        .join("promptdex")
        .join("config.toml");
    Ok(builder.add_source(File::from(path).required(false)))
}
