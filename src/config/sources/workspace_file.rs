//! Workspace file source: {workspace}/promptdex.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Add the workspace config file to the builder.
/// The file is optional; a missing file contributes nothing.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_root.join("promptdex.toml");
    Ok(builder.add_source(File::from(path).required(false)))
}
