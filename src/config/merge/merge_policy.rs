//! Built-in defaults applied below every other source.

use crate::config::DEFAULT_BASE_URL;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with every default value.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = Config::builder()
        .set_default("source.base_url", DEFAULT_BASE_URL)?
        .set_default("source.timeout_secs", 30_u64)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "file")?
        .set_default("logging.color", true)?;
    Ok(builder)
}
