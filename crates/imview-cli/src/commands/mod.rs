pub mod config;
pub mod info;

use std::path::Path;

use anyhow::{Context, Result};
use imview_core::config::ViewerConfig;
use tracing::debug;

/// Read and validate a config file, or fall back to defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ViewerConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.validate()?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
