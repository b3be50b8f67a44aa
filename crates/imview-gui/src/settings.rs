use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use imview_core::config::ViewerConfig;
use tracing::{info, warn};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "IMVIEW_CONFIG";

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "imview.toml";

/// Load the viewer config. A missing file means defaults; a broken one is
/// reported and also falls back to defaults.
pub fn load() -> ViewerConfig {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    match read(&path) {
        Ok(Some(config)) => {
            info!(path = %path.display(), "config loaded");
            config
        }
        Ok(None) => ViewerConfig::default(),
        Err(e) => {
            warn!("{e:#}; using defaults");
            ViewerConfig::default()
        }
    }
}

fn read(path: &Path) -> Result<Option<ViewerConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ViewerConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(Some(config))
}
