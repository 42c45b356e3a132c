use crate::domain::Category;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// trace | debug | info | warn | error
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Category preselected in the new-item form
    #[serde(default)]
    pub default_category: Category,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_category: Category::default(),
        }
    }
}

/// Load settings from config.json, defaults when the file doesn't exist
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = super::read_file(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    match content {
        Some(text) => serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Save settings to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(config)?;
    super::atomic_write(path, &json)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(())
}
