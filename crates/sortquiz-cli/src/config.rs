//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level sortquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortquizConfig {
    /// Directory rendered pages and score reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Save a score report JSON on every `play`, without needing `--report`.
    #[serde(default)]
    pub always_report: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./sortquiz-out")
}

impl Default for SortquizConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            always_report: false,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `sortquiz.toml` in the current directory
/// 2. `~/.config/sortquiz/config.toml`
///
/// Environment variable override: `SORTQUIZ_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<SortquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("sortquiz.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SortquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SortquizConfig::default(),
    };

    if let Ok(dir) = std::env::var("SORTQUIZ_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("sortquiz"))
}
