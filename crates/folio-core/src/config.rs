use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ProjectContext;
use crate::url_model::{SlugRules, DEFAULT_MAX_DEPTH};

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Global configuration loaded from `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Active language code used for localized titles and urls.
    pub language: String,
    /// Project name in media urls.
    pub project: String,
    /// Environment name in media urls.
    pub environment: String,
    /// Maximum number of nodes an ancestor walk collects.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Optional slug rules; if missing, built-in defaults are used.
    #[serde(default)]
    pub slug: Option<SlugRules>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            project: "default".to_string(),
            environment: "live".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            slug: None,
        }
    }
}

impl FolioConfig {
    pub fn slug_rules(&self) -> SlugRules {
        self.slug.unwrap_or_default()
    }

    pub fn project_context(&self) -> ProjectContext {
        ProjectContext {
            project: self.project.clone(),
            environment: self.environment.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("folio")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FolioConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FolioConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<FolioConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FolioConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
