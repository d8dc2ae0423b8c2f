//! Menu configuration
//!
//! Loaded from `assets/config/main_menu.json`. Every field has a default, so
//! the file may be partial or missing entirely.

use crate::error::MenuError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/main_menu.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub project_url: String,
    pub build: BuildInfo,
    pub asset_root: PathBuf,
    pub title_music: String,
    pub save_directory: Option<PathBuf>,
    pub window_scale: u32,
}

/// Shown in the corners of the main menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInfo {
    pub branch: String,
    pub commit: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            project_url: "https://www.github.com/OpenDiablo2/OpenDiablo2".to_string(),
            build: BuildInfo::default(),
            asset_root: PathBuf::from("assets"),
            title_music: "music/title.ogg".to_string(),
            save_directory: None,
            window_scale: 1,
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        BuildInfo {
            branch: "local build".to_string(),
            commit: String::new(),
        }
    }
}

impl MenuConfig {
    /// Reads the config file, falling back to defaults when it is missing
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();

        if !path.exists() {
            log::warn!("Config file not found at {:?}, using defaults.", path);
            return Ok(Self::default());
        }

        log::info!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| MenuError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Configured save folder, else `~/.title_menu/saves`, else `./saves`
    pub fn save_directory(&self) -> PathBuf {
        self.save_directory.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|p| p.join(".title_menu/saves"))
                .unwrap_or_else(|| PathBuf::from("./saves"))
        })
    }
}
