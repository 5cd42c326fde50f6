use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::element::{DEFAULT_FONT_SIZE, FontFamily};
use crate::surface::DEFAULT_CONTAINER;
use crate::video::DEFAULT_VIDEO_URL;

pub const DEFAULT_IMAGE_URL: &str = "https://konvajs.org/assets/yoda.jpg";
pub const CONFIG_FILE_NAME: &str = "scene_editor.json";
pub const CONFIG_ENV_VAR: &str = "SCENE_EDITOR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Startup settings of the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct EditorConfig {
    /// Name of the container the canvas mounts into
    pub container: String,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub font_size: u32,
    pub font_family: FontFamily,
    /// Source used by the "Add Image" button
    pub image_url: String,
    pub video_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_owned(),
            viewport_width: 600.0,
            viewport_height: 600.0,
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::Arial,
            image_url: DEFAULT_IMAGE_URL.to_owned(),
            video_url: DEFAULT_VIDEO_URL.to_owned(),
        }
    }
}

impl EditorConfig {
    pub fn viewport(&self) -> egui::Vec2 {
        egui::vec2(self.viewport_width, self.viewport_height)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Where to look for a config file: `$SCENE_EDITOR_CONFIG`, else `./scene_editor.json`
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the config file if there is one, falling back to defaults
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}
