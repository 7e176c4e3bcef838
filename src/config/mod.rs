use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::editor::tools::{BrushSettings, Color, DEFAULT_BRUSH_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigPathError {
    #[error("neither XDG_CONFIG_HOME nor HOME is set")]
    MissingHomeDirectory,
}

const APP_DIR: &str = "sketchpad";
const APP_CONFIG_FILE: &str = "config.json";

pub const DEFAULT_CANVAS_WIDTH: u32 = 1280;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 720;
pub const DEFAULT_EXPORT_FILE_NAME: &str = "drawing.png";

/// Where live shape previews are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewPolicy {
    /// Previews go to a separate layer composited over the drawing.
    #[default]
    Overlay,
    /// Every preview move wipes the whole drawing before redrawing the outline.
    ClearSurface,
}

/// Settings read from `config.json`; every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub brush_width: u8,
    pub brush_color: String,
    pub opacity: f32,
    pub preview_policy: PreviewPolicy,
    pub export_dir: Option<PathBuf>,
    pub export_file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            brush_width: DEFAULT_BRUSH_WIDTH,
            brush_color: Color::BLACK.to_hex(),
            opacity: 1.0,
            preview_policy: PreviewPolicy::default(),
            export_dir: None,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Initial brush; an unparseable color falls back to black.
    pub fn brush_settings(&self) -> BrushSettings {
        let color = Color::from_hex(&self.brush_color).unwrap_or_else(|| {
            tracing::warn!(
                raw = %self.brush_color,
                "invalid brush_color value in config; expected #RRGGBB or #RGB"
            );
            Color::BLACK
        });
        BrushSettings::new(color, self.brush_width, self.opacity)
    }
}

/// Reads `config.json` from the user config directory, falling back to defaults.
pub fn load_app_config() -> AppConfig {
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    load_app_config_from(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_from(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match config_file_path(xdg_config_home, home) {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(error = %err, "no config directory; using defaults");
            return AppConfig::default();
        }
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return AppConfig::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "unreadable config; using defaults");
            return AppConfig::default();
        }
    };

    parse_app_config(&contents).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "malformed config; using defaults");
        AppConfig::default()
    })
}

pub fn parse_app_config(contents: &str) -> Result<AppConfig, serde_json::Error> {
    serde_json::from_str(contents)
}

/// `$XDG_CONFIG_HOME/sketchpad/config.json`, or `$HOME/.config/...` when XDG is unset or empty.
pub fn config_file_path(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let root = match xdg_config_home {
        Some(xdg) if !xdg.as_os_str().is_empty() => xdg.to_path_buf(),
        _ => home
            .ok_or(ConfigPathError::MissingHomeDirectory)?
            .join(".config"),
    };
    Ok(root.join(APP_DIR).join(APP_CONFIG_FILE))
}
