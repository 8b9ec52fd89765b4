//! Configuration for VecDraw
//!
//! Stored as JSON or TOML (chosen by file extension) in the platform config
//! directory. Sections:
//! - Canvas defaults for new documents
//! - Undo history limits
//! - Recently used files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{SettingsError, SettingsResult};

/// Name of the application directory inside the platform config directory.
pub const APP_DIR_NAME: &str = "vecdraw";

/// File name of the default configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Defaults for newly created documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Canvas width in user units
    pub width: f64,
    /// Canvas height in user units
    pub height: f64,
    /// Background color in any notation the color parser accepts
    pub background: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            background: "white".to_string(),
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Most undo entries kept; 0 keeps everything
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

/// Recently opened or saved files, most recent first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFiles {
    /// Number of entries kept
    pub capacity: usize,
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl Default for RecentFiles {
    fn default() -> Self {
        Self {
            capacity: 10,
            files: Vec::new(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasSettings,
    pub history: HistorySettings,
    pub recent_files: RecentFiles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform location of the configuration file, if the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.canvas.width.is_finite() && self.canvas.width > 0.0) {
            return Err(SettingsError::invalid("canvas.width", "must be > 0"));
        }
        if !(self.canvas.height.is_finite() && self.canvas.height > 0.0) {
            return Err(SettingsError::invalid("canvas.height", "must be > 0"));
        }
        if self.canvas.background.trim().is_empty() {
            return Err(SettingsError::invalid("canvas.background", "must not be empty"));
        }
        if self.recent_files.capacity == 0 {
            return Err(SettingsError::invalid("recent_files.capacity", "must be > 0"));
        }
        Ok(())
    }

    /// Add file to the front of the recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        let recent = &mut self.recent_files;
        recent.files.retain(|f| f != &path);
        recent.files.insert(0, path);
        recent.files.truncate(recent.capacity);
    }
}
