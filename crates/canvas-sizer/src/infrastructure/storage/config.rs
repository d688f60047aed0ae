//! TOML-based configuration for the canvas sizer.
//!
//! Reads `AppConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\CanvasSizer\config.toml`
//! - Linux:    `~/.config/canvas-sizer/config.toml`
//! - macOS:    `~/Library/Application Support/CanvasSizer/config.toml`
//!
//! or from an explicit path given on the command line.  Example file:
//!
//! ```toml
//! [defaults]
//! pixel_width = 2796
//! pixel_height = 1290
//! diagonal_size = 6.1
//! viewing_distance = "close"
//! preferred_canvas_width = "750"
//!
//! [display]
//! language = "en"
//! log_level = "debug"
//! ```
//!
//! Every key is optional.  Fields annotated with `#[serde(default = "...")]`
//! fall back to the built-in defaults (a 27" 1080p monitor at medium distance,
//! 375 canvas, Chinese labels), so the tool works before any file exists.

use std::path::{Path, PathBuf};

use canvas_sizer_core::{PreferredCanvasWidth, ViewingDistance};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::application::locale::Language;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: FormDefaults,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Values used for any form field not given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormDefaults {
    #[serde(default = "default_pixel_width")]
    pub pixel_width: u32,
    #[serde(default = "default_pixel_height")]
    pub pixel_height: u32,
    /// Diagonal in inches.
    #[serde(default = "default_diagonal_size")]
    pub diagonal_size: f64,
    #[serde(default = "default_viewing_distance")]
    pub viewing_distance: ViewingDistance,
    #[serde(default = "default_canvas_width")]
    pub preferred_canvas_width: PreferredCanvasWidth,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_pixel_width() -> u32 {
    1920
}
fn default_pixel_height() -> u32 {
    1080
}
fn default_diagonal_size() -> f64 {
    27.0
}
fn default_viewing_distance() -> ViewingDistance {
    ViewingDistance::Medium
}
fn default_canvas_width() -> PreferredCanvasWidth {
    PreferredCanvasWidth::W375
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            pixel_width: default_pixel_width(),
            pixel_height: default_pixel_height(),
            diagonal_size: default_diagonal_size(),
            viewing_distance: default_viewing_distance(),
            preferred_canvas_width: default_canvas_width(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            log_level: default_log_level(),
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from the default location, returning
/// `AppConfig::default()` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if no location can be
/// determined, otherwise the same errors as [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            debug!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {}, using defaults", path.display());
            Ok(AppConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("CanvasSizer"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("canvas-sizer"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/CanvasSizer
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("CanvasSizer")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
