// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[caption]` - Default caption text and meme text styling
//! - `[keyboard]` - On-screen keyboard behavior for keyboard avoidance
//! - `[export]` - Export format and photo library directory
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_MEME_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_meme::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::meme::KeyboardHeight;
use crate::error::{Error, Result};
use crate::media::{CaptionStyle, ExportFormat};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Caption text and styling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CaptionConfig {
    /// Text the top caption shows until edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_default: Option<String>,

    /// Text the bottom caption shows until edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Fill color as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,

    /// Outline color as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,

    /// Outline width as a percentage of the font size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width_percent: Option<f32>,

    /// Distance between the stage edge and a caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
}

impl CaptionConfig {
    #[must_use]
    pub fn top_default(&self) -> &str {
        self.top_default.as_deref().unwrap_or(DEFAULT_TOP_CAPTION)
    }

    #[must_use]
    pub fn bottom_default(&self) -> &str {
        self.bottom_default
            .as_deref()
            .unwrap_or(DEFAULT_BOTTOM_CAPTION)
    }

    /// Builds the caption style, replacing invalid values with defaults.
    #[must_use]
    pub fn style(&self) -> CaptionStyle {
        let defaults = CaptionStyle::default();
        CaptionStyle {
            font_family: self
                .font_family
                .clone()
                .filter(|family| !family.trim().is_empty())
                .unwrap_or(defaults.font_family),
            font_size: self
                .font_size
                .filter(|size| size.is_finite())
                .map_or(defaults.font_size, |size| {
                    size.clamp(MIN_CAPTION_FONT_SIZE, MAX_CAPTION_FONT_SIZE)
                }),
            fill: self
                .fill_color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(defaults.fill),
            stroke: self
                .stroke_color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(defaults.stroke),
            stroke_width_percent: self
                .stroke_width_percent
                .filter(|width| width.is_finite())
                .map_or(defaults.stroke_width_percent, |width| {
                    width.clamp(0.0, MAX_CAPTION_STROKE_WIDTH_PERCENT)
                }),
            margin: self
                .margin
                .filter(|margin| margin.is_finite() && *margin >= 0.0)
                .unwrap_or(defaults.margin),
        }
    }
}

/// On-screen keyboard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyboardConfig {
    /// Treat caption focus as the on-screen keyboard appearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_screen: Option<bool>,

    /// Keyboard height in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            on_screen: Some(DEFAULT_ON_SCREEN_KEYBOARD),
            height: Some(DEFAULT_KEYBOARD_HEIGHT),
        }
    }
}

impl KeyboardConfig {
    #[must_use]
    pub fn on_screen(&self) -> bool {
        self.on_screen.unwrap_or(DEFAULT_ON_SCREEN_KEYBOARD)
    }

    #[must_use]
    pub fn height(&self) -> KeyboardHeight {
        self.height.map(KeyboardHeight::new).unwrap_or_default()
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExportConfig {
    /// Format used by Save to Pictures and for extension-less file names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ExportFormat>,

    /// Photo library directory (defaults to the platform pictures directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_dir: Option<PathBuf>,
}

impl ExportConfig {
    #[must_use]
    pub fn format(&self) -> ExportFormat {
        self.format.unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub caption: CaptionConfig,

    #[serde(default)]
    pub keyboard: KeyboardConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Parses `#rrggbb` (the leading `#` is optional).
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            caption: CaptionConfig {
                top_default: Some("HAUT".to_string()),
                font_size: Some(42.0),
                stroke_color: Some("#ff0000".to_string()),
                ..CaptionConfig::default()
            },
            keyboard: KeyboardConfig {
                on_screen: Some(true),
                height: Some(300.0),
            },
            export: ExportConfig {
                format: Some(ExportFormat::Jpeg),
                library_dir: Some(PathBuf::from("/tmp/memes")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not = [valid").expect("failed to write file");

        let err = load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[keyboard]\non_screen = true\n").expect("failed to write file");

        let config = load_from_path(&config_path).expect("partial config should load");
        assert!(config.keyboard.on_screen());
        assert_eq!(config.keyboard.height().value(), DEFAULT_KEYBOARD_HEIGHT);
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.caption.top_default(), DEFAULT_TOP_CAPTION);
    }

    #[test]
    fn theme_mode_is_lowercase_in_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;

        save_to_path(&config, &config_path).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("theme_mode = \"dark\""));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.caption.top_default(), "TOP");
        assert_eq!(config.caption.bottom_default(), "BOTTOM");
        assert!(!config.keyboard.on_screen());
        assert_eq!(config.export.format(), ExportFormat::Png);
    }

    #[test]
    fn caption_style_sanitizes_values() {
        let caption = CaptionConfig {
            font_family: Some("   ".to_string()),
            font_size: Some(5000.0),
            fill_color: Some("not a color".to_string()),
            stroke_color: Some("#00FF00".to_string()),
            stroke_width_percent: Some(f32::NAN),
            margin: Some(-4.0),
            ..CaptionConfig::default()
        };
        let style = caption.style();
        let defaults = CaptionStyle::default();

        assert_eq!(style.font_family, defaults.font_family);
        assert_eq!(style.font_size, MAX_CAPTION_FONT_SIZE);
        assert_eq!(style.fill, defaults.fill);
        assert_eq!(style.stroke, [0, 255, 0]);
        assert_eq!(style.stroke_width_percent, defaults.stroke_width_percent);
        assert_eq!(style.margin, defaults.margin);
    }

    #[test]
    fn keyboard_height_is_clamped_from_config() {
        let keyboard = KeyboardConfig {
            on_screen: None,
            height: Some(-20.0),
        };
        assert_eq!(keyboard.height().value(), 0.0);
    }

    #[test]
    fn parse_hex_color_accepts_optional_hash() {
        assert_eq!(parse_hex_color("#0a0B0c"), Some([10, 11, 12]));
        assert_eq!(parse_hex_color("ffffff"), Some([255, 255, 255]));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("fr".to_string()));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), "[general\nbroken").unwrap();

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
