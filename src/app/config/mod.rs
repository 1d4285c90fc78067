// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[main_carousel]` - Engine options of the slide carousel
//! - `[thumbs_carousel]` - Engine options of the thumbnail strip
//! - `[layout]` - Slide height, thumbnail size and gap, directory sorting
//! - `[cache]` - Decoded image cache limits
//!
//! Keys missing from a carousel section keep that carousel's own defaults.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::carousel::Options;
use crate::domain::ui::{CacheBudget, SlideHeight, ThumbnailGap, ThumbnailSize};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

const SECTION_HEADERS: &[&str] = &[
    "[general]",
    "[main_carousel]",
    "[thumbs_carousel]",
    "[layout]",
    "[cache]",
];

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Ordering of images found by a directory scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Slide and thumbnail sizing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Height of the main carousel in logical pixels.
    #[serde(default = "default_slide_height")]
    pub slide_height: f32,

    #[serde(default = "default_thumb_width")]
    pub thumb_width: f32,

    #[serde(default = "default_thumb_height")]
    pub thumb_height: f32,

    /// Gap between thumbnails.
    #[serde(default = "default_thumb_gap")]
    pub thumb_gap: f32,

    /// Ordering used when a directory is opened.
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl LayoutConfig {
    /// Slide height clamped to its valid range.
    #[must_use]
    pub fn slide_height(&self) -> SlideHeight {
        SlideHeight::new(self.slide_height)
    }

    #[must_use]
    pub fn thumb_size(&self) -> ThumbnailSize {
        ThumbnailSize::new(self.thumb_width, self.thumb_height)
    }

    #[must_use]
    pub fn thumb_gap(&self) -> ThumbnailGap {
        ThumbnailGap::new(self.thumb_gap)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            slide_height: default_slide_height(),
            thumb_width: default_thumb_width(),
            thumb_height: default_thumb_height(),
            thumb_gap: default_thumb_gap(),
            sort_order: SortOrder::default(),
        }
    }
}

/// Decoded image cache limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    #[serde(default = "default_cache_mb")]
    pub max_mb: u32,

    #[serde(default = "default_cache_images")]
    pub max_images: usize,
}

impl CacheConfig {
    /// Limits clamped to their valid ranges.
    #[must_use]
    pub fn budget(&self) -> CacheBudget {
        CacheBudget::new(self.max_mb, self.max_images)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_mb: default_cache_mb(),
            max_images: default_cache_images(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    /// Engine options of the slide carousel.
    #[serde(
        default = "Options::main",
        deserialize_with = "crate::carousel::options::deserialize_main_section"
    )]
    pub main_carousel: Options,

    /// Engine options of the thumbnail strip.
    #[serde(
        default = "Options::thumbs",
        deserialize_with = "crate::carousel::options::deserialize_thumbs_section"
    )]
    pub thumbs_carousel: Options,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            main_carousel: Options::main(),
            thumbs_carousel: Options::thumbs(),
            layout: LayoutConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_slide_height() -> f32 {
    layout_bounds::DEFAULT_SLIDE_HEIGHT
}

fn default_thumb_width() -> f32 {
    layout_bounds::DEFAULT_THUMB_WIDTH
}

fn default_thumb_height() -> f32 {
    layout_bounds::DEFAULT_THUMB_HEIGHT
}

fn default_thumb_gap() -> f32 {
    layout_bounds::DEFAULT_THUMB_GAP
}

fn default_cache_mb() -> u32 {
    cache_bounds::DEFAULT_MB
}

fn default_cache_images() -> usize {
    cache_bounds::DEFAULT_IMAGES
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
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
/// default config with the i18n key of a warning to show.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
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
///
/// A file with content but none of the known section headers is rejected,
/// since every value would silently fall back to its default.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    let has_content = content
        .lines()
        .any(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'));
    let has_section = SECTION_HEADERS
        .iter()
        .any(|header| content.contains(header));

    if has_content && !has_section {
        return Err(Error::Config(format!(
            "no known section in {}",
            path.display()
        )));
    }

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
    use crate::carousel::{Align, ContainScroll};
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(!config.main_carousel.drag_free);
        assert!(config.thumbs_carousel.drag_free);
        assert_eq!(config.layout.sort_order, SortOrder::Alphabetical);
        assert_eq!(config.cache.budget(), CacheBudget::default());
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.main_carousel.loop_slides = true;
        config.thumbs_carousel.align = Align::Center;
        config.layout.thumb_gap = 12.0;
        config.layout.sort_order = SortOrder::ModifiedDate;
        config.cache.max_mb = 128;

        save_to_path(&config, &config_path).expect("save should succeed");
        let loaded = load_from_path(&config_path).expect("load should succeed");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn sectionless_file_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"fr\"\n").expect("write file");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[main_carousel]\nloop_slides = true\ncontain_scroll = \"keep-snaps\"\n\n[layout]\nslide_height = 5000.0\n",
        )
        .expect("write file");

        let config = load_from_path(&config_path).expect("load should succeed");
        assert!(config.main_carousel.loop_slides);
        assert_eq!(config.main_carousel.contain_scroll, ContainScroll::KeepSnaps);
        assert!(config.thumbs_carousel.drag_free);
        assert_eq!(
            config.layout.slide_height().value(),
            layout_bounds::MAX_SLIDE_HEIGHT
        );
        assert_eq!(config.layout.thumb_width, layout_bounds::DEFAULT_THUMB_WIDTH);
    }

    #[test]
    fn partial_thumbs_section_keeps_its_own_defaults() {
        let config: Config =
            toml::from_str("[thumbs_carousel]\nalign = \"center\"\n").expect("valid toml");

        assert_eq!(config.thumbs_carousel.align, Align::Center);
        assert!(config.thumbs_carousel.drag_free);
        assert!(!config.main_carousel.drag_free);
    }

    #[test]
    fn partial_main_section_keeps_snapping() {
        let config: Config =
            toml::from_str("[main_carousel]\nalign = \"end\"\n").expect("valid toml");

        assert_eq!(config.main_carousel.align, Align::End);
        assert!(!config.main_carousel.drag_free);
        assert!(config.thumbs_carousel.drag_free);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("a").join("b").join("settings.toml");

        save_to_path(&Config::default(), &nested).expect("save should succeed");
        assert!(nested.exists());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&Config::default(), &config_path).expect("save should succeed");

        let content = fs::read_to_string(&config_path).expect("read file");
        for header in SECTION_HEADERS {
            assert!(content.contains(header), "missing {header}");
        }
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.language = Some("de".to_string());
        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        assert!(base_dir.join("settings.toml").exists());
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("de".to_string()));
    }
}
