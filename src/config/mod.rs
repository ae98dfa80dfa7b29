// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded once at startup
//! from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[navigation]` - Transition duration, swipe threshold, auto-advance
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `ICED_SLIDES_CONFIG_DIR` environment variable or pass `--config-dir`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_slides::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! assert!(config.navigation.transition().as_millis() >= 100);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::ui::{AutoAdvanceInterval, SwipeThreshold, TransitionDuration};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Navigation timing and gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Total transition duration in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,

    /// Horizontal travel (logical pixels) that turns a touch into a swipe.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Whether slides advance on their own until the first interaction.
    #[serde(
        default = "default_auto_advance",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance: Option<bool>,

    /// Seconds between automatic advances.
    #[serde(
        default = "default_auto_advance_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance_secs: Option<u32>,
}

impl NavigationConfig {
    /// Transition duration, clamped to the supported range.
    #[must_use]
    pub fn transition(&self) -> TransitionDuration {
        TransitionDuration::new(self.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS))
    }

    /// Swipe threshold, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        SwipeThreshold::new(self.swipe_threshold_px.unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX))
    }

    /// Auto-advance interval, or `None` when auto-advance is disabled.
    #[must_use]
    pub fn auto_advance_interval(&self) -> Option<AutoAdvanceInterval> {
        if self.auto_advance.unwrap_or(DEFAULT_AUTO_ADVANCE_ENABLED) {
            Some(AutoAdvanceInterval::new(
                self.auto_advance_secs.unwrap_or(DEFAULT_AUTO_ADVANCE_SECS),
            ))
        } else {
            None
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            auto_advance: default_auto_advance(),
            auto_advance_secs: default_auto_advance_secs(),
        }
    }
}

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WindowConfig {
    /// Initial window width in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Initial window height in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Navigation timing and gesture settings.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Window settings.
    #[serde(default)]
    pub window: WindowConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_auto_advance() -> Option<bool> {
    Some(DEFAULT_AUTO_ADVANCE_ENABLED)
}

fn default_auto_advance_secs() -> Option<u32> {
    Some(DEFAULT_AUTO_ADVANCE_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some(format!("could not read {}: {}", path.display(), err)),
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
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(config: &Config, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create config dir");
        }
        let content = toml::to_string_pretty(config).expect("failed to serialize config");
        fs::write(path, content).expect("failed to write config");
    }

    #[test]
    fn written_settings_load_back_unchanged() {
        let config = Config {
            navigation: NavigationConfig {
                transition_ms: Some(600),
                swipe_threshold_px: Some(55.0),
                auto_advance: Some(false),
                auto_advance_secs: Some(20),
            },
            window: WindowConfig {
                width: Some(1280),
                height: Some(720),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        write_config(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[navigation\n")
            .expect("failed to write broken config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_section_keeps_defaults_for_missing_keys() {
        let config: Config = toml::from_str("[navigation]\ntransition_ms = 800\n")
            .expect("partial config should parse");
        assert_eq!(config.navigation.transition_ms, Some(800));
        assert_eq!(
            config.navigation.swipe_threshold_px,
            Some(DEFAULT_SWIPE_THRESHOLD_PX)
        );
        assert_eq!(config.navigation.auto_advance, Some(true));
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let nav = NavigationConfig {
            transition_ms: Some(1),
            swipe_threshold_px: Some(10_000.0),
            auto_advance: Some(true),
            auto_advance_secs: Some(0),
        };
        assert_eq!(nav.transition().as_millis(), MIN_TRANSITION_MS);
        assert_eq!(nav.swipe_threshold().value(), MAX_SWIPE_THRESHOLD_PX);
        assert_eq!(
            nav.auto_advance_interval().map(AutoAdvanceInterval::value),
            Some(MIN_AUTO_ADVANCE_SECS)
        );
    }

    #[test]
    fn disabled_auto_advance_has_no_interval() {
        let nav = NavigationConfig {
            auto_advance: Some(false),
            ..NavigationConfig::default()
        };
        assert!(nav.auto_advance_interval().is_none());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[navigation]\nauto_advance = false\n",
        )
        .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config.navigation.auto_advance, Some(false));
        assert_eq!(config.navigation.transition_ms, Some(DEFAULT_TRANSITION_MS));
    }
}
