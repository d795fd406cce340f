use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Optional TOML file with `[[notes]]` entries, read once at startup
    #[serde(default)]
    pub notes_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            notes_file: None,
        }
    }
}

/// Easing curve applied to timed transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Constant speed
    Linear,
    /// Quadratic ease-in-out
    #[default]
    EaseInOutQuad,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
}

/// Durations of the screen's timed transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Search activation / cancel ramp
    #[serde(default = "default_activation_duration")]
    pub activation_duration_ms: u64,
    /// Empty state slide-in
    #[serde(default = "default_short_duration")]
    pub empty_state_duration_ms: u64,
    /// FAB keyboard dodge
    #[serde(default = "default_short_duration")]
    pub fab_duration_ms: u64,
    /// List spring-back after an overscroll is released
    #[serde(default = "default_bounce_duration")]
    pub bounce_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            activation_duration_ms: default_activation_duration(),
            empty_state_duration_ms: default_short_duration(),
            fab_duration_ms: default_short_duration(),
            bounce_duration_ms: default_bounce_duration(),
            easing: EasingType::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while anything is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Device-independent pixels per terminal column
    #[serde(default = "default_px_per_col")]
    pub px_per_col: f64,
    /// Device-independent pixels per terminal row
    #[serde(default = "default_px_per_row")]
    pub px_per_row: f64,
    /// Height of the soft keyboard tray shown while the search input is focused
    #[serde(default = "default_keyboard_height")]
    pub keyboard_height_px: f64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            px_per_col: default_px_per_col(),
            px_per_row: default_px_per_row(),
            keyboard_height_px: default_keyboard_height(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme name plus optional per-color overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// `theme = "nord"` or `[ui.theme]` with `name` and optional `colors`
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Table {
                #[serde(default = "default_theme_name")]
                name: String,
                #[serde(default)]
                colors: ThemeColorOverrides,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Name(name) => ThemeConfig {
                name,
                colors: ThemeColorOverrides::default(),
            },
            Repr::Table { name, colors } => ThemeConfig { name, colors },
        })
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides, each a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Screen and header background
    pub primary: Option<String>,
    /// Search container and FAB fill
    pub secondary: Option<String>,
    /// Icons and separators
    pub tertiary: Option<String>,
    /// Note titles and input text
    pub headline: Option<String>,
    /// Descriptions, header title, cancel button
    pub subheadline: Option<String>,
    /// Search bar background
    pub input_background: Option<String>,
    /// Unrevealed part of the search circle
    pub circle: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Scroll the list down
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll the list up (pulls into overscroll at the top)
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Tap the search control
    #[serde(default = "default_key_search")]
    pub search: String,
    /// Cancel search
    #[serde(default = "default_key_cancel")]
    pub cancel: String,
    /// Jump to the top of the list
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to the bottom of the list
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            search: default_key_search(),
            cancel: default_key_cancel(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_search() -> String { "/".to_string() }
fn default_key_cancel() -> String { "<Esc>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notepeek")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_activation_duration() -> u64 {
    400
}

fn default_short_duration() -> u64 {
    200
}

fn default_bounce_duration() -> u64 {
    250
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_px_per_col() -> f64 {
    8.0
}

fn default_px_per_row() -> f64 {
    16.0
}

fn default_keyboard_height() -> f64 {
    96.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when the file is missing
    pub fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/notepeek/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("notepeek")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used by the interactive screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("notepeek.log")
    }

    /// Get the notes file path (with tilde expansion), if configured
    pub fn notes_path(&self) -> Option<PathBuf> {
        self.general.notes_file.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.animation.activation_duration_ms, 400);
        assert_eq!(config.animation.empty_state_duration_ms, 200);
        assert_eq!(config.animation.fab_duration_ms, 200);
        assert_eq!(config.animation.easing, EasingType::EaseInOutQuad);
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.keymap.search, "/");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [animation]
            activation_duration_ms = 300
            easing = "linear"

            [ui]
            theme = "nord"
            "#,
        )
        .unwrap();

        assert_eq!(config.animation.activation_duration_ms, 300);
        assert_eq!(config.animation.fab_duration_ms, 200);
        assert_eq!(config.animation.easing, EasingType::Linear);
        assert_eq!(config.ui.theme.name, "nord");
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_theme_table_with_overrides() {
        let config = AppConfig::from_toml(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { secondary = "#ff0000" }
            "##,
        )
        .unwrap();

        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.secondary.as_deref(), Some("#ff0000"));
        assert!(config.ui.theme.colors.primary.is_none());
    }

    #[test]
    fn test_theme_table_without_name_uses_default() {
        let config = AppConfig::from_toml(
            r##"
            [ui.theme.colors]
            circle = "#101010"
            "##,
        )
        .unwrap();

        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.ui.theme.colors.circle.as_deref(), Some("#101010"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[animation\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("notepeek-missing-config-does-not-exist.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.general.log_level, "info");
    }
}
