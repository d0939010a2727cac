//! TUI configuration persistence
//!
//! Holds the lock screen PIN, start screen, swipe thresholds and asset
//! locations. Stored as JSON under the user's config directory.

use std::fs;
use std::path::{Path, PathBuf};

use infotainment_core::{Screen, SwipeThresholds, DEFAULT_PIN};
use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "cycle-infotainment";

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Lock screen secret (1-4 digits)
    #[serde(default = "default_pin")]
    pub pin: String,

    /// Screen shown at start-up
    #[serde(default)]
    pub start_screen: Screen,

    /// Event loop tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Rows a drag must travel upwards to count as a swipe up
    #[serde(default = "default_swipe_rows")]
    pub swipe_rows: u16,

    /// Columns a drag must travel sideways to count as a swipe
    #[serde(default = "default_swipe_cols")]
    pub swipe_cols: u16,

    /// Folder scanned for music
    #[serde(default = "default_music_folder")]
    pub music_folder: Option<PathBuf>,

    /// Vehicle model shown by the model viewer
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Background image of the home and lock screens
    #[serde(default = "default_background")]
    pub background_image: PathBuf,

    /// Map centre
    #[serde(default)]
    pub map: MapConfig,

    /// Start with the dark theme
    #[serde(default)]
    pub dark_mode: bool,

    /// Initial battery charge shown by the control center
    #[serde(default = "default_battery_percent")]
    pub battery_percent: i32,
}

/// Map view centre and zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            latitude: 9.9178368,
            longitude: 78.1228236,
            zoom: 10,
        }
    }
}

impl MapConfig {
    /// Web map link for the configured centre
    pub fn url(&self) -> String {
        format!(
            "https://www.google.com/maps/@{},{},{}z",
            self.latitude, self.longitude, self.zoom
        )
    }
}

fn default_pin() -> String {
    DEFAULT_PIN.to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_swipe_rows() -> u16 {
    3
}

fn default_swipe_cols() -> u16 {
    8
}

fn default_music_folder() -> Option<PathBuf> {
    dirs::audio_dir()
}

fn default_model_path() -> PathBuf {
    PathBuf::from("assets/smart-electric-bicycle.glb")
}

fn default_background() -> PathBuf {
    PathBuf::from("assets/home-screen.jpg")
}

fn default_battery_percent() -> i32 {
    85
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            pin: default_pin(),
            start_screen: Screen::Home,
            tick_rate_ms: default_tick_rate_ms(),
            swipe_rows: default_swipe_rows(),
            swipe_cols: default_swipe_cols(),
            music_folder: default_music_folder(),
            model_path: default_model_path(),
            background_image: default_background(),
            map: MapConfig::default(),
            dark_mode: false,
            battery_percent: default_battery_percent(),
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from `path`
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Persist the dark-mode choice without touching any other setting
    ///
    /// The file on disk is re-read and only its `dark_mode` key changes, so
    /// command-line overrides never leak into it. A file that does not parse
    /// as a configuration is left alone.
    pub fn store_dark_mode(path: &Path, dark_mode: bool) -> Result<(), ConfigError> {
        if !path.exists() {
            let config = Self {
                dark_mode,
                ..Self::default()
            };
            return config.save_to(path);
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let mut document: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        TuiConfig::deserialize(&document).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let Some(fields) = document.as_object_mut() else {
            return Err(ConfigError::Parse("expected a JSON object".to_string()));
        };
        fields.insert("dark_mode".to_string(), serde_json::Value::Bool(dark_mode));

        let contents = serde_json::to_string_pretty(&document)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!(dark_mode, "Stored dark mode in {:?}", path);
        Ok(())
    }

    /// Terminal-cell thresholds for swipe detection
    pub fn swipe_thresholds(&self) -> SwipeThresholds {
        SwipeThresholds {
            vertical: i32::from(self.swipe_rows),
            horizontal: i32::from(self.swipe_cols),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Config file is not valid: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.pin, "1234");
        assert_eq!(config.start_screen, Screen::Home);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.map, MapConfig::default());
        assert!(!config.dark_mode);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = TuiConfig {
            pin: "0420".to_string(),
            start_screen: Screen::Lock,
            dark_mode: true,
            ..TuiConfig::default()
        };
        config.save_to(&path).unwrap();

        let parsed = TuiConfig::load_from(&path);
        assert_eq!(parsed.pin, "0420");
        assert_eq!(parsed.start_screen, Screen::Lock);
        assert!(parsed.dark_mode);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "start_screen": "control-center" }"#).unwrap();

        let parsed = TuiConfig::load_from(&path);
        assert_eq!(parsed.start_screen, Screen::ControlCenter);
        assert_eq!(parsed.pin, "1234");
        assert_eq!(parsed.swipe_cols, 8);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let parsed = TuiConfig::load_from(&path);
        assert_eq!(parsed.pin, "1234");
    }

    #[test]
    fn test_store_dark_mode_keeps_other_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "pin": "9876", "start_screen": "lock", "custom": 1 }"#).unwrap();

        TuiConfig::store_dark_mode(&path, true).unwrap();

        let parsed = TuiConfig::load_from(&path);
        assert!(parsed.dark_mode);
        assert_eq!(parsed.pin, "9876");
        assert_eq!(parsed.start_screen, Screen::Lock);
        assert!(fs::read_to_string(&path).unwrap().contains("custom"));
    }

    #[test]
    fn test_store_dark_mode_leaves_malformed_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let original = r#"{ "pin": "9876", "tick_rate_ms": "oops" }"#;
        fs::write(&path, original).unwrap();

        let result = TuiConfig::store_dark_mode(&path, true);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_store_dark_mode_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        TuiConfig::store_dark_mode(&path, true).unwrap();

        let parsed = TuiConfig::load_from(&path);
        assert!(parsed.dark_mode);
        assert_eq!(parsed.start_screen, Screen::Home);
    }

    #[test]
    fn test_map_url() {
        let url = MapConfig::default().url();
        assert_eq!(url, "https://www.google.com/maps/@9.9178368,78.1228236,10z");
    }
}
