//! Configuration file support for sikdan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/sikdan/config.toml`.

use crate::allergens::AllergenCode;
use crate::search::DEFAULT_WINDOW_DAYS;
use crate::source::DEFAULT_FETCH_TIMEOUT;
use crate::types::Preferences;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Remote meal page configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl SourceConfig {
    /// Per-request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Food search configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

/// Interest lists as written in the config file
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub favorites: Vec<String>,

    #[serde(default)]
    pub allergy_codes: Vec<u8>,
}

impl PreferencesConfig {
    /// Validate the raw config lists into a `Preferences`.
    ///
    /// Favorites are trimmed and deduplicated keeping their order; allergy
    /// codes outside 1..=19 are dropped.
    pub fn to_preferences(&self) -> Preferences {
        let mut favorites: Vec<String> = Vec::new();
        for entry in &self.favorites {
            let entry = entry.trim();
            if entry.is_empty() || favorites.iter().any(|f| f == entry) {
                continue;
            }
            favorites.push(entry.to_string());
        }

        let mut allergens = std::collections::BTreeSet::new();
        for &code in &self.allergy_codes {
            match AllergenCode::new(code) {
                Some(code) => {
                    allergens.insert(code);
                }
                None => {
                    tracing::warn!("Dropping allergy code {} outside the valid range", code);
                }
            }
        }

        Preferences::new(favorites, allergens)
    }
}

// Default value functions
fn default_url() -> String {
    "https://school.gyo6.net/gokok-hs/ad/fm/foodmenu/selectFoodMenuView.do".into()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_FETCH_TIMEOUT.as_secs()
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("sikdan").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.source.url.contains("school.gyo6.net"));
        assert_eq!(config.source.timeout_seconds, 10);
        assert_eq!(config.search.window_days, 20);
        assert!(config.preferences.favorites.is_empty());
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let toml_str = r#"
[preferences]
favorites = ["귤", "마카롱"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.preferences.favorites, vec!["귤", "마카롱"]);
        assert_eq!(config.search.window_days, 20); // default
        assert_eq!(config.source.timeout_seconds, 10); // default
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.preferences.favorites = vec!["핫초코".into()];
        config.preferences.allergy_codes = vec![1, 5];
        config.search.window_days = 7;

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.preferences.favorites, config.preferences.favorites);
        assert_eq!(
            parsed.preferences.allergy_codes,
            config.preferences.allergy_codes
        );
        assert_eq!(parsed.search.window_days, 7);
    }

    #[test]
    fn test_to_preferences_drops_invalid_codes() {
        let prefs_config = PreferencesConfig {
            favorites: vec![" 귤 ".into(), "귤".into(), "".into()],
            allergy_codes: vec![0, 1, 19, 20],
        };
        let prefs = prefs_config.to_preferences();

        assert_eq!(prefs.favorites, vec!["귤"]);
        let numbers: Vec<u8> = prefs.allergens.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 19]);
    }

    #[test]
    fn test_save_and_load_from_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.preferences.favorites = vec!["귤".into()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.preferences.favorites, vec!["귤"]);
        assert_eq!(loaded.source.url, config.source.url);
    }
}
