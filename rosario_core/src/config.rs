//! Configuration file support for rosario.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/rosario/config.toml`.

use crate::{Error, MysterySet, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub texts: TextsConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Session behavior configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pin every session to one mystery set instead of following the
    /// weekday schedule.
    #[serde(default)]
    pub default_mystery: Option<MysterySet>,

    /// Print a cue line when navigation crosses a bead boundary.
    #[serde(default = "default_bead_cues")]
    pub bead_cues: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_mystery: None,
            bead_cues: default_bead_cues(),
        }
    }
}

/// Prayer text configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct TextsConfig {
    /// Optional TOML overlay with translated prayers; the bundled English
    /// book is used when absent.
    #[serde(default)]
    pub prayer_book: Option<PathBuf>,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("rosario")
}

fn default_bead_cues() -> bool {
    true
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
        base.join("rosario").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Path of the saved-session file under the data directory.
    pub fn session_path(&self) -> PathBuf {
        self.data.data_dir.join("session.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.session.default_mystery.is_none());
        assert!(config.session.bead_cues);
        assert!(config.texts.prayer_book.is_none());
        assert!(config.data.data_dir.ends_with("rosario"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.session.default_mystery = Some(MysterySet::Luminous);

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            parsed.session.default_mystery,
            Some(MysterySet::Luminous)
        );
        assert_eq!(parsed.session.bead_cues, config.session.bead_cues);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[session]
default_mystery = "sorrowful"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.default_mystery, Some(MysterySet::Sorrowful));
        assert!(config.session.bead_cues); // default
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.session.bead_cues = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.session.bead_cues);
    }
}
