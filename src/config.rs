use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE: &str = "https://2dtu2xkiw7.execute-api.us-east-1.amazonaws.com/dev";
pub const API_BASE_ENV: &str = "EVENTBOARD_API_BASE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Settings {
    pub fn path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("eventboard.toml"))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = toml::from_str(text)?;
        if settings.base_url.trim().is_empty() {
            settings.base_url = DEFAULT_API_BASE.to_string();
        }
        Ok(settings)
    }

    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings file if readable, otherwise defaults (written back so the user
    /// has something to edit). The environment variable wins over both.
    pub fn load() -> Self {
        let mut settings = match Self::path() {
            Some(path) => Self::load_or_init(&path),
            None => Self::default(),
        };
        settings.apply_env_override(std::env::var(API_BASE_ENV).ok());
        settings
    }

    pub fn load_or_init(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                if path.exists() {
                    log::warn!("Ignoring unreadable settings: {}", e);
                    return Self::default();
                }
                let settings = Self::default();
                if let Err(e) = settings.write_to(path) {
                    log::warn!("Failed to save default settings: {}", e);
                }
                settings
            }
        }
    }

    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.base_url = url;
        }
    }
}
