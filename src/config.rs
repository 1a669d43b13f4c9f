use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_DIR: &str = ".travel-dash";
const CONFIG_FILE: &str = "config.yaml";

/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "TRAVEL_DASH_CONFIG";
/// Overrides `api_key` from the file
pub const API_KEY_ENV: &str = "TRAVEL_DASH_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// User settings, read from `~/.travel-dash/config.yaml`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub weather_base_url: String,
    pub user_name: String,
    pub starting_balance: i64,
    pub request_timeout_secs: u64,
    pub toast_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::from("YOUR_API_KEY"),
            weather_base_url: String::from("https://api.weatherapi.com"),
            user_name: String::from("Michael"),
            starting_balance: 1000,
            request_timeout_secs: 30,
            toast_timeout_secs: 5,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        let mut config = match default_path() {
            Some(path) => match Self::from_path(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(error = %e, "Using default config");
                    Config::default()
                }
            },
            None => Config::default(),
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.apply_api_key(key);
        }
        config
    }

    /// Read a config file. A missing file is not an error.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
    }

    /// Blank keys are ignored
    pub fn apply_api_key(&mut self, key: String) {
        if !key.trim().is_empty() {
            self.api_key = key;
        }
    }

    /// Zero falls back to the default
    pub fn request_timeout(&self) -> Duration {
        non_zero_secs(self.request_timeout_secs, Config::default().request_timeout_secs)
    }

    /// Zero falls back to the default
    pub fn toast_timeout(&self) -> Duration {
        non_zero_secs(self.toast_timeout_secs, Config::default().toast_timeout_secs)
    }
}

fn non_zero_secs(secs: u64, fallback: u64) -> Duration {
    Duration::from_secs(if secs == 0 { fallback } else { secs })
}

pub fn default_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}
