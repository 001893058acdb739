//! User configuration stored as YAML under the home directory

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_CITIES, DEFAULT_LOG_FILE, DEFAULT_USERS_URL};

const CONFIG_FILE: &str = "config.yaml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL returning the JSON array of users
    pub endpoint: String,
    /// Cities offered by the filter, in display order
    pub cities: Vec<String>,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: String::from(DEFAULT_USERS_URL),
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            log_file: String::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// `~/.user-table/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE)
    }

    /// Load from the default location. Any problem yields defaults plus
    /// the error, so the caller can report it once logging is up.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        match Self::load_from(&Self::default_path()) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    #[cfg(test)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }
}
