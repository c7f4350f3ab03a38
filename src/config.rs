// src/config.rs - User configuration loaded from a TOML file

use serde::Deserialize;
use std::path::PathBuf;

/// Editor configuration. All keys are optional; missing ones fall back
/// to the defaults below. `spaces_are_tabs = true` makes the Tab key
/// insert a literal tab character instead of `space_amt` spaces.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub space_amt: usize,
    pub spaces_are_tabs: bool,
    pub show_trails: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            space_amt: 8,
            spaces_are_tabs: false,
            show_trails: false,
        }
    }
}

/// Location of the config file under the user config directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wren").join("config.toml"))
}

impl Config {
    pub fn from_file(path: &PathBuf) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| format!("Invalid config format: {}", e))?;

        Ok(config)
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing. A malformed file is logged and ignored rather than
    /// aborting the session.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config: {}", e);
                Self::default()
            }
        }
    }
}
