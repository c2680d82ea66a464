use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;
use crate::utils::{
    paths,
    persistence::{ensure_dir, write_atomic},
};

pub const DEFAULT_NAME_WIDTH: i32 = -10;
pub const DEFAULT_DESCRIPTION_WIDTH: i32 = -30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    pub color: bool,
    pub quiet: bool,
    /// Signed widths: negative values left-justify, positive right-justify.
    pub name_width: i32,
    pub description_width: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            color: false,
            quiet: false,
            name_width: DEFAULT_NAME_WIDTH,
            description_width: DEFAULT_DESCRIPTION_WIDTH,
        }
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    /// Resolves the recipe data file: explicit override, then config, then
    /// `<home>/recipes.json`.
    pub fn data_file(&self, config: &Config, override_path: Option<PathBuf>) -> PathBuf {
        override_path
            .or_else(|| config.data_file.clone())
            .unwrap_or_else(|| paths::recipes_file_in(&self.base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
