use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

pub const HOME_ENV: &str = "RECIPE_BOX_HOME";

const DEFAULT_DIR_NAME: &str = ".recipe_box";
const RECIPES_FILE: &str = "recipes.json";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.recipe_box`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn recipes_file_in(base: &Path) -> PathBuf {
    base.join(RECIPES_FILE)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
