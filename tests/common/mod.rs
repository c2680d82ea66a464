#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use recipe_box::{
    cli::menus::{AppContext, Layout},
    config::ConfigManager,
    recipes::{Ingredient, Recipe, RecipeStore},
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an initialized store and config manager backed by a unique directory.
pub fn setup_test_env() -> (AppContext, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    let store = RecipeStore::new(base.join("recipes.json"));
    store.initialize(false).expect("initialize recipe file");

    (AppContext::new(store, Layout::default()), config_manager)
}

pub fn recipe(name: &str, ingredients: &[(&str, f64, &str)], steps: &[&str]) -> Recipe {
    let mut recipe = Recipe::new(name);
    recipe.ingredients = ingredients
        .iter()
        .map(|(name, quantity, unit)| Ingredient::new(*name, *quantity, *unit))
        .collect();
    recipe.steps = steps.iter().map(|step| step.to_string()).collect();
    recipe
}
