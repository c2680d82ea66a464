use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::errors::StoreError;
use crate::recipes::Recipe;
use crate::utils::persistence::{ensure_dir, write_atomic};

pub type Result<T> = std::result::Result<T, StoreError>;

/// File-backed recipe collection. Every mutating call re-reads the whole file,
/// edits it in memory, and rewrites it. There is no locking: a concurrent
/// writer between the read and the write is not detected and the last writer
/// wins.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Makes sure the parent directory exists and writes an empty collection
    /// when the file is missing, or unconditionally when `overwrite` is set.
    pub fn initialize(&self, overwrite: bool) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        if overwrite || !self.path.exists() {
            debug!(path = %self.path.display(), overwrite, "initializing recipe file");
            self.save_all(&[])?;
        }
        Ok(())
    }

    /// Drops every stored recipe.
    pub fn clear_all(&self) -> Result<()> {
        self.initialize(true)?;
        info!(path = %self.path.display(), "cleared all recipes");
        Ok(())
    }

    pub fn load_all(&self) -> Result<Vec<Recipe>> {
        debug!(path = %self.path.display(), "loading recipes");
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save_all(&self, recipes: &[Recipe]) -> Result<()> {
        let json = serde_json::to_string_pretty(recipes)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), count = recipes.len(), "saved recipes");
        Ok(())
    }

    pub fn get_by_index(&self, index: usize) -> Result<Recipe> {
        let mut recipes = self.load_all()?;
        check_index(index, &recipes)?;
        Ok(recipes.swap_remove(index))
    }

    pub fn delete_by_index(&self, index: usize) -> Result<Recipe> {
        let mut recipes = self.load_all()?;
        check_index(index, &recipes)?;
        let removed = recipes.remove(index);
        self.save_all(&recipes)?;
        info!(name = %removed.name, index, "deleted recipe");
        Ok(removed)
    }

    pub fn replace_by_index(&self, index: usize, recipe: Recipe) -> Result<()> {
        let mut recipes = self.load_all()?;
        check_index(index, &recipes)?;
        info!(name = %recipe.name, index, "replaced recipe");
        recipes[index] = recipe;
        self.save_all(&recipes)
    }

    /// Adds `recipe`, or when a recipe with the same name exists, either fails
    /// with [`StoreError::DuplicateName`] or (with `overwrite`) replaces that
    /// recipe's ingredients in place. Returns the recipe's index.
    pub fn insert(&self, recipe: Recipe, overwrite: bool) -> Result<usize> {
        let mut recipes = self.load_all()?;
        let index = match recipes.iter().position(|existing| existing.name == recipe.name) {
            Some(_) if !overwrite => return Err(StoreError::DuplicateName(recipe.name)),
            Some(index) => {
                recipes[index].ingredients = recipe.ingredients;
                info!(name = %recipes[index].name, index, "overwrote recipe ingredients");
                index
            }
            None => {
                info!(name = %recipe.name, "added recipe");
                recipes.push(recipe);
                recipes.len() - 1
            }
        };
        self.save_all(&recipes)?;
        Ok(index)
    }
}

fn check_index(index: usize, recipes: &[Recipe]) -> Result<()> {
    if index < recipes.len() {
        Ok(())
    } else {
        Err(StoreError::IndexOutOfRange {
            index,
            len: recipes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::Ingredient;
    use tempfile::tempdir;

    fn recipe(name: &str) -> Recipe {
        let mut recipe = Recipe::new(name);
        recipe.ingredients.push(Ingredient::new("Water", 1.0, "cup"));
        recipe
    }

    #[test]
    fn initialize_writes_empty_array_only_when_missing() {
        let temp = tempdir().unwrap();
        let store = RecipeStore::new(temp.path().join("data").join("recipes.json"));

        store.initialize(false).unwrap();
        assert!(store.load_all().unwrap().is_empty());

        store.insert(recipe("Soup"), false).unwrap();
        store.initialize(false).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);

        store.clear_all().unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_failure() {
        let temp = tempdir().unwrap();
        let store = RecipeStore::new(temp.path().join("absent.json"));
        assert!(matches!(store.load_all(), Err(StoreError::Io(_))));
    }

    #[test]
    fn malformed_file_is_a_serde_failure() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("recipes.json");
        fs::write(&path, "{ not json").unwrap();
        let store = RecipeStore::new(path);
        assert!(matches!(store.load_all(), Err(StoreError::Serde(_))));
    }

    #[test]
    fn indexed_operations_bound_check() {
        let temp = tempdir().unwrap();
        let store = RecipeStore::new(temp.path().join("recipes.json"));
        store.initialize(false).unwrap();
        store.insert(recipe("Soup"), false).unwrap();

        assert!(matches!(
            store.get_by_index(1),
            Err(StoreError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(store.delete_by_index(3).is_err());
        assert!(store.replace_by_index(1, recipe("Stew")).is_err());
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn insert_returns_position() {
        let temp = tempdir().unwrap();
        let store = RecipeStore::new(temp.path().join("recipes.json"));
        store.initialize(false).unwrap();

        assert_eq!(store.insert(recipe("Soup"), false).unwrap(), 0);
        assert_eq!(store.insert(recipe("Stew"), false).unwrap(), 1);
        assert_eq!(store.insert(recipe("Soup"), true).unwrap(), 0);
    }
}
