//! Multi-step prompts for entering recipe data.

use tracing::info;

use crate::cli::core::CommandError;
use crate::cli::io::Console;
use crate::cli::ui::BACK_KEY;
use crate::errors::{MenuError, StoreError};
use crate::recipes::{validate_name, Ingredient, Recipe, RecipeStore};

pub const SAVE_KEY: &str = "save";
pub const UNDO_KEY: &str = "undo";

const INGREDIENT_PROMPT: &str = "Ingredient (name, quantity[, unit]) or `save`:";
const STEP_PROMPT: &str = "Step, `undo` to drop the last one, or `save`:";

pub fn require_text(input: &str) -> Result<(), MenuError> {
    if input.is_empty() {
        Err(MenuError::Validation("a value is required".into()))
    } else {
        Ok(())
    }
}

/// Prompts until a well-formed ingredient line is entered.
pub fn read_ingredient(console: &mut Console, prompt: &str) -> Result<Ingredient, MenuError> {
    let line = console.user_input(prompt, validate_ingredient)?;
    Ingredient::parse(&line)
}

/// Collects ingredient lines until `save`.
pub fn read_ingredients(console: &mut Console) -> Result<Vec<Ingredient>, MenuError> {
    console
        .user_input_loop(INGREDIENT_PROMPT, SAVE_KEY, validate_ingredient)?
        .iter()
        .map(|line| Ingredient::parse(line))
        .collect()
}

fn validate_ingredient(input: &str) -> Result<(), MenuError> {
    Ingredient::parse(input).map(|_| ())
}

/// Collects steps until `save`; `undo` drops the most recent one.
pub fn read_steps(console: &mut Console) -> Result<Vec<String>, MenuError> {
    let mut steps: Vec<String> = Vec::new();
    loop {
        let input = console.user_input(STEP_PROMPT, require_text)?;
        if input == SAVE_KEY {
            return Ok(steps);
        }
        if input != UNDO_KEY {
            steps.push(input);
            continue;
        }
        match steps.pop() {
            Some(step) => console.info(format!("Removed step {}: {step}", steps.len() + 1))?,
            None => console.warning("There are no steps to remove.")?,
        }
    }
}

/// Walks the user through creating a recipe and stores it. Returns the
/// recipe's index, or `None` when the user cancelled or declined to replace an
/// existing recipe of the same name.
pub fn add_recipe(store: &RecipeStore, console: &mut Console) -> Result<Option<usize>, CommandError> {
    console.section("Add Recipe")?;
    let name = console.user_input("Recipe name (`back` to cancel):", |input| {
        if input == BACK_KEY {
            Ok(())
        } else {
            validate_name(input)
        }
    })?;
    if name == BACK_KEY {
        console.info("Cancelled.")?;
        return Ok(None);
    }

    let mut recipe = Recipe::new(name);
    recipe.ingredients = read_ingredients(console)?;
    recipe.steps = read_steps(console)?;

    let index = match store.insert(recipe.clone(), false) {
        Ok(index) => {
            console.success(format!("Added `{}`.", recipe.name))?;
            index
        }
        Err(StoreError::DuplicateName(name)) => {
            let replace = console.confirm(&format!(
                "`{name}` already exists. Replace its ingredients? (y/n)"
            ))?;
            if !replace {
                console.info("The recipe was not saved.")?;
                return Ok(None);
            }
            let index = store.insert(recipe, true)?;
            console.success(format!("Replaced the ingredients of `{name}`."))?;
            index
        }
        Err(err) => return Err(err.into()),
    };
    info!(index, "recipe added from form");
    Ok(Some(index))
}
