//! Edit menu operating on a working copy of one stored recipe.
//!
//! Changes stay in memory until `save` writes the copy back over the stored
//! recipe at the same index.

use std::fmt::Write as _;

use tracing::debug;

use crate::cli::core::{CommandError, CommandResult, LoopControl};
use crate::cli::forms;
use crate::cli::io::Console;
use crate::cli::menus::AppContext;
use crate::cli::ui::{Command, Menu};
use crate::errors::{MenuError, StoreError};
use crate::recipes::{validate_name, Recipe, RecipeStore};

pub struct EditContext {
    pub store: RecipeStore,
    pub index: usize,
    pub recipe: Recipe,
    pub dirty: bool,
}

pub fn edit_menu(app: &AppContext, index: usize) -> Result<Menu<EditContext>, CommandError> {
    let recipe = app.store.get_by_index(index)?;
    let columns = app.layout.columns(&[])?;
    let context = EditContext {
        store: app.store.clone(),
        index,
        recipe,
        dirty: false,
    };
    Ok(Menu::new(String::new(), context)
        .with_columns(columns)?
        .with_refresh(refresh))
}

pub fn run(app: &AppContext, index: usize, console: &mut Console) -> CommandResult {
    let mut menu = edit_menu(app, index)?;
    Ok(menu.run(console)?.into_parent())
}

/// Ingredients come first so that their option numbers match their
/// positions; the named commands follow.
fn refresh(menu: &mut Menu<EditContext>) -> Result<(), CommandError> {
    let context = &menu.context;
    let mut instructions = format!("Editing `{}`", context.recipe.name);
    if context.dirty {
        instructions.push_str(" (unsaved changes)");
    }
    instructions.push_str(". Select an ingredient number to replace it.");
    if !context.recipe.steps.is_empty() {
        instructions.push_str("\nSteps:");
        for (idx, step) in context.recipe.steps.iter().enumerate() {
            let _ = write!(instructions, "\n  {}. {}", idx + 1, step);
        }
    }

    let mut commands: Vec<Command<EditContext>> = context
        .recipe
        .ingredients
        .iter()
        .map(|ingredient| Command::new("", ingredient.to_string(), replace_ingredient))
        .collect();
    commands.push(Command::new("rename", "Change the recipe name", rename));
    commands.push(Command::new("add", "Add an ingredient", add_ingredient));
    commands.push(Command::new("remove", "Remove an ingredient: remove [n]", remove_ingredient));
    commands.push(Command::new("step", "Append a step", add_step));
    commands.push(Command::new("unstep", "Remove a step, the last by default: unstep [n]", remove_step));
    commands.push(Command::new("save", "Save changes and return", save));
    commands.push(Command::new("back", "Return without saving", discard));

    menu.instructions = instructions;
    menu.set_commands(commands);
    Ok(())
}

fn replace_ingredient(menu: &mut Menu<EditContext>, console: &mut Console, args: &[&str]) -> CommandResult {
    let position = menu.selected(args)?.option_number() - 1;
    let current = menu
        .context
        .recipe
        .ingredients
        .get(position)
        .map(ToString::to_string)
        .ok_or_else(|| CommandError::InvalidArguments(format!("no ingredient at {}", position + 1)))?;

    console.info(format!("Replacing `{current}`."))?;
    let ingredient = forms::read_ingredient(console, "Ingredient (name, quantity[, unit]):")?;
    menu.context.recipe.ingredients[position] = ingredient;
    menu.context.dirty = true;
    Ok(LoopControl::Continue)
}

fn rename(menu: &mut Menu<EditContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    let name = console.user_input("New name:", validate_name)?;
    menu.context.recipe.name = name;
    menu.context.dirty = true;
    Ok(LoopControl::Continue)
}

fn add_ingredient(menu: &mut Menu<EditContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    let ingredient = forms::read_ingredient(console, "Ingredient (name, quantity[, unit]):")?;
    menu.context.recipe.ingredients.push(ingredient);
    menu.context.dirty = true;
    Ok(LoopControl::Continue)
}

fn remove_ingredient(menu: &mut Menu<EditContext>, console: &mut Console, args: &[&str]) -> CommandResult {
    let count = menu.context.recipe.ingredients.len();
    let position = match args.get(1) {
        Some(raw) => parse_position(raw, count)?,
        None => {
            if count == 0 {
                return Err(CommandError::InvalidArguments("there are no ingredients to remove".into()));
            }
            let raw = console.user_input("Ingredient number to remove:", |input| {
                parse_position(input, count).map(|_| ())
            })?;
            parse_position(&raw, count)?
        }
    };
    let removed = menu.context.recipe.ingredients.remove(position);
    menu.context.dirty = true;
    console.info(format!("Removed `{removed}`."))?;
    Ok(LoopControl::Continue)
}

fn add_step(menu: &mut Menu<EditContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    let step = console.user_input("Step:", forms::require_text)?;
    menu.context.recipe.steps.push(step);
    menu.context.dirty = true;
    Ok(LoopControl::Continue)
}

fn remove_step(menu: &mut Menu<EditContext>, console: &mut Console, args: &[&str]) -> CommandResult {
    let steps = &mut menu.context.recipe.steps;
    let position = match args.get(1) {
        Some(raw) => parse_position(raw, steps.len())?,
        None if steps.is_empty() => {
            return Err(CommandError::InvalidArguments("there are no steps to remove".into()))
        }
        None => steps.len() - 1,
    };
    let removed = steps.remove(position);
    menu.context.dirty = true;
    console.info(format!("Removed step {}: {removed}", position + 1))?;
    Ok(LoopControl::Continue)
}

/// Writes the working copy back, refusing a name that another stored recipe
/// already uses.
fn save(menu: &mut Menu<EditContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    let context = &mut menu.context;
    let recipes = context.store.load_all()?;
    let collides = recipes
        .iter()
        .enumerate()
        .any(|(idx, other)| idx != context.index && other.name == context.recipe.name);
    if collides {
        return Err(StoreError::DuplicateName(context.recipe.name.clone()).into());
    }

    context.store.replace_by_index(context.index, context.recipe.clone())?;
    context.dirty = false;
    debug!(index = context.index, "edit session saved");
    console.success(format!("Saved `{}`.", context.recipe.name))?;
    Ok(LoopControl::Back)
}

fn discard(menu: &mut Menu<EditContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    if menu.context.dirty && !console.confirm("Discard unsaved changes? (y/n)")? {
        return Ok(LoopControl::Continue);
    }
    Ok(LoopControl::Back)
}

fn parse_position(raw: &str, count: usize) -> Result<usize, MenuError> {
    match raw.trim().parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Ok(number - 1),
        _ if count == 0 => Err(MenuError::Validation("the list is empty".into())),
        _ => Err(MenuError::Validation(format!(
            "enter a number between 1 and {count}, got `{raw}`"
        ))),
    }
}
