//! Numbered recipe list shared by the view, edit, and delete flows.

use tracing::info;

use crate::cli::core::{CommandError, CommandResult, LoopControl};
use crate::cli::io::Console;
use crate::cli::menus::{recipe_edit, recipe_view, AppContext};
use crate::cli::ui::{back, ColumnKind, Command, Menu};
use crate::errors::MenuError;
use crate::recipes::RecipeStore;

const COUNT_WIDTH: i32 = 6;

/// What selecting a recipe from the list does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    View,
    Edit,
    Delete,
}

impl ListMode {
    fn instructions(self) -> &'static str {
        match self {
            ListMode::View => "Select a recipe number to view it.",
            ListMode::Edit => "Select a recipe number to edit it.",
            ListMode::Delete => "Select a recipe number to delete it.",
        }
    }
}

pub struct ListContext {
    pub app: AppContext,
    pub mode: ListMode,
}

pub fn list_menu(app: &AppContext, mode: ListMode) -> Result<Menu<ListContext>, MenuError> {
    let columns = app.layout.columns(&[
        (COUNT_WIDTH, ColumnKind::Integer, "Ingr."),
        (COUNT_WIDTH, ColumnKind::Integer, "Steps"),
    ])?;
    let context = ListContext {
        app: app.clone(),
        mode,
    };
    Ok(Menu::new(mode.instructions(), context)
        .with_columns(columns)?
        .with_refresh(refresh))
}

/// Opens the list and returns to the caller once the user goes back.
pub fn run(app: &AppContext, mode: ListMode, console: &mut Console) -> CommandResult {
    if app.store.load_all()?.is_empty() {
        console.info("There are no recipes yet. Use `add` to create one.")?;
        return Ok(LoopControl::Continue);
    }
    let mut menu = list_menu(app, mode)?;
    Ok(menu.run(console)?.into_parent())
}

/// Rebuilds one number-only entry per stored recipe, in store order, so an
/// option number minus one is the recipe's index.
fn refresh(menu: &mut Menu<ListContext>) -> Result<(), CommandError> {
    let recipes = menu.context.app.store.load_all()?;
    let mut commands: Vec<Command<ListContext>> = recipes
        .iter()
        .map(|recipe| {
            Command::new("", recipe.name.clone(), select_recipe).with_columns(vec![
                recipe.ingredients.len().to_string(),
                recipe.steps.len().to_string(),
            ])
        })
        .collect();
    commands.push(Command::new("back", "Return to the main menu", back));
    menu.set_commands(commands);
    Ok(())
}

fn select_recipe(menu: &mut Menu<ListContext>, console: &mut Console, args: &[&str]) -> CommandResult {
    let index = menu.selected(args)?.option_number() - 1;
    let app = &menu.context.app;
    match menu.context.mode {
        ListMode::View => recipe_view::run(app, index, console),
        ListMode::Edit => recipe_edit::run(app, index, console),
        ListMode::Delete => delete_recipe(&app.store, index, console),
    }
}

fn delete_recipe(store: &RecipeStore, index: usize, console: &mut Console) -> CommandResult {
    let recipe = store.get_by_index(index)?;
    if !console.confirm(&format!("Delete `{}`? (y/n)", recipe.name))? {
        console.info("Nothing was deleted.")?;
        return Ok(LoopControl::Continue);
    }
    let removed = store.delete_by_index(index)?;
    info!(name = %removed.name, "recipe deleted from list");
    console.success(format!("Deleted `{}`.", removed.name))?;
    Ok(LoopControl::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::menus::Layout;
    use crate::recipes::{Ingredient, Recipe};
    use tempfile::{tempdir, TempDir};

    fn app_with(names: &[&str]) -> (TempDir, AppContext) {
        let temp = tempdir().unwrap();
        let store = RecipeStore::new(temp.path().join("recipes.json"));
        store.initialize(false).unwrap();
        for name in names {
            let mut recipe = Recipe::new(*name);
            recipe.ingredients.push(Ingredient::new("Water", 1.0, "cup"));
            store.insert(recipe, false).unwrap();
        }
        (temp, AppContext::new(store, Layout::default()))
    }

    #[test]
    fn refresh_lists_recipes_then_back() {
        let (_temp, app) = app_with(&["Soup", "Stew"]);
        let mut menu = list_menu(&app, ListMode::View).unwrap();
        refresh(&mut menu).unwrap();

        let entries: Vec<(&str, &str)> = menu
            .commands()
            .iter()
            .map(|c| (c.name.as_str(), c.description.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![("", "Soup"), ("", "Stew"), ("back", "Return to the main menu")]
        );
        assert_eq!(menu.commands()[1].additional_columns, vec!["1", "0"]);
    }

    #[test]
    fn delete_mode_confirms_and_shifts_the_list() {
        let (_temp, app) = app_with(&["Soup", "Stew", "Salad"]);
        let mut console = Console::scripted("1\nn\n1\ny\nback\n");

        let control = run(&app, ListMode::Delete, &mut console).unwrap();
        assert_eq!(control, LoopControl::Continue);

        let names: Vec<String> = app.store.load_all().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Stew", "Salad"]);
        let transcript = console.transcript();
        assert!(transcript.contains("Nothing was deleted."));
        assert!(transcript.contains("OK: Deleted `Soup`."));
    }

    #[test]
    fn empty_store_skips_the_list() {
        let (_temp, app) = app_with(&[]);
        let mut console = Console::scripted("");
        assert_eq!(run(&app, ListMode::Edit, &mut console).unwrap(), LoopControl::Continue);
        assert!(console.transcript().contains("There are no recipes yet."));
    }
}
