use crate::cli::core::{CommandResult, LoopControl};
use crate::cli::forms;
use crate::cli::io::Console;
use crate::cli::menus::recipe_list::{self, ListMode};
use crate::cli::menus::AppContext;
use crate::cli::ui::{exit, open_sub_menu, Command, Menu};
use crate::errors::MenuError;
use crate::utils::build_info;

const INSTRUCTIONS: &str = "Main menu: enter a command name or its number.";

pub fn main_menu(app: AppContext) -> Result<Menu<AppContext>, MenuError> {
    let columns = app.layout.columns(&[])?;
    let mut menu = Menu::new(INSTRUCTIONS, app).with_columns(columns)?;

    menu.add_command(Command::new("add", "Add a new recipe", add_recipe));
    menu.add_command(Command::new("view", "View a recipe", view_recipes));
    menu.add_command(Command::new("edit", "Edit a recipe", edit_recipes));
    menu.add_command(Command::new("del", "Delete a recipe", delete_recipes));
    menu.add_command(Command::new("clear", "Delete every recipe", clear_recipes));
    menu.add_command(
        Command::new("about", "Version and build details", open_sub_menu)
            .with_sub_menu(about_menu()),
    );
    menu.add_command(Command::new("exit", "Exit the program", exit));
    Ok(menu)
}

/// Static page listing the embedded build metadata.
pub fn about_menu() -> Menu<()> {
    let build = build_info::current();
    Menu::new(
        format!(
            "Recipe Box {}\nBuild {} ({}), {} profile, built {}\nEnter `back` to return.",
            build.version, build.git_hash, build.git_status, build.profile, build.timestamp
        ),
        (),
    )
}

fn add_recipe(menu: &mut Menu<AppContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    forms::add_recipe(&menu.context.store, console)?;
    Ok(LoopControl::Continue)
}

fn view_recipes(menu: &mut Menu<AppContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    recipe_list::run(&menu.context, ListMode::View, console)
}

fn edit_recipes(menu: &mut Menu<AppContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    recipe_list::run(&menu.context, ListMode::Edit, console)
}

fn delete_recipes(menu: &mut Menu<AppContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    recipe_list::run(&menu.context, ListMode::Delete, console)
}

fn clear_recipes(menu: &mut Menu<AppContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    let confirmed = console.confirm("Delete every recipe? (y/n)")?
        && console.confirm("This cannot be undone. Are you sure? (y/n)")?;
    if !confirmed {
        console.info("Nothing was deleted.")?;
        return Ok(LoopControl::Continue);
    }
    menu.context.store.clear_all()?;
    console.success("All recipes deleted.")?;
    Ok(LoopControl::Continue)
}
