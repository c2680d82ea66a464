use crate::cli::core::{CommandResult, LoopControl};
use crate::cli::io::Console;
use crate::cli::menus::AppContext;
use crate::cli::ui::{back, Command, Menu};
use crate::errors::MenuError;
use crate::recipes::Recipe;

pub struct ViewContext {
    pub recipe: Recipe,
}

pub fn view_menu(app: &AppContext, recipe: Recipe) -> Result<Menu<ViewContext>, MenuError> {
    let columns = app.layout.columns(&[])?;
    let mut menu = Menu::new(format!("Viewing `{}`.", recipe.name), ViewContext { recipe })
        .with_columns(columns)?;
    menu.add_command(Command::new("show", "Show the full recipe", show));
    menu.add_command(Command::new(
        "scale",
        "Show ingredient quantities multiplied by a factor: scale [factor]",
        scale,
    ));
    menu.add_command(Command::new("back", "Return to the recipe list", back));
    Ok(menu)
}

/// Prints the recipe at `index` and opens its view menu.
pub fn run(app: &AppContext, index: usize, console: &mut Console) -> CommandResult {
    let recipe = app.store.get_by_index(index)?;
    console.write_text(&format!("\n{recipe}"))?;
    let mut menu = view_menu(app, recipe)?;
    Ok(menu.run(console)?.into_parent())
}

fn show(menu: &mut Menu<ViewContext>, console: &mut Console, _args: &[&str]) -> CommandResult {
    console.write_text(&format!("\n{}", menu.context.recipe))?;
    Ok(LoopControl::Continue)
}

fn scale(menu: &mut Menu<ViewContext>, console: &mut Console, args: &[&str]) -> CommandResult {
    let factor = match args.get(1) {
        Some(raw) => parse_factor(raw)?,
        None => {
            let raw = console.user_input("Scale factor:", |input| parse_factor(input).map(|_| ()))?;
            parse_factor(&raw)?
        }
    };

    let scaled = menu.context.recipe.scaled(factor)?;
    console.section(format!("{} (x{factor})", scaled.name))?;
    for ingredient in &scaled.ingredients {
        let line = format!("{}: {:.2} {}", ingredient.name, ingredient.quantity, ingredient.unit);
        console.println(line.trim_end())?;
    }
    Ok(LoopControl::Continue)
}

fn parse_factor(raw: &str) -> Result<f64, MenuError> {
    match raw.trim().parse::<f64>() {
        Ok(factor) if factor.is_finite() && factor > 0.0 => Ok(factor),
        _ => Err(MenuError::Validation(format!(
            "scale factor must be a positive number, got `{raw}`"
        ))),
    }
}
