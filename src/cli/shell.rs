use std::path::PathBuf;

use tracing::info;

use crate::cli::core::LoopControl;
use crate::cli::io::Console;
use crate::cli::menus::{main_menu, AppContext, Layout};
use crate::cli::output::{set_preferences, OutputPreferences};
use crate::config::ConfigManager;
use crate::errors::CliError;
use crate::recipes::RecipeStore;

/// Loads configuration, prepares the recipe file, and runs the interactive
/// session on stdin/stdout. `data_file` overrides the configured location.
pub fn run_cli(data_file: Option<PathBuf>) -> Result<(), CliError> {
    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    if !manager.path().exists() {
        manager.save(&config)?;
        info!(path = %manager.path().display(), "wrote default configuration");
    }
    set_preferences(OutputPreferences::from(&config));

    let store = RecipeStore::new(manager.data_file(&config, data_file));
    store.initialize(false)?;
    info!(path = %store.path().display(), "recipe store ready");

    let app = AppContext::new(store, Layout::from(&config));
    let mut console = Console::stdio();
    run_session(app, &mut console)
}

/// Runs the main menu until the user exits, goes back from it, or input ends.
pub fn run_session(app: AppContext, console: &mut Console) -> Result<(), CliError> {
    let mut menu = main_menu(app)?;
    let control = menu.run(console)?;
    info!(?control, "session finished");
    if control == LoopControl::Exit {
        console.info("Goodbye.")?;
    }
    Ok(())
}
