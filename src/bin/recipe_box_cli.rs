use std::{env, path::PathBuf, process};

use recipe_box::{cli::run_cli, init, utils::build_info};

fn main() {
    init();

    let mut args = env::args_os().skip(1);
    let data_file = args.next().map(PathBuf::from);
    match data_file.as_ref().and_then(|path| path.to_str()) {
        Some("-h" | "--help") => {
            print_usage();
            return;
        }
        Some("-V" | "--version") => {
            println!("recipe_box_cli {}", build_info::current().version);
            return;
        }
        _ => {}
    }

    if let Err(err) = run_cli(data_file) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: recipe_box_cli [DATA_FILE]");
    println!();
    println!("Interactive recipe manager. Recipes are stored as JSON in DATA_FILE,");
    println!("or in the configured location (default: $RECIPE_BOX_HOME/recipes.json).");
}
