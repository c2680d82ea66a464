mod common;

use common::{recipe, setup_test_env};
use recipe_box::cli::{
    core::LoopControl,
    io::Console,
    menus::{main_menu, AppContext},
    run_session,
    ui::MenuLoop,
};

fn run_script(app: AppContext, script: &str) -> String {
    let mut console = Console::scripted(script);
    run_session(app, &mut console).expect("session runs");
    console.transcript()
}

#[test]
fn add_then_view_and_scale() {
    let (app, _) = setup_test_env();
    let store = app.store.clone();
    let script = "add\nSoup\nWater, 2, cup\nsave\nBoil\nsave\nview\n1\nscale 3\nback\nback\nexit\n";

    let transcript = run_script(app, script);

    assert_eq!(store.load_all().unwrap(), vec![recipe("Soup", &[("Water", 2.0, "cup")], &["Boil"])]);
    assert!(transcript.contains("OK: Added `Soup`."));
    assert!(transcript.contains("Recipe: Soup"));
    assert!(transcript.contains("Water: 6.00 cup"));
    assert!(transcript.trim_end().ends_with("Goodbye."));
}

#[test]
fn numbers_and_keys_select_the_same_commands() {
    let (app, _) = setup_test_env();
    app.store.insert(recipe("Soup", &[("Water", 2.0, "cup")], &[]), false).unwrap();
    let store = app.store.clone();

    run_script(app, "4\n1\ny\nback\n7\n");
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn invalid_selections_reprompt_without_leaving_the_menu() {
    let (app, _) = setup_test_env();
    let transcript = run_script(app, "0\n42\nveiw\nexit\n");

    assert!(transcript.contains("ERROR: option 0 is outside the valid range 1-7"));
    assert!(transcript.contains("ERROR: option 42 is outside the valid range 1-7"));
    assert!(transcript.contains("did you mean `view`?"));
    assert!(transcript.contains("Goodbye."));
}

#[test]
fn exit_unwinds_from_a_nested_menu() {
    let (app, _) = setup_test_env();
    app.store.insert(recipe("Soup", &[("Water", 2.0, "cup")], &["Boil"]), false).unwrap();
    let mut menu = main_menu(app).unwrap();

    // The view menu has no `exit` key, so typing it there is rejected; going
    // back twice then exiting from the main menu ends the session.
    let mut console = Console::scripted("view\n1\nexit\nback\nback\nexit\n");
    assert_eq!(MenuLoop::run(&mut menu, &mut console).unwrap(), LoopControl::Exit);
    assert!(console.transcript().contains("not a valid command: `exit`"));
}

#[test]
fn edit_flow_saves_changes() {
    let (app, _) = setup_test_env();
    app.store.insert(recipe("Soup", &[("Water", 2.0, "cup")], &["Boil"]), false).unwrap();
    let store = app.store.clone();

    run_script(app, "edit\n1\nadd\nSalt, 1, tsp\nstep\nServe hot\nsave\nback\nexit\n");

    let saved = store.get_by_index(0).unwrap();
    assert_eq!(saved.ingredients.len(), 2);
    assert_eq!(saved.steps, vec!["Boil".to_string(), "Serve hot".to_string()]);
}

#[test]
fn duplicate_add_prompts_for_overwrite() {
    let (app, _) = setup_test_env();
    app.store.insert(recipe("Soup", &[("Water", 2.0, "cup")], &["Boil"]), false).unwrap();
    let store = app.store.clone();

    let transcript = run_script(app, "add\nSoup\nMilk, 1, cup\nsave\nsave\ny\nexit\n");

    assert!(transcript.contains("`Soup` already exists"));
    let recipes = store.load_all().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].ingredients[0].name, "Milk");
}

#[test]
fn end_of_input_counts_as_exit() {
    let (app, _) = setup_test_env();
    let transcript = run_script(app, "view\n");

    assert!(transcript.contains("There are no recipes yet."));
    assert!(transcript.trim_end().ends_with("Goodbye."));
}

#[test]
fn about_page_is_reachable_and_returns() {
    let (app, _) = setup_test_env();
    let transcript = run_script(app, "about\nback\nexit\n");

    assert!(transcript.contains(&format!("Recipe Box {}", env!("CARGO_PKG_VERSION"))));
    assert!(transcript.contains("Goodbye."));
}
