use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recipe_box_cli").unwrap();
    cmd.env("RECIPE_BOX_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_adds_recipe_to_default_data_file() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .write_stdin("add\nSoup\nWater, 2, cup\nsave\nBoil\nsave\nexit\n")
        .assert()
        .success()
        .stdout(contains("OK: Added `Soup`."))
        .stdout(contains("Goodbye."));

    let json = std::fs::read_to_string(home.path().join("recipes.json")).unwrap();
    assert!(json.contains("\"Soup\""));
    assert!(json.contains("\"Boil\""));
}

#[test]
fn data_file_argument_overrides_home() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("nested").join("mine.json");

    cli(&home)
        .arg(&data)
        .write_stdin("exit\n")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&data).unwrap().trim(), "[]");
    assert!(!home.path().join("recipes.json").exists());
}

#[test]
fn config_file_supplies_data_location() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("configured.json");
    std::fs::write(
        home.path().join("config.json"),
        format!("{{ \"data_file\": {:?} }}", data.display().to_string()),
    )
    .unwrap();

    cli(&home).write_stdin("").assert().success();
    assert!(data.exists());
}

#[test]
fn corrupt_data_file_is_reported_without_crashing() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("recipes.json"), "not json").unwrap();

    cli(&home)
        .write_stdin("view\nexit\n")
        .assert()
        .success()
        .stdout(contains("ERROR: Serialization error"));
}

#[test]
fn help_flag_prints_usage() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage: recipe_box_cli [DATA_FILE]"));
}

#[test]
fn invalid_utf8_input_is_rejected_and_session_continues() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .write_stdin(&b"\xff\xfe\nexit\n"[..])
        .assert()
        .success()
        .stdout(contains("ERROR: not a valid command"))
        .stdout(contains("Goodbye."));
}

#[test]
fn first_run_writes_default_config() {
    let home = TempDir::new().unwrap();

    cli(&home).write_stdin("exit\n").assert().success();

    let config = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(config.contains("\"name_width\": -10"));
}
