//! End to end tests for the config subcommands.

use crate::helpers::{config_dir, run};

#[test]
fn config_path_honors_the_directory_override() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(dir.path(), &["config", "path"]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout.trim(),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn config_show_prints_defaults_when_nothing_is_saved() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(dir.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("formatchar = \"&\""));
    assert!(stdout.contains("#00FFE0"));
}

#[test]
fn config_show_reflects_saved_preferences() {
    let dir = config_dir();
    run(
        dir.path(),
        &["saved text", "-c", "#101010", "-c", "#202020", "--save", "--no-preview"],
    );
    let (stdout, _stderr, code) = run(dir.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("saved text"));
    assert!(stdout.contains("#101010"));
}

#[test]
fn corrupt_config_file_is_reported() {
    let dir = config_dir();
    std::fs::write(dir.path().join("config.toml"), "this is { not toml").unwrap();
    let (_stdout, stderr, code) = run(dir.path(), &["--no-preview"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("preferences"));
}
