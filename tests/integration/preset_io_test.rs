//! End to end tests for preset import/export.

use std::fs;
use std::io::Write;
use std::process::Stdio;

use crate::helpers::{config_dir, hexgrad, run};

#[test]
fn export_prints_a_versioned_json_preset() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(dir.path(), &["export"]);
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("export is valid JSON");
    assert_eq!(value["preset_version"], 1);
    assert_eq!(value["formatchar"], "&");
    assert!(value["colors"].is_array());
}

#[test]
fn import_then_generate_uses_the_imported_preset() {
    let dir = config_dir();
    let preset = r##"{"text":"Hi","colors":["#000000","#FFFFFF"],"bold":true}"##;

    let (_stdout, stderr, code) = run(dir.path(), &["import", preset]);
    assert_eq!(code, 0);
    assert!(stderr.contains("Preset imported"));

    let (stdout, _stderr, code) = run(dir.path(), &["--no-preview"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "&#000000&lH&#FFFFFF&li\n");
}

#[test]
fn import_reads_from_stdin_when_no_argument() {
    let dir = config_dir();
    let mut child = hexgrad(dir.path())
        .arg("import")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn hexgrad");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(br#"{"text":"stdin"}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let (stdout, _stderr, _code) = run(dir.path(), &["config", "show"]);
    assert!(stdout.contains("stdin"));
}

#[test]
fn invalid_preset_is_rejected_with_a_distinct_error() {
    let dir = config_dir();
    let (_stdout, stderr, code) = run(dir.path(), &["import", "definitely not json"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid preset"));
}

#[test]
fn invalid_preset_leaves_saved_state_untouched() {
    let dir = config_dir();

    // save a known-good configuration first
    let (_stdout, _stderr, code) = run(
        dir.path(),
        &["keep", "-c", "#112233", "-c", "#445566", "--save", "--no-preview"],
    );
    assert_eq!(code, 0);
    let before = fs::read_to_string(dir.path().join("config.toml")).unwrap();

    let (_stdout, _stderr, code) = run(dir.path(), &["import", "{broken"]);
    assert_ne!(code, 0);

    let after = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert_eq!(after, before);
}

#[test]
fn export_round_trips_through_import() {
    let dir = config_dir();
    let (_stdout, _stderr, code) = run(
        dir.path(),
        &["loop", "-c", "#ABCDEF", "-c", "#012345", "--italic", "--save", "--no-preview"],
    );
    assert_eq!(code, 0);

    let (exported, _stderr, code) = run(dir.path(), &["export"]);
    assert_eq!(code, 0);

    let other = config_dir();
    let (_stdout, _stderr, code) = run(other.path(), &["import", exported.trim()]);
    assert_eq!(code, 0);

    let (a, _, _) = run(dir.path(), &["--no-preview"]);
    let (b, _, _) = run(other.path(), &["--no-preview"]);
    assert_eq!(a, b);
}
