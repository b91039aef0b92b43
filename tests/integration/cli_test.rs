//! CLI surface tests: help, version, listing, completions.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::config_dir;

fn hexgrad(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("hexgrad").expect("binary exists");
    cmd.env("NO_COLOR", "1").env("HEXGRAD_CONFIG_DIR", dir);
    cmd
}

#[test]
fn help_shows_subcommands() {
    let dir = config_dir();
    hexgrad(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hex gradient text generator"))
        .stdout(predicate::str::contains("presets"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_the_version() {
    let dir = config_dir();
    hexgrad(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hexgrad "));
}

#[test]
fn presets_lists_every_builtin() {
    let dir = config_dir();
    let mut assert = hexgrad(dir.path()).arg("presets").assert().success();
    for name in [
        "Hexgrad", "Rainbow", "Skyline", "Mango", "Vice City", "Dawn", "Rose", "Firewatch",
    ] {
        assert = assert.stdout(predicate::str::contains(name));
    }
    // formats are listed with channel letters instead of digit placeholders
    assert.stdout(predicate::str::contains("&#rrggbb"));
}

#[test]
fn unknown_preset_name_is_an_error() {
    let dir = config_dir();
    hexgrad(dir.path())
        .args(["text", "-p", "NotAPreset", "--no-preview"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset"));
}

#[test]
fn conflicting_color_sources_are_rejected_by_clap() {
    let dir = config_dir();
    hexgrad(dir.path())
        .args(["text", "-p", "Rainbow", "-c", "#FF0000", "--no-preview"])
        .assert()
        .code(2);
}

#[test]
fn completions_emit_a_bash_script() {
    let dir = config_dir();
    hexgrad(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hexgrad"));
}
