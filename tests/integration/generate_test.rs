//! End to end tests for the default (generate) command.

use crate::helpers::{config_dir, run};

#[test]
fn renders_exact_payload_for_two_endpoints() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(
        dir.path(),
        &["AB", "-c", "#FF0000", "-c", "#0000FF", "--no-preview"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "&#FF0000A&#0000FFB\n");
}

#[test]
fn whitespace_passes_through_uncolored() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(
        dir.path(),
        &["A B", "-c", "#FF0000", "-c", "#0000FF", "--no-preview"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "&#FF0000A &#0000FFB\n");
}

#[test]
fn bare_invocation_renders_the_default_text() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(dir.path(), &["--no-preview"]);
    assert_eq!(code, 0);
    // default prefs: default stop pair, &# format, text "hexgrad"
    assert!(stdout.starts_with("&#00FFE0h"));
    assert!(stdout.contains("&#EB00FF"));
}

#[test]
fn style_flags_emit_codes_per_character() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(
        dir.path(),
        &["X", "-c", "#1A2B3C", "-c", "#1A2B3C", "--bold", "--no-preview"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "&#1A2B3C&lX\n");
}

#[test]
fn format_index_selects_a_builtin_template() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(
        dir.path(),
        &["X", "-c", "#1A2B3C", "-c", "#1A2B3C", "-f", "2", "--no-preview"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "<#1A2B3C>X\n");
}

#[test]
fn custom_format_template_is_used() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(
        dir.path(),
        &[
            "Z",
            "-c",
            "#FF00AA",
            "-c",
            "#FF00AA",
            "--custom-format",
            "[COLOR=#$1$2$3$4$5$6]$c[/COLOR]",
            "--no-preview",
        ],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "[COLOR=#FF00AA]Z[/COLOR]\n");
}

#[test]
fn prefix_is_prepended() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(
        dir.path(),
        &[
            "X",
            "-c",
            "#FF0000",
            "-c",
            "#FF0000",
            "--prefix",
            "/nick ",
            "--no-preview",
        ],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "/nick &#FF0000X\n");
}

#[test]
fn preset_flag_uses_builtin_stops() {
    let dir = config_dir();
    let (stdout, _stderr, code) = run(
        dir.path(),
        &["AB", "-p", "Firewatch", "--no-preview"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "&#CB2D3EA&#EF473AB\n");
}

#[test]
fn out_of_range_format_index_fails() {
    let dir = config_dir();
    let (_stdout, stderr, code) = run(dir.path(), &["X", "-f", "99", "--no-preview"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("out of range"));
}

#[test]
fn malformed_color_warns_but_still_renders() {
    let dir = config_dir();
    let (stdout, stderr, code) = run(
        dir.path(),
        &["X", "-c", "oops", "-c", "#FF0000", "--no-preview"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "&#000000X\n");
    assert!(stderr.contains("not a #RRGGBB color"));
}

#[test]
fn long_output_gets_a_length_advisory() {
    let dir = config_dir();
    let text = "a".repeat(40); // 40 visible chars * 9+ chars per fragment
    let (_stdout, stderr, code) = run(
        dir.path(),
        &[&text, "-c", "#FF0000", "-c", "#0000FF", "--no-preview"],
    );
    assert_eq!(code, 0);
    assert!(stderr.contains("may not fit in the chat box"));
}

#[test]
fn save_persists_preferences_for_the_next_run() {
    let dir = config_dir();
    let (first, _stderr, code) = run(
        dir.path(),
        &[
            "hey",
            "-c",
            "#112233",
            "-c",
            "#445566",
            "--save",
            "--no-preview",
        ],
    );
    assert_eq!(code, 0);
    assert!(dir.path().join("config.toml").exists());

    // a bare re-run renders the saved configuration
    let (second, _stderr, code) = run(dir.path(), &["--no-preview"]);
    assert_eq!(code, 0);
    assert_eq!(second, first);
}

#[test]
fn preview_goes_to_stderr_not_stdout() {
    let dir = config_dir();
    let (stdout, stderr, code) = run(dir.path(), &["AB", "-c", "#FF0000", "-c", "#0000FF"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "&#FF0000A&#0000FFB\n");
    // NO_COLOR is set, so the preview is the plain text
    assert!(stderr.contains("AB"));
}
