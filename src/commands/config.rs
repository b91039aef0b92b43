//! Config subcommands handler

use anyhow::Result;

use hexgrad::cli::ConfigAction;
use hexgrad::config;
use hexgrad::theme::Theme;

pub fn handle(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => handle_show(),
        ConfigAction::Path => handle_path(),
        ConfigAction::Edit => handle_edit(),
    }
}

/// Show current configuration as TOML.
fn handle_show() -> Result<()> {
    let prefs = config::load()?;
    let toml_str = toml::to_string_pretty(&prefs)?;
    let theme = Theme::default();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the configuration file path.
fn handle_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}

/// Open the configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
fn handle_edit() -> Result<()> {
    let config_path = config::config_path()?;
    let theme = Theme::default();

    // Ensure the file exists before handing it to the editor
    if !config_path.exists() {
        config::save(&hexgrad::Preferences::default())?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}
