//! hexgrad CLI entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use hexgrad::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => commands::generate::handle(cli.generate),
        Some(Commands::Presets) => commands::presets::handle(),
        Some(Commands::Export { copy }) => commands::preset_io::handle_export(copy),
        Some(Commands::Import { json }) => commands::preset_io::handle_import(json),
        Some(Commands::Config { action }) => commands::config::handle(action),
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
