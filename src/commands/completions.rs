//! `hexgrad completions` - shell completion scripts.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use hexgrad::cli::Cli;

pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
