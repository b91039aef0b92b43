//! Build automation tasks for hexgrad.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use hexgrad::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "hexgrad build tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into target/man
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let command = Cli::command();
    let name = command.get_name().to_string();

    let mut buffer = Vec::new();
    clap_mangen::Man::new(command.clone()).render(&mut buffer)?;
    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, &buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());

    // One page per subcommand as well
    for sub in command.get_subcommands() {
        if sub.is_hide_set() {
            continue;
        }
        let mut buffer = Vec::new();
        clap_mangen::Man::new(sub.clone()).render(&mut buffer)?;
        let path = out_dir.join(format!("{}-{}.1", name, sub.get_name()));
        fs::write(&path, &buffer)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
