//! CLI argument definitions.
//!
//! Lives in the library so `xtask` can build man pages from the same clap
//! command tree the binary uses.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string; dev builds carry the git SHA, release builds only the date.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", ",
    env!("HEXGRAD_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HEXGRAD_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "hexgrad", version = VERSION)]
#[command(about = "Hex gradient text generator for game chat clients")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Generation options (the default command).
    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List built-in color presets and output formats
    Presets,

    /// Export the saved preferences as a JSON preset
    Export {
        /// Copy the preset to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// Import a JSON preset and save it as the current preferences
    Import {
        /// The preset payload; read from stdin when omitted
        json: Option<String>,
    },

    /// Inspect or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the saved configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Open the configuration file in $EDITOR
    Edit,
}

// Options for the default (generate) command. Every option falls back to the
// saved preferences, so `hexgrad` with no arguments re-renders the last
// configuration. (A doc comment here would leak into the top-level help text
// via the flatten.)
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Input text to colorize
    pub text: Option<String>,

    /// Gradient stop color as #RRGGBB (repeat to add stops)
    #[arg(short, long = "color", value_name = "HEX")]
    pub colors: Vec<String>,

    /// Use a named built-in color preset
    #[arg(short, long, value_name = "NAME", conflicts_with = "colors")]
    pub preset: Option<String>,

    /// Append one random stop color
    #[arg(long)]
    pub random_color: bool,

    /// Built-in output format, 1-based index (see `hexgrad presets`)
    #[arg(short, long, value_name = "N")]
    pub format: Option<usize>,

    /// Custom format template using $1-$6, $f and $c placeholders
    #[arg(long, value_name = "TEMPLATE", conflicts_with = "format")]
    pub custom_format: Option<String>,

    /// Format character prefixed to style codes
    #[arg(long, value_name = "CHAR")]
    pub format_char: Option<String>,

    /// Literal prefix prepended to the output (e.g. "/nick ")
    #[arg(long, value_name = "TEXT")]
    pub prefix: Option<String>,

    /// Bold style code
    #[arg(short, long)]
    pub bold: bool,

    /// Italic style code
    #[arg(short, long)]
    pub italic: bool,

    /// Underline style code
    #[arg(short, long)]
    pub underline: bool,

    /// Strikethrough style code
    #[arg(short, long)]
    pub strikethrough: bool,

    /// Copy the payload to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Skip the colored terminal preview
    #[arg(long)]
    pub no_preview: bool,

    /// Save the resulting preferences as the new defaults
    #[arg(long)]
    pub save: bool,
}
