//! `hexgrad presets` - list built-in color presets and output formats.

use anyhow::Result;

use hexgrad::presets::{FORMATS, PRESETS};
use hexgrad::theme::Theme;

pub fn handle() -> Result<()> {
    let theme = Theme::default();

    println!("{}", theme.primary_text("Color presets:"));
    for preset in PRESETS {
        println!(
            "  {:<12} {}",
            theme.primary_text(preset.name),
            theme.secondary_text(&preset.stops.join(" "))
        );
    }

    println!();
    println!("{}", theme.primary_text("Output formats:"));
    for (i, format) in FORMATS.iter().enumerate() {
        println!(
            "  {}  {}",
            theme.primary_text(&format!("{}", i + 1)),
            theme.secondary_text(&readable_format(format))
        );
    }

    Ok(())
}

/// Show a format template with its digit placeholders spelled as channels.
fn readable_format(format: &str) -> String {
    format
        .replace("$1", "r")
        .replace("$2", "r")
        .replace("$3", "g")
        .replace("$4", "g")
        .replace("$5", "b")
        .replace("$6", "b")
        .replace("$f", "")
        .replace("$c", "")
}
