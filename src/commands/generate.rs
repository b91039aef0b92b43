//! The default command: render the gradient payload.

use anyhow::{bail, Context, Result};

use hexgrad::cli::GenerateArgs;
use hexgrad::clipboard::Copy;
use hexgrad::color::{is_valid_hex, Rgb};
use hexgrad::config;
use hexgrad::notify::{Notice, NoticeQueue};
use hexgrad::prefs::Preferences;
use hexgrad::presets;
use hexgrad::render;
use hexgrad::theme::Theme;

/// Payload lengths above this may not fit in a chat box.
const CHAT_LENGTH_ADVISORY: usize = 256;

pub fn handle(args: GenerateArgs) -> Result<()> {
    // preview and notices go to stderr, so gate colors on that stream
    let theme = Theme::for_stderr();
    let mut notices = NoticeQueue::new();

    let saved = config::load().context("Failed to load saved preferences")?;
    let prefs = apply_args(saved, &args, &mut notices)?;

    let rendered = render::render(&prefs).context("Failed to render gradient")?;

    println!("{}", rendered.payload);

    if rendered.payload.chars().count() > CHAT_LENGTH_ADVISORY {
        notices.push(Notice::warning(format!(
            "Output is over {} characters and may not fit in the chat box",
            CHAT_LENGTH_ADVISORY
        )));
    }

    if !args.no_preview {
        eprintln!("{}", preview_line(&theme, &prefs, &rendered));
    }

    if args.copy {
        let result = Copy::new()
            .text(&rendered.payload)
            .context("Failed to copy to clipboard")?;
        notices.push(Notice::success(result.message()));
    }

    if args.save {
        config::save(&prefs).context("Failed to save preferences")?;
        notices.push(Notice::success("Preferences saved"));
    }

    super::flush_notices(&theme, &mut notices);
    Ok(())
}

/// Merge CLI arguments over the saved preferences.
///
/// Unset options keep their saved values; style flags are additive toggles
/// (they turn a style on, never off).
fn apply_args(
    saved: Preferences,
    args: &GenerateArgs,
    notices: &mut NoticeQueue,
) -> Result<Preferences> {
    let mut prefs = saved;

    if let Some(text) = &args.text {
        prefs.text = text.clone();
    }

    if let Some(name) = &args.preset {
        let preset = presets::find(name)
            .with_context(|| format!("Unknown preset '{}' (see `hexgrad presets`)", name))?;
        prefs.colors = preset.stops.iter().map(|s| s.to_string()).collect();
    } else if !args.colors.is_empty() {
        prefs.colors = args.colors.clone();
    }

    if args.random_color {
        prefs.colors.push(format!("#{}", Rgb::random().to_hex()));
    }

    for color in &prefs.colors {
        if !is_valid_hex(color) {
            // decoding is best-effort, but a typo is worth flagging
            notices.push(Notice::warning(format!(
                "'{}' is not a #RRGGBB color; malformed channels decode to 00",
                color
            )));
        }
    }

    if let Some(index) = args.format {
        if index == 0 || index > presets::FORMATS.len() {
            bail!(
                "Format index {} out of range (1-{})",
                index,
                presets::FORMATS.len()
            );
        }
        prefs.format = presets::FORMATS[index - 1].to_string();
    } else if let Some(template) = &args.custom_format {
        prefs.format = template.clone();
    }

    if let Some(format_char) = &args.format_char {
        prefs.formatchar = format_char.clone();
    }

    if let Some(prefix) = &args.prefix {
        prefs.prefix = prefix.clone();
    }

    prefs.styles.bold |= args.bold;
    prefs.styles.italic |= args.italic;
    prefs.styles.underline |= args.underline;
    prefs.styles.strikethrough |= args.strikethrough;

    Ok(prefs)
}

/// Build the colored preview line (degrades to plain text when styling is
/// off).
fn preview_line(theme: &Theme, prefs: &Preferences, rendered: &render::Rendered) -> String {
    rendered
        .preview
        .iter()
        .map(|pc| match &pc.hex {
            Some(hex) => theme.preview_char(pc.ch, Rgb::from_hex(hex), &prefs.styles),
            None => pc.ch.to_string(),
        })
        .collect()
}
