//! The render boundary: preferences in, chat payload + preview out.
//!
//! One call is one render pass: decode the stop colors, build a fresh
//! interpolator sized to the visible character count, then walk the text
//! emitting one formatted fragment per visible character. Whitespace is
//! passed through verbatim and never consumes an interpolator step.

use tracing::debug;

use crate::color::Rgb;
use crate::format::{Template, TemplateError};
use crate::gradient::Gradient;
use crate::prefs::Preferences;

/// One character of the live preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewChar {
    pub ch: char,
    /// 6-digit hex color; `None` for whitespace.
    pub hex: Option<String>,
}

/// The result of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The chat-ready payload, prefix included.
    pub payload: String,
    /// Per-character colors for preview display.
    pub preview: Vec<PreviewChar>,
}

/// Render `prefs` into a payload and preview.
///
/// Empty or all-whitespace text falls back to the default text, so the
/// interpolator always has at least one step.
pub fn render(prefs: &Preferences) -> Result<Rendered, TemplateError> {
    let template = Template::parse(&prefs.format)?;

    let text = if prefs.text.trim().is_empty() {
        Preferences::DEFAULT_TEXT
    } else {
        &prefs.text
    };

    let stops: Vec<Rgb> = prefs.colors.iter().map(|c| Rgb::from_hex(c)).collect();
    let steps = text.chars().filter(|c| !c.is_whitespace()).count();
    let mut gradient = Gradient::new(stops, steps);
    debug!(steps, stops = prefs.colors.len(), "render pass");

    let mut payload = prefs.prefix.clone();
    let mut preview = Vec::with_capacity(text.chars().count());

    for ch in text.chars() {
        if ch.is_whitespace() {
            payload.push(ch);
            preview.push(PreviewChar { ch, hex: None });
            continue;
        }

        // The gradient yields exactly `steps` colors, one per visible char.
        let hex = gradient
            .next()
            .unwrap_or(crate::gradient::DEFAULT_STOPS[0])
            .to_hex();
        payload.push_str(&template.render(&hex, &prefs.styles, &prefs.formatchar, ch));
        preview.push(PreviewChar { ch, hex: Some(hex) });
    }

    Ok(Rendered { payload, preview })
}
