//! `hexgrad export` / `hexgrad import` - JSON preset exchange.
//!
//! Import parses into a fresh record before anything is written, so an
//! invalid payload leaves the saved preferences untouched.

use std::io::Read;

use anyhow::{Context, Result};

use hexgrad::clipboard::Copy;
use hexgrad::config;
use hexgrad::notify::{Notice, NoticeQueue};
use hexgrad::prefs::Preferences;
use hexgrad::theme::Theme;

pub fn handle_export(copy: bool) -> Result<()> {
    let theme = Theme::for_stderr();
    let mut notices = NoticeQueue::new();

    let prefs = config::load().context("Failed to load saved preferences")?;
    let json = prefs.to_json()?;

    if copy {
        let result = Copy::new()
            .text(&json)
            .context("Failed to copy preset to clipboard")?;
        notices.push(Notice::success(format!(
            "Exported preset to clipboard via {}",
            result.tool.name()
        )));
    } else {
        println!("{}", json);
    }

    super::flush_notices(&theme, &mut notices);
    Ok(())
}

pub fn handle_import(json: Option<String>) -> Result<()> {
    let theme = Theme::for_stderr();
    let mut notices = NoticeQueue::new();

    let payload = match json {
        Some(payload) => payload,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read preset from stdin")?;
            buf
        }
    };

    // Parse first; nothing is persisted unless the whole payload is valid.
    let prefs = Preferences::from_json(payload.trim())?;
    config::save(&prefs).context("Failed to save imported preferences")?;

    notices.push(Notice::success("Preset imported"));
    super::flush_notices(&theme, &mut notices);
    Ok(())
}
