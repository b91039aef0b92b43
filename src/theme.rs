//! ANSI styling for CLI output.
//!
//! Centralizes the colors used for status messages plus the truecolor and
//! attribute escapes that back the gradient preview. Color output is skipped
//! when the stream being written to is not a terminal or `NO_COLOR` is set,
//! so themes are constructed per stream: [`Theme::for_stdout`] for payload-
//! adjacent listings, [`Theme::for_stderr`] for the preview and notices.

use crate::color::Rgb;
use crate::format::StyleFlags;
use crate::notify::{Level, Notice};

/// ANSI escape codes used for CLI output.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const GRAY: &str = "\x1b[37m";
    pub const DARK_GRAY: &str = "\x1b[90m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const BOLD: &str = "\x1b[1m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const UNDERLINE: &str = "\x1b[4m";
    pub const STRIKETHROUGH: &str = "\x1b[9m";
}

/// Colors for the different kinds of CLI messages.
#[derive(Debug, Clone)]
pub struct Theme {
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    /// When false all helpers return the text unstyled.
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_stdout()
    }
}

impl Theme {
    fn with_enabled(enabled: bool) -> Self {
        Self {
            text_primary: ansi::GRAY,
            text_secondary: ansi::DARK_GRAY,
            success: ansi::GREEN,
            warning: ansi::YELLOW,
            error: ansi::RED,
            enabled,
        }
    }

    /// Theme for output written to stdout.
    pub fn for_stdout() -> Self {
        Self::with_enabled(color_enabled(atty::Stream::Stdout))
    }

    /// Theme for output written to stderr (the preview and notices).
    pub fn for_stderr() -> Self {
        Self::with_enabled(color_enabled(atty::Stream::Stderr))
    }

    /// Theme with styling unconditionally off (piped output, tests).
    pub fn plain() -> Self {
        Self::with_enabled(false)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Render a notice with its level color.
    pub fn notice_text(&self, notice: &Notice) -> String {
        match notice.level {
            Level::Info => self.primary_text(&notice.text),
            Level::Success => self.success_text(&notice.text),
            Level::Warning => self.warning_text(&notice.text),
            Level::Error => self.error_text(&notice.text),
        }
    }

    /// One preview character painted in its gradient color and styles.
    pub fn preview_char(&self, ch: char, color: Rgb, styles: &StyleFlags) -> String {
        if !self.enabled {
            return ch.to_string();
        }
        let mut out = format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
        for (on, code) in [
            (styles.bold, ansi::BOLD),
            (styles.italic, ansi::ITALIC),
            (styles.underline, ansi::UNDERLINE),
            (styles.strikethrough, ansi::STRIKETHROUGH),
        ] {
            if on {
                out.push_str(code);
            }
        }
        out.push(ch);
        out.push_str(ansi::RESET);
        out
    }
}

/// Whether color output should be used on `stream`.
fn color_enabled(stream: atty::Stream) -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(stream)
}
