//! CLI command handlers.

pub mod completions;
pub mod config;
pub mod generate;
pub mod preset_io;
pub mod presets;

use hexgrad::notify::NoticeQueue;
use hexgrad::theme::Theme;

/// Print and dismiss all pending notices to stderr.
///
/// Notices go to stderr so the payload on stdout stays pipeable.
pub fn flush_notices(theme: &Theme, notices: &mut NoticeQueue) {
    for notice in notices.drain() {
        eprintln!("{}", theme.notice_text(&notice));
    }
}
