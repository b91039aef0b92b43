//! hexgrad - hex gradient text generator.
//!
//! Turns input text into a color-gradient-coded string for game chat
//! clients: each visible character gets its own hex color, interpolated
//! across an ordered list of stop colors, and is wrapped in a configurable
//! format template (`&#RRGGBB`-style codes, `§x` codes, BBCode, ...).
//!
//! The crate is a library plus a thin CLI binary. The core is fully
//! synchronous and pure:
//!
//! - [`color`] - RGB triple and best-effort hex codec
//! - [`gradient`] - multi-stop piecewise-linear interpolator
//! - [`format`] - format template parser and per-character renderer
//! - [`render`] - the boundary contract: preferences in, payload + preview out
//!
//! Around it sit the collaborators the CLI needs: [`prefs`] (the preference
//! record and JSON preset import/export), [`presets`] (built-in formats and
//! color presets), [`config`] (TOML persistence), [`clipboard`], [`notify`],
//! and [`theme`].

pub mod cli;
pub mod clipboard;
pub mod color;
pub mod config;
pub mod format;
pub mod gradient;
pub mod notify;
pub mod prefs;
pub mod presets;
pub mod render;
pub mod theme;

pub use color::Rgb;
pub use format::{StyleFlags, Template};
pub use gradient::Gradient;
pub use prefs::Preferences;
pub use render::{render, Rendered};
