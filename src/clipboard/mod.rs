//! Clipboard access for the generated payload.
//!
//! Copying goes through a small [`CopyTool`] trait with one implementation
//! per OS tool (pbcopy, xclip, xsel, wl-copy), tried in priority order. Only
//! text copy is supported; the payload never touches the filesystem.

mod copy;
mod error;
mod result;
mod tool;
mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};
