//! macOS pbcopy clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

use super::pipe_text;

/// macOS pasteboard copy tool.
pub struct Pbcopy;

impl Pbcopy {
    /// Create a new Pbcopy tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Pbcopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::Pbcopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("pbcopy", &[], text)
    }
}

impl Default for Pbcopy {
    fn default() -> Self {
        Self::new()
    }
}
