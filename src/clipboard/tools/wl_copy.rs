//! Linux Wayland wl-copy clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

use super::{pipe_text, tool_exists};

/// Linux Wayland clipboard tool using wl-copy.
pub struct WlCopy;

impl WlCopy {
    /// Create a new WlCopy tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for WlCopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::WlCopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("wl-copy")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("wl-copy", &[], text)
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}
