//! Linux xclip clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

use super::{pipe_text, tool_exists};

/// Linux X11 clipboard tool using xclip.
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Xclip {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("xclip")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("xclip", &["-selection", "clipboard"], text)
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
