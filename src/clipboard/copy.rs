//! Copy orchestrator for clipboard operations.

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard copies using the available tools.
///
/// Tools are tried in priority order; the first one that is installed and
/// succeeds wins.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Copy text to the clipboard.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => {
                    return Ok(CopyResult {
                        tool: tool.method(),
                        size_bytes: text.len(),
                    });
                }
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(_)) => continue, // Try next tool
            }
        }

        Err(ClipboardError::NoToolAvailable)
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
