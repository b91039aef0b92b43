//! Platform-specific clipboard tools.

mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pbcopy::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
            Box::new(WlCopy::new()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Check if a binary is on PATH.
fn tool_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Spawn `program args...` and pipe `text` into its stdin.
fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} failed", program)))
    }
}
