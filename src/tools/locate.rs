//! Executable resolution
//!
//! Search order: explicit path argument, then the process PATH, then a fixed
//! relative default matching the layout the tools ship with. A specified but
//! missing explicit path logs a warning and falls through to the next stage.

use crate::error::{AcbripError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Locate an external executable.
///
/// `name` is the bare tool name looked up on PATH; `default_path` is the
/// bundled-layout fallback checked last.
pub fn find_executable(
    name: &str,
    explicit: Option<&Path>,
    default_path: &Path,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(absolute(path));
        }
        warn!(
            "Specified {} path not found: {}",
            name,
            path.display()
        );
    }

    if let Ok(found) = which::which(name) {
        debug!("Found {} on PATH: {}", name, found.display());
        return Ok(found);
    }

    if default_path.is_file() {
        return Ok(absolute(default_path));
    }

    Err(AcbripError::ToolNotFound {
        tool: name.to_string(),
    })
}

/// Absolutize without resolving symlinks; fall back to the path as given
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
