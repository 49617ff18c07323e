//! External tool detection.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mf_core::{Error, Result};

/// Availability information for a tool, returned by [`check_tool`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name.
    pub name: String,
    /// Whether the tool was found.
    pub available: bool,
    /// Version string (first line of the version output), if available.
    pub version: Option<String>,
    /// Resolved path to the executable.
    pub path: Option<PathBuf>,
}

/// Check whether a tool is available and report its version.
///
/// ```no_run
/// use mf_probe::check_tool;
///
/// let info = check_tool("ffprobe", None);
/// if info.available {
///     println!("ffprobe version: {:?}", info.version);
/// }
/// ```
pub fn check_tool(name: &str, configured: Option<&Path>) -> ToolInfo {
    match resolve_tool(name, configured) {
        Ok(path) => ToolInfo {
            name: name.to_string(),
            available: true,
            version: detect_version(name, &path),
            path: Some(path),
        },
        Err(_) => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}

/// Require that a tool is on `PATH`, returning its location.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Resolve a tool, preferring a configured path when it exists and falling
/// back to a `PATH` lookup otherwise.
pub fn resolve_tool(name: &str, configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::debug!(
            tool = name,
            path = %path.display(),
            "configured tool path missing, searching PATH"
        );
    }

    require_tool(name)
}

/// Run `<tool> -version` (or `--version`) and return the first line of stdout.
fn detect_version(name: &str, path: &Path) -> Option<String> {
    let version_arg = match name {
        "ffmpeg" | "ffprobe" => "-version",
        _ => "--version",
    };

    let output = std::process::Command::new(path)
        .arg(version_arg)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.to_string())
}
