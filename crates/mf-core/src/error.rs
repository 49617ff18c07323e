//! Unified error type for mediaformat.
//!
//! Only probing and configuration can fail. Classification degrades to
//! pass-through values instead of returning errors.

use std::path::PathBuf;

/// Errors raised while probing a file or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The media file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The prober ran but could not produce a usable analysis.
    #[error("Probe error: {0}")]
    Probe(String),

    /// A required external tool is not installed or not on `PATH`.
    #[error("tool not found: {tool}")]
    ToolNotFound {
        /// Name of the missing tool.
        tool: String,
    },

    /// An external tool (ffprobe) returned an error.
    #[error("Tool error [{tool}]: {message}")]
    Tool {
        /// Name of the tool that failed.
        tool: String,
        /// Human-readable error description.
        message: String,
    },

    /// Tool output could not be parsed.
    #[error("failed to parse {tool} output: {message}")]
    Parse {
        /// Name of the tool whose output was rejected.
        tool: String,
        /// Parser error description.
        message: String,
    },

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Error::NotFound { path: path.into() }
    }

    /// Convenience constructor for [`Error::ToolNotFound`].
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Error::ToolNotFound { tool: tool.into() }
    }

    /// Convenience constructor for [`Error::Tool`].
    pub fn tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Tool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Parse`].
    pub fn parse(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Whether this error means the file itself is missing, as opposed to a
    /// probe that ran and failed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
