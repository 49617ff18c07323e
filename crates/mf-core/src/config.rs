//! Configuration types.
//!
//! The top-level [`Config`] struct is deserialized from TOML and carries the
//! probe, analysis and logging sections. Every section defaults sensibly so
//! an empty file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub probe: ProbeConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Deserialize a `Config` from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::Config(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None`, the file does not exist, or it fails to parse.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(ref p) = self.probe.ffprobe_path {
            if !p.exists() {
                warnings.push(format!(
                    "probe.ffprobe_path {} does not exist; falling back to PATH",
                    p.display()
                ));
            }
        }

        if self.probe.probe_size == Some(0) {
            warnings.push("probe.probe_size is 0; ffprobe will reject it".into());
        }

        let valid = ["trace", "debug", "info", "warn", "error"];
        if !valid.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            warnings.push(format!(
                "logging.level '{}' is not a recognized level (valid: {})",
                self.logging.level,
                valid.join(", ")
            ));
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Settings for the external prober.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Explicit ffprobe binary; `PATH` is searched when unset or missing.
    pub ffprobe_path: Option<PathBuf>,
    /// Forwarded as `-probesize` (bytes).
    pub probe_size: Option<u64>,
    /// Forwarded as `-analyzeduration` (microseconds).
    pub analyze_duration_us: Option<u64>,
}

/// Batch analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Worker threads for batch analysis. 0 uses the rayon default.
    pub threads: usize,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
        }
    }
}
