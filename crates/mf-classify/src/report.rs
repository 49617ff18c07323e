//! Diagnostic reporting for formats the rule tables do not recognize.
//!
//! The classifier calls through a [`DiagnosticSink`] instead of logging
//! directly, so callers can route events to alerting and tests can assert on
//! them.

use std::path::PathBuf;

use parking_lot::Mutex;
use serde::Serialize;

use mf_core::{ProbeResult, StreamKind};

/// An unrecognized format seen during classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownFormat {
    /// Audio or video.
    pub kind: StreamKind,
    /// Raw format as reported by the prober.
    pub format: String,
    pub codec_tag: String,
    pub profile: String,
    /// Release or file name, when known.
    pub release_name: Option<String>,
    /// Path of the probed file, when known.
    pub path: Option<PathBuf>,
    /// Full probe record for triage.
    pub probe: Option<ProbeResult>,
}

/// Receiver for classification diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per unrecognized audio or video format.
    fn unknown_format(&self, event: &UnknownFormat);
}

/// Emits each event as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unknown_format(&self, event: &UnknownFormat) {
        let probe = event
            .probe
            .as_ref()
            .and_then(|p| serde_json::to_string(p).ok())
            .unwrap_or_default();

        tracing::warn!(
            kind = %event.kind,
            format = %event.format,
            codec_tag = %event.codec_tag,
            profile = %event.profile,
            release_name = event.release_name.as_deref().unwrap_or_default(),
            path = ?event.path,
            probe = %probe,
            "Unknown {} format: '{}'",
            event.kind,
            event.format
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<UnknownFormat>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<UnknownFormat> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn unknown_format(&self, event: &UnknownFormat) {
        self.events.lock().push(event.clone());
    }
}
