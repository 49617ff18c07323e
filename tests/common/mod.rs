//! Shared fixtures for integration tests.
//!
//! Provides [`StaticProber`], a [`Prober`] answering from a fixed table of
//! probe records, and a few representative records.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mediaformat::{
    Error, FormatClassifier, MediaAnalyzer, MemorySink, ProbeResult, ProbeStream, Prober, Result,
    StreamKind,
};

/// Prober returning canned records; unknown paths are `NotFound`.
#[derive(Default)]
pub struct StaticProber {
    records: HashMap<PathBuf, ProbeResult>,
    broken: HashMap<PathBuf, String>,
    calls: AtomicUsize,
}

impl StaticProber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record under its own path.
    pub fn with(mut self, record: ProbeResult) -> Self {
        self.records.insert(record.path.clone(), record);
        self
    }

    /// Make probing `path` fail with a tool error.
    pub fn broken(mut self, path: impl Into<PathBuf>, message: &str) -> Self {
        self.broken.insert(path.into(), message.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Prober for StaticProber {
    fn name(&self) -> &'static str {
        "static"
    }

    fn probe(&self, path: &Path) -> Result<ProbeResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.broken.get(path) {
            return Err(Error::tool("ffprobe", message.clone()));
        }
        self.records
            .get(path)
            .cloned()
            .ok_or_else(|| Error::not_found(path))
    }

    fn supports(&self, _path: &Path) -> bool {
        true
    }
}

/// Analyzer over `prober` recording diagnostics in the returned sink.
pub fn analyzer(prober: StaticProber) -> (MediaAnalyzer, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let analyzer = MediaAnalyzer::new(Arc::new(prober), FormatClassifier::new(sink.clone()));
    (analyzer, sink)
}

pub fn video(codec: &str) -> ProbeStream {
    ProbeStream {
        kind: StreamKind::Video,
        codec_name: Some(codec.into()),
        bit_depth: Some(8),
        width: Some(1920),
        height: Some(1080),
        frame_rate: Some(23.976),
        ..Default::default()
    }
}

pub fn audio(codec: &str, language: &str) -> ProbeStream {
    ProbeStream {
        kind: StreamKind::Audio,
        codec_name: Some(codec.into()),
        channels: Some(2),
        language: Some(language.into()),
        ..Default::default()
    }
}

pub fn subtitle(language: &str) -> ProbeStream {
    ProbeStream {
        kind: StreamKind::Subtitle,
        codec_name: Some("subrip".into()),
        language: Some(language.into()),
        ..Default::default()
    }
}

/// 1080p H.264 episode with stereo AAC.
pub fn episode(path: &str) -> ProbeResult {
    ProbeResult {
        path: PathBuf::from(path),
        format_name: "matroska,webm".into(),
        duration: Duration::from_secs(1320),
        bit_rate: Some(4_500_000),
        size: Some(750_000_000),
        streams: vec![
            ProbeStream {
                index: 0,
                duration: Some(Duration::from_secs(1321)),
                ..video("h264")
            },
            ProbeStream {
                index: 1,
                bit_rate: Some(192_000),
                channel_layout: Some("stereo".into()),
                ..audio("aac", "eng")
            },
            ProbeStream {
                index: 2,
                ..subtitle("eng")
            },
        ],
    }
}

/// 2160p Dolby Vision movie with TrueHD Atmos.
pub fn dv_movie(path: &str) -> ProbeResult {
    ProbeResult {
        path: PathBuf::from(path),
        format_name: "matroska,webm".into(),
        duration: Duration::from_secs(8130),
        bit_rate: Some(58_000_000),
        size: Some(59_000_000_000),
        streams: vec![
            ProbeStream {
                index: 0,
                codec_tag: Some("dvh1".into()),
                bit_depth: Some(10),
                width: Some(3840),
                height: Some(2160),
                color_primaries: Some("bt2020".into()),
                color_transfer: Some("smpte2084".into()),
                side_data: vec!["DOVI configuration record".into()],
                dv_bl_compatibility_id: Some(1),
                ..video("hevc")
            },
            ProbeStream {
                index: 1,
                codec_tag: Some("thd+".into()),
                channels: Some(8),
                channel_layout: Some("7.1".into()),
                ..audio("truehd", "eng")
            },
            ProbeStream {
                index: 2,
                profile: Some("DTS-HD MA".into()),
                channels: Some(6),
                channel_layout: Some("5.1(side)".into()),
                ..audio("dts", "fre")
            },
            subtitle("eng"),
            subtitle("fre"),
            subtitle("eng"),
        ],
    }
}
