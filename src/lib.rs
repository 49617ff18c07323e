//! Mediaformat - canonical media metadata from probe results
//!
//! Probes media files with an external tool, then classifies codecs, channel
//! layouts, dynamic range and runtime into a [`NormalizedMediaInfo`] record.
//!
//! ```no_run
//! use mediaformat::{Config, MediaAnalyzer};
//! use std::path::Path;
//!
//! let config = Config::load_or_default(None);
//! mediaformat::logging::init(&config.logging);
//!
//! let analyzer = MediaAnalyzer::from_config(&config)?;
//! let path = Path::new("/tv/Show.S01E01.mkv");
//! if let Some(info) = analyzer.analyze(path, Some("Show.S01E01.x264-GRP")) {
//!     println!("{:?} {:?}", info.video_codec, info.audio_codec);
//! }
//! # Ok::<(), mediaformat::Error>(())
//! ```

pub mod analyzer;
pub mod logging;

pub use analyzer::{AnalysisOutcome, AnalysisRequest, MediaAnalyzer};

pub use mf_classify::{
    audio_channels, channel_count, classify_audio, classify_video, dynamic_range,
    dynamic_range_type, resolve_runtime, Classification, DiagnosticSink, FileContext,
    FormatClassifier, MemorySink, TracingSink, UnknownFormat,
};
pub use mf_core::{
    Config, Error, HdrType, NormalizedMediaInfo, ProbeResult, ProbeStream, Result, StreamKind,
    SCHEMA_REVISION,
};
pub use mf_probe::{parse_ffprobe_json, CompositeProber, FfprobeProber, Prober};
