//! Probe records and the normalized media-info record.
//!
//! [`ProbeResult`] is the already-parsed analysis supplied by a prober. It is
//! read-only input for classification. [`NormalizedMediaInfo`] is the
//! canonical record built from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Revision of the [`NormalizedMediaInfo`] layout. Bump when a field's
/// derivation changes so persisted records can be re-analyzed.
pub const SCHEMA_REVISION: u32 = 1;

// ---------------------------------------------------------------------------
// StreamKind
// ---------------------------------------------------------------------------

/// Kind of elementary stream reported by the prober.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
    #[default]
    Unknown,
}

impl StreamKind {
    /// Map an ffprobe `codec_type` string to a stream kind.
    pub fn from_codec_type(codec_type: &str) -> Self {
        match codec_type {
            "video" => Self::Video,
            "audio" => Self::Audio,
            "subtitle" => Self::Subtitle,
            "data" => Self::Data,
            "attachment" => Self::Attachment,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Subtitle => write!(f, "subtitle"),
            Self::Data => write!(f, "data"),
            Self::Attachment => write!(f, "attachment"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// ProbeStream / ProbeResult
// ---------------------------------------------------------------------------

/// One stream of a probed file, with the fields classification consults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProbeStream {
    /// Stream index within the container.
    pub index: u32,
    /// Stream kind.
    pub kind: StreamKind,
    /// Generic codec short name (e.g. "h264", "truehd").
    pub codec_name: Option<String>,
    /// Container or encoder specific identifier (e.g. "x264", "thd+").
    pub codec_tag: Option<String>,
    /// Codec profile (e.g. "DTS-HD MA", "Main 10").
    pub profile: Option<String>,
    /// Bit rate in bits per second.
    pub bit_rate: Option<u64>,
    /// Bits per sample (video).
    pub bit_depth: Option<u8>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Frame rate in frames per second.
    pub frame_rate: Option<f64>,
    /// Colour primaries (e.g. "bt2020").
    pub color_primaries: Option<String>,
    /// Transfer characteristic (e.g. "smpte2084").
    pub color_transfer: Option<String>,
    /// Raw channel count (audio).
    pub channels: Option<u32>,
    /// Channel layout description (e.g. "5.1(side)").
    pub channel_layout: Option<String>,
    /// Stream-level duration.
    pub duration: Option<Duration>,
    /// Language tag (ISO 639-2 or IETF).
    pub language: Option<String>,
    /// Whether the stream carries the default disposition.
    #[serde(default)]
    pub default: bool,
    /// Side data types attached to the stream.
    #[serde(default)]
    pub side_data: Vec<String>,
    /// Dolby Vision base-layer signal compatibility id.
    pub dv_bl_compatibility_id: Option<u8>,
}

impl ProbeStream {
    /// Whether any side data entry contains `needle`.
    pub fn has_side_data(&self, needle: &str) -> bool {
        self.side_data.iter().any(|s| s.contains(needle))
    }
}

/// Structured analysis of a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProbeResult {
    /// Path of the probed file.
    pub path: PathBuf,
    /// Container format name (e.g. "matroska,webm").
    pub format_name: String,
    /// Container-level duration; zero when the prober reported none.
    pub duration: Duration,
    /// Overall bit rate in bits per second.
    pub bit_rate: Option<u64>,
    /// File size in bytes.
    pub size: Option<u64>,
    /// All streams, in prober order.
    pub streams: Vec<ProbeStream>,
}

impl ProbeResult {
    /// Iterate over streams of the given kind, in prober order.
    pub fn streams_of(&self, kind: StreamKind) -> impl Iterator<Item = &ProbeStream> {
        self.streams.iter().filter(move |s| s.kind == kind)
    }

    /// Number of streams of the given kind.
    pub fn stream_count(&self, kind: StreamKind) -> usize {
        self.streams_of(kind).count()
    }

    /// The primary video stream: the first one the prober reported.
    pub fn primary_video(&self) -> Option<&ProbeStream> {
        self.streams_of(StreamKind::Video).next()
    }

    /// The primary audio stream: the first one the prober reported.
    pub fn primary_audio(&self) -> Option<&ProbeStream> {
        self.streams_of(StreamKind::Audio).next()
    }
}

// ---------------------------------------------------------------------------
// HdrType
// ---------------------------------------------------------------------------

/// Fine-grained dynamic-range classification of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HdrType {
    #[default]
    None,
    /// PQ transfer without static or dynamic metadata.
    Pq10,
    Hdr10,
    Hdr10Plus,
    Hlg10,
    DolbyVision,
    DolbyVisionHdr10,
    DolbyVisionHdr10Plus,
    DolbyVisionSdr,
    DolbyVisionHlg,
}

impl HdrType {
    /// Whether this type carries extended dynamic range.
    pub fn is_hdr(self) -> bool {
        !matches!(self, HdrType::None)
    }

    /// Whether Dolby Vision signalling is present.
    pub fn is_dolby_vision(self) -> bool {
        matches!(
            self,
            HdrType::DolbyVision
                | HdrType::DolbyVisionHdr10
                | HdrType::DolbyVisionHdr10Plus
                | HdrType::DolbyVisionSdr
                | HdrType::DolbyVisionHlg
        )
    }
}

impl fmt::Display for HdrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, ""),
            Self::Pq10 => write!(f, "PQ"),
            Self::Hdr10 => write!(f, "HDR10"),
            Self::Hdr10Plus => write!(f, "HDR10Plus"),
            Self::Hlg10 => write!(f, "HLG"),
            Self::DolbyVision => write!(f, "DV"),
            Self::DolbyVisionHdr10 => write!(f, "DV HDR10"),
            Self::DolbyVisionHdr10Plus => write!(f, "DV HDR10Plus"),
            Self::DolbyVisionSdr => write!(f, "DV SDR"),
            Self::DolbyVisionHlg => write!(f, "DV HLG"),
        }
    }
}

// ---------------------------------------------------------------------------
// NormalizedMediaInfo
// ---------------------------------------------------------------------------

/// Canonical media metadata for one file.
///
/// `audio_codec` and `video_codec` are `None` when the file has no stream of
/// that kind, and `Some("")` when a stream exists but its format could not be
/// identified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NormalizedMediaInfo {
    pub schema_revision: u32,
    pub container_format: String,

    pub audio_codec: Option<String>,
    pub audio_profile: Option<String>,
    pub audio_bitrate: Option<u64>,
    /// Channel count, fractional for layouts like "5.1".
    pub audio_channels: f64,
    pub audio_stream_count: usize,
    pub audio_languages: Vec<String>,

    pub video_codec: Option<String>,
    pub video_bit_depth: Option<u8>,
    pub video_bitrate: Option<u64>,
    pub video_fps: Option<f64>,
    pub video_color_primaries: Option<String>,
    pub video_color_transfer: Option<String>,
    /// "HDR" or "".
    pub video_dynamic_range: String,
    pub video_dynamic_range_type: HdrType,
    pub width: u32,
    pub height: u32,

    pub subtitles: Vec<String>,
    /// Reconciled runtime.
    pub run_time: Duration,
}
